use std::path::PathBuf;

use palc::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "ifcalc", after_long_help = "Interpreter for a tiny language of arithmetic, bindings and if/else.")]
pub struct Cli {
	/// Only pre-defined variables may be assigned
	#[arg(long)]
	pub strict: bool,
	/// Pre-define a variable, as NAME=VALUE
	#[arg(long)]
	pub define: Vec<String>,
	#[command(subcommand)]
	pub mode:   Mode,
}

#[derive(Subcommand, Debug)]
pub enum Mode {
	/// Input file
	File { path: PathBuf },
	/// Input prompt
	Repl,
}

impl Cli {
	/// Build the run configuration from the flags.
	pub fn config(&self) -> anyhow::Result<crate::Config> {
		self.define.iter().try_fold(crate::Config::default().strict(self.strict), |config, definition| {
			config.define(definition)
		})
	}
}

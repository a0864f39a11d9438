use std::process::ExitCode;

use ifcalc::{Session, cli::*};
use palc::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::from_default_env())
		.with_writer(std::io::stderr)
		.with_target(false)
		.init();

	let cli = Cli::parse();
	let config = match cli.config() {
		Ok(config) => config,
		Err(e) => {
			eprintln!("Invalid arguments: {e:#}");
			return ExitCode::FAILURE;
		}
	};
	let mut session = Session::new(&config);

	match cli.mode {
		Mode::File { path } => {
			let result = session.run_file(&path);
			let (traces, diagnostics) = session.take_output();
			for trace in traces {
				println!("{trace}");
			}
			for diagnostic in diagnostics {
				eprintln!("{diagnostic}");
			}
			if let Err(e) = result {
				eprintln!("Failed run file: {e}");
				return ExitCode::FAILURE;
			}
		}
		Mode::Repl => session.run_prompt(),
	}
	ExitCode::SUCCESS
}

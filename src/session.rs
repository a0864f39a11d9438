use std::{fs::read_to_string, io::Write, path::Path};

use anyhow::Context;

use crate::{CalcError, Config, Diagnostic, Environment, Trace, interpreter::Interpreter, parser::Parser, scanner::Scanner};

/// A session runs source text through scanner, parser and interpreter against
/// one environment it owns exclusively.
///
/// Every run of a session sees the bindings of the runs before it. Independent
/// programs belong in independent sessions.
#[derive(Debug)]
pub struct Session {
	interpreter: Interpreter,
	traces:      Vec<Trace>,
	diagnostics: Vec<Diagnostic>,
}

impl Default for Session {
	fn default() -> Self { Self::new(&Config::default()) }
}

impl Session {
	pub fn new(config: &Config) -> Self {
		Self { interpreter: Interpreter::new(config), traces: Vec::new(), diagnostics: Vec::new() }
	}

	/// Run the source code of a file.
	pub fn run_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), CalcError> {
		let path = path.as_ref();
		let source = read_to_string(path).with_context(|| format!("Failed open source file {}", path.display()))?;
		self.run(&source)
	}

	/// Run the given source code.
	///
	/// Lexical errors and undeclared assignments are recorded as diagnostics
	/// and the run goes on. A syntax error means nothing runs at all, a fatal
	/// runtime error stops the run where it happened. Both are recorded and
	/// returned.
	pub fn run(&mut self, source: &str) -> Result<(), CalcError> {
		let scanned = Scanner::new(source).scan_tokens();
		self.diagnostics.extend(scanned.errors.into_iter().map(Diagnostic::Lexical));

		let program = match Parser::new(scanned.tokens).parse() {
			Ok(program) => program,
			Err(CalcError::ParseError(e)) => {
				tracing::warn!(line = e.line, "{}", e.r#type);
				self.diagnostics.push(Diagnostic::Syntax(e.clone()));
				return Err(e.into());
			}
			Err(e) => return Err(e),
		};

		let result = self.interpreter.interpret(&program);
		let (traces, recovered) = self.interpreter.drain();
		self.traces.extend(traces);
		self.diagnostics.extend(recovered.into_iter().map(Diagnostic::Semantic));
		if let Err(e) = result {
			tracing::warn!(line = e.line(), "run aborted: {e}");
			self.diagnostics.push(Diagnostic::Semantic(e.clone()));
			return Err(e.into());
		}
		Ok(())
	}

	/// Run the REPL prompt. All lines share this session's environment.
	pub fn run_prompt(&mut self) {
		let mut input = String::new();
		let stdin = std::io::stdin();
		loop {
			input.clear();
			print!("> ");
			if let Err(e) = std::io::stdout().flush() {
				eprintln!("Failed flush: {e}");
			}
			match stdin.read_line(&mut input) {
				Ok(0) => {
					println!("\nExited ifcalc repl");
					break;
				}
				Ok(_) => {}
				Err(e) => {
					eprintln!("Failed read line: {e}");
					continue;
				}
			}
			if input.trim().is_empty() {
				continue;
			}
			let result = self.run(input.trim());
			if let Err(e) = self.report(result, &mut std::io::stdout(), &mut std::io::stderr()) {
				eprintln!("Failed write output: {e}");
			}
		}
	}

	/// Print the traces and diagnostics of a run, then forget them.
	///
	/// Language errors are already among the diagnostics, only an internal
	/// error is printed on its own.
	fn report(&mut self, result: Result<(), CalcError>, out: &mut impl Write, err: &mut impl Write) -> std::io::Result<()> {
		let (traces, diagnostics) = self.take_output();
		for trace in traces {
			writeln!(out, "{trace}")?;
		}
		for diagnostic in diagnostics {
			writeln!(err, "{diagnostic}")?;
		}
		if let Err(e @ CalcError::InternalError(_)) = result {
			writeln!(err, "Failed run prompt: {e}")?;
		}
		Ok(())
	}

	pub fn environment(&self) -> &Environment { self.interpreter.environment() }

	/// Traces of every run so far, in execution order.
	pub fn traces(&self) -> &[Trace] { &self.traces }

	/// Diagnostics of every run so far, in the order they were found.
	pub fn diagnostics(&self) -> &[Diagnostic] { &self.diagnostics }

	/// Takes the traces and diagnostics recorded so far.
	pub fn take_output(&mut self) -> (Vec<Trace>, Vec<Diagnostic>) {
		(std::mem::take(&mut self.traces), std::mem::take(&mut self.diagnostics))
	}
}

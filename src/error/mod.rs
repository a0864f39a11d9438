pub mod interpreter;
pub mod parser;
pub mod scanner;

use interpreter::InterpreterError;
use parser::ParseError;
use scanner::ScanError;

/// CalcError is the top-level error type of a run.
#[derive(thiserror::Error, Debug)]
pub enum CalcError {
	/// Failures outside the language itself, such as an unreadable file.
	#[error("InternalError: {0}")]
	InternalError(#[from] anyhow::Error),
	/// The program did not parse, nothing was executed.
	#[error("Syntax error: {0}")]
	ParseError(#[from] ParseError),
	/// Evaluation stopped at a fatal runtime error.
	#[error("Runtime error: {0}")]
	RuntimeError(#[from] InterpreterError),
}

/// One reported problem, in the order it was found.
#[derive(Debug, Clone, PartialEq)]
pub enum Diagnostic {
	Lexical(ScanError),
	Syntax(ParseError),
	Semantic(InterpreterError),
}

impl std::fmt::Display for Diagnostic {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Diagnostic::Lexical(e) => write!(f, "Lexical error: {e}"),
			Diagnostic::Syntax(e) => write!(f, "Syntax error: {e}"),
			Diagnostic::Semantic(e) => write!(f, "Semantic error: {e}"),
		}
	}
}

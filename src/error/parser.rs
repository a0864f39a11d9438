/// A syntax error. Parsing stops at the first one.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[error("line {line}: {type}")]
pub struct ParseError {
	pub line:   usize,
	pub r#type: ParseErrorType,
}

impl ParseError {
	pub fn new(line: usize, r#type: ParseErrorType) -> Self { Self { line, r#type } }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ParseErrorType {
	/// A token that no production accepts at this point.
	UnexpectedToken(String),
	/// The token stream ended in the middle of a statement.
	UnexpectedEof,
	ExpectedExpression(String),
	/// A `(` or `[` without its closing partner.
	UnterminatedGroup(char),
	/// A specific token was required, e.g. `;` or `{`.
	Expected { expected: &'static str, found: String },
	/// Nesting beyond the given number of levels.
	TooDeep(usize),
}

impl std::fmt::Display for ParseErrorType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		use ParseErrorType::*;
		match self {
			UnexpectedToken(lexeme) => {
				write!(f, "Syntax error at '{lexeme}'")
			}
			UnexpectedEof => {
				write!(f, "Syntax error at end of input")
			}
			ExpectedExpression(found) => {
				write!(f, "Expected expression, found '{found}'")
			}
			UnterminatedGroup(closing) => {
				write!(f, "Unterminated group, expected '{closing}'")
			}
			Expected { expected, found } => {
				write!(f, "Expected {expected}, found '{found}'")
			}
			TooDeep(limit) => {
				write!(f, "Nesting deeper than {limit} levels")
			}
		}
	}
}

/// Everything that can stop the parser.
#[derive(thiserror::Error, Debug)]
pub enum ParserError {
	/// Internal parser error, e.g. reading past `Eof`. Should never happen.
	#[error("{0}")]
	InternalError(#[from] anyhow::Error),
	#[error(transparent)]
	ParseError(#[from] ParseError),
}

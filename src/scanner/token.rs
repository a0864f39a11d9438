/// A token produced by the scanner
#[derive(Debug, Clone, PartialEq)]
pub struct Token<'a> {
	pub r#type: TokenType<'a>,
	pub lexeme: &'a str,
	pub line:   usize,
}

impl<'a> Token<'a> {
	pub fn new(r#type: TokenType<'a>, lexeme: &'a str, line: usize) -> Self { Self { r#type, lexeme, line } }
}

/// The different types of tokens, The copying is lightweight
#[derive(Debug, Clone, PartialEq)]
pub enum TokenType<'a> {
	/// New Line Character `\n`.
	NewLine,
	/// Empty Character: ` `, `\r`, `\t`.
	EmptyChar,
	/// Left parenthesis `(`.
	LeftParen,
	/// Right parenthesis `)`.
	RightParen,
	/// Left bracket `[`.
	LeftBracket,
	/// Right bracket `]`.
	RightBracket,
	/// Left brace `{`.
	LeftBrace,
	/// Right brace `}`.
	RightBrace,
	/// Minus `-`.
	Minus,
	/// Plus `+`.
	Plus,
	/// Semicolon `;`.
	Semicolon,
	/// Slash `/`.
	Slash,
	/// Asterisk `*`.
	Star,
	/// Equal `=`.
	Equal,
	/// Equal equal `==`.
	EqualEqual,
	/// Greater than `>`.
	Greater,
	/// Greater than or equal `>=`.
	GreaterEqual,
	/// Less than `<`.
	Less,
	/// Less than or equal `<=`.
	LessEqual,
	/// Identifier, e.g. a variable name.
	Identifier(&'a str),
	/// Integer literal, e.g. `123`.
	Integer(i64),
	/// Decimal literal, e.g. `123.45`.
	Decimal(f64),
	/// If statement keyword.
	If,
	/// Else keyword.
	Else,
	/// `Evaluar` keyword, starts an expression statement whose value is traced.
	Evaluar,
	/// End of file/input.
	Eof,
}

impl<'a> TokenType<'a> {
	pub fn is_ignored(&self) -> bool { matches!(self, TokenType::EmptyChar | TokenType::NewLine) }

	pub fn keyword_or_identifier(value: &'a str) -> Self {
		match value {
			"if" => TokenType::If,
			"else" => TokenType::Else,
			"Evaluar" => TokenType::Evaluar,
			_ => TokenType::Identifier(value),
		}
	}
}

//! Turns source text into tokens.
//!
//! Keywords are part of the shape of the grammar, so the parser wants to know
//! not just that it has a lexeme for some identifier, but that it has a
//! reserved word, and which keyword it is. We can't detect a reserved word
//! until we've reached the end of what might instead be an identifier, so
//! identifiers are scanned first and then looked up in the keyword table
//! (`maximal munch`). The same rule makes `<=` win over `<`.
//!
//! Numbers are converted to their runtime representation right here: a lexeme
//! with a fractional part becomes a `Decimal`, anything else an `Integer`.
//!
//! The scanner never gives up. A character that starts no token is reported
//! and skipped, and scanning resumes with the next one.
mod token;

use std::{iter::Peekable, str::CharIndices};

use TokenType::*;
pub use token::*;

use crate::error::scanner::{ScanError, ScanErrorType};

/// A scanner over one source text.
///
/// Scanning is lazy: tokens are produced as the iterator is driven. Scanning
/// the same text with a fresh scanner yields the same sequence.
pub struct Scanner<'a> {
	/// User input source code
	source:      &'a str,
	/// User input source code iterator
	source_iter: Peekable<CharIndices<'a>>,
	/// Points at the beginning of the current lexeme
	start:       usize,
	/// Points at the character currently being considered
	cursor:      usize,
	/// Tracks what source line `cursor` is on so we can produce tokens that know
	/// their location.
	line:        usize,
}

/// Everything one scan produced. Errors were recovered from, the tokens
/// always end with `Eof`.
#[derive(Debug)]
pub struct Scanned<'a> {
	pub tokens: Vec<Token<'a>>,
	pub errors: Vec<ScanError>,
}

impl<'a> Scanner<'a> {
	pub fn new(source: &'a str) -> Self {
		let source_iter = source.char_indices().peekable();

		Self { source, source_iter, start: 0, cursor: 0, line: 1 }
	}

	/// Scan all tokens from the source code
	pub fn scan_tokens(mut self) -> Scanned<'a> {
		let mut tokens = Vec::new();
		let mut errors = Vec::new();
		for result in self.by_ref() {
			match result {
				Ok(token) => tokens.push(token),
				Err(e) => {
					tracing::warn!(line = e.line, "{}", e.r#type);
					errors.push(e);
				}
			}
		}
		tokens.push(Token::new(Eof, "", self.line));
		tracing::debug!(tokens = tokens.len(), errors = errors.len(), "scanned source");
		Scanned { tokens, errors }
	}

	/// Scan a single lexeme. Returns `None` for lexemes that produce no token.
	fn scan_token(&mut self, next_char: char) -> Result<Option<Token<'a>>, ScanError> {
		#[rustfmt::skip]
		let r#type = match next_char {
			'(' => LeftParen,
			')' => RightParen,
			'[' => LeftBracket,
			']' => RightBracket,
			'{' => LeftBrace,
			'}' => RightBrace,
			'-' => Minus,
			'+' => Plus,
			';' => Semicolon,
			'*' => Star,
			'/' => Slash,
			'=' => if self.match_next('=') { EqualEqual } else { Equal },
			'<' => if self.match_next('=') { LessEqual } else { Less },
			'>' => if self.match_next('=') { GreaterEqual } else { Greater },
			' ' | '\r' | '\t' => EmptyChar,
			'\n' => NewLine,
			c if c.is_ascii_digit() => self.number()?,
			c if c.is_ascii_alphabetic() || c == '_' => self.identifier(),
			_ => return Err(ScanError::new(self.line, ScanErrorType::UnexpectedCharacter(next_char))),
		};

		if r#type.is_ignored() {
			return Ok(None);
		}
		let lexeme = &self.source[self.start..self.cursor];
		Ok(Some(Token::new(r#type, lexeme, self.line)))
	}

	/// Match the next character if it is the expected one
	fn match_next(&mut self, expected: char) -> bool {
		matches!(self.peek(), Some(c) if c == expected && { self.advance(); true })
	}

	/// Advance to the next character
	fn advance(&mut self) -> Option<char> {
		let (i, c) = self.source_iter.next()?;
		self.cursor = i + c.len_utf8();
		Some(c)
	}

	/// Peek the current character
	fn peek(&mut self) -> Option<char> { self.source_iter.peek().map(|&(_, c)| c) }

	/// Peek the second character ahead
	fn peek_second(&mut self) -> Option<char> {
		let mut it = self.source_iter.clone();
		it.next()?;
		it.peek().map(|&(_, c)| c)
	}

	/// Scan a number literal
	fn number(&mut self) -> Result<TokenType<'a>, ScanError> {
		while self.peek().is_some_and(|c| c.is_ascii_digit()) {
			self.advance();
		}

		// Look for a fractional part.
		if self.peek() == Some('.') && self.peek_second().is_some_and(|c| c.is_ascii_digit()) {
			self.advance(); // consume '.'
			while self.peek().is_some_and(|c| c.is_ascii_digit()) {
				self.advance();
			}
			let s = &self.source[self.start..self.cursor];
			return match s.parse::<f64>() {
				Ok(n) if n.is_finite() => Ok(Decimal(n)),
				_ => Err(ScanError::new(self.line, ScanErrorType::InvalidNumber(s.to_string()))),
			};
		}

		let s = &self.source[self.start..self.cursor];
		s.parse().map(Integer).map_err(|_| ScanError::new(self.line, ScanErrorType::InvalidNumber(s.to_string())))
	}

	/// Scan an identifier or keyword
	fn identifier(&mut self) -> TokenType<'a> {
		while self.peek().is_some_and(|c| c.is_ascii_alphanumeric() || c == '_') {
			self.advance();
		}
		let text = &self.source[self.start..self.cursor];
		TokenType::keyword_or_identifier(text)
	}
}

impl<'a> Iterator for Scanner<'a> {
	type Item = Result<Token<'a>, ScanError>;

	fn next(&mut self) -> Option<Self::Item> {
		loop {
			// We are at the beginning of the next lexeme.
			let &(index, _) = self.source_iter.peek()?;
			self.start = index;
			self.cursor = index;
			let next_char = self.advance()?;
			let result = self.scan_token(next_char);
			if next_char == '\n' {
				self.line += 1;
			}
			match result {
				Ok(Some(token)) => return Some(Ok(token)),
				Ok(None) => continue,
				Err(e) => return Some(Err(e)),
			}
		}
	}
}

//! The `Scanner` uses the `Lexical grammar`: its alphabet is characters, its
//! strings are tokens. The `Parser` uses the `Syntactic grammar`: its alphabet
//! is tokens, its strings are statements.
//!
//! |Name|Operators|Associates
//! --|--|--
//! Term|+ -|Left
//! Factor|* /|Left
//! Unary|-|Right
//!
//! Comparisons have no precedence level of their own. They only appear as the
//! guard of an `if`, with exactly one operator between two expressions.
//!
//! Grammar:
//!
//! ``` BNF
//! program        → statement+ EOF ;
//! statement      → assignment | if | evaluate ;
//! assignment     → IDENTIFIER "=" expression ";" ;
//! evaluate       → "Evaluar" expression ";" ;
//! if             → "if" "(" condition ")" block ( "else" block )? ;
//! block          → "{" statement+ "}" ;
//! condition      → expression ( "<" | ">" | "<=" | ">=" | "==" ) expression ;
//! expression     → term ;
//! term           → factor ( ( "-" | "+" ) factor )* ;
//! factor         → unary ( ( "/" | "*" ) unary )* ;
//! unary          → "-" unary | primary ;
//! primary        → INTEGER | DECIMAL | IDENTIFIER | "(" expression ")" | "[" expression "]" ;
//! ```
//!
//! There is no error recovery. The first syntax error ends the parse and no
//! partial program is returned.
//!
//! Nesting is bounded by [`MAX_DEPTH`]: both the height of every expression
//! tree and the nesting of groups, negations and blocks. Deeper input is a
//! syntax error, so neither the parser nor the interpreter can exhaust the
//! stack.

pub mod expression;

use std::{iter::Peekable, vec::IntoIter};

use TokenType::*;
use anyhow::anyhow;
use expression::{BinaryOperator, CompareOperator, Condition, Expression, LiteralValue, UnaryOperator};

use crate::{CalcError, error::parser::{ParseError, ParseErrorType, ParserError}, scanner::{Token, TokenType}, statement::{Program, Statement}};

/// The deepest nesting a program may use.
pub const MAX_DEPTH: usize = 256;

pub struct Parser<'a> {
	/// The tokens to parse, always terminated by `Eof`.
	tokens: Peekable<IntoIter<Token<'a>>>,
	/// Groups, negations and blocks currently open.
	depth:  usize,
}

/// A parsed expression together with the height of its tree.
struct Subtree {
	expression: Box<Expression>,
	height:     usize,
}

impl<'a> Parser<'a> {
	pub fn new(tokens: Vec<Token<'a>>) -> Self { Self { tokens: tokens.into_iter().peekable(), depth: 0 } }

	pub fn parse(mut self) -> Result<Program, CalcError> {
		match self.program() {
			Ok(program) => {
				tracing::debug!(statements = program.statements.len(), "parsed program");
				Ok(program)
			}
			Err(ParserError::InternalError(e)) => Err(e.into()),
			Err(ParserError::ParseError(e)) => Err(e.into()),
		}
	}

	fn program(&mut self) -> Result<Program, ParserError> {
		let mut statements = vec![self.statement()?];
		while !matches!(self.peek()?.r#type, Eof) {
			statements.push(self.statement()?);
		}
		Ok(Program { statements })
	}

	fn statement(&mut self) -> Result<Statement, ParserError> {
		match self.peek()?.r#type.clone() {
			Identifier(_) => self.assignment(),
			If => self.if_statement(),
			Evaluar => self.evaluate(),
			_ => Err(self.unexpected()?.into()),
		}
	}

	fn assignment(&mut self) -> Result<Statement, ParserError> {
		let target = self.advance()?;
		self.consume(Equal, "'='")?;
		let value = self.expression()?;
		self.consume(Semicolon, "';'")?;
		Ok(Statement::Assignment { name: target.lexeme.to_string(), value: *value, line: target.line })
	}

	fn evaluate(&mut self) -> Result<Statement, ParserError> {
		let keyword = self.advance()?;
		let expression = self.expression()?;
		self.consume(Semicolon, "';'")?;
		Ok(Statement::Evaluate { expression: *expression, line: keyword.line })
	}

	fn if_statement(&mut self) -> Result<Statement, ParserError> {
		self.advance()?; // consume 'if'
		self.consume(LeftParen, "'('")?;
		let condition = self.condition()?;
		self.consume(RightParen, "')'")?;
		let then_branch = self.block()?;
		let else_branch = if matches!(self.peek()?.r#type, Else) {
			self.advance()?;
			Some(self.block()?)
		} else {
			None
		};
		Ok(Statement::If { condition, then_branch, else_branch })
	}

	fn block(&mut self) -> Result<Vec<Statement>, ParserError> {
		let line = self.consume(LeftBrace, "'{'")?.line;
		self.descend(line)?;
		let mut statements = vec![self.statement()?];
		while !matches!(self.peek()?.r#type, RightBrace) {
			statements.push(self.statement()?);
		}
		self.advance()?; // consume '}'
		self.depth -= 1;
		Ok(statements)
	}

	fn condition(&mut self) -> Result<Condition, ParserError> {
		let left = self.expression()?;
		let Some(operator) = CompareOperator::from_token(&self.peek()?.r#type) else {
			return Err(self.expected("comparison operator")?.into());
		};
		let line = self.advance()?.line;
		let right = self.expression()?;
		Ok(Condition { left: *left, operator, right: *right, line })
	}

	fn expression(&mut self) -> Result<Box<Expression>, ParserError> { Ok(self.term()?.expression) }

	/// Parse term expressions.
	fn term(&mut self) -> Result<Subtree, ParserError> {
		let mut left = self.factor()?;
		while matches!(self.peek()?.r#type, Minus | Plus) {
			let (operator, line) = self.binary_operator()?;
			let right = self.factor()?;
			left = self.binary(left, operator, right, line)?;
		}
		Ok(left)
	}

	/// Parse factor expressions.
	fn factor(&mut self) -> Result<Subtree, ParserError> {
		let mut left = self.unary()?;
		while matches!(self.peek()?.r#type, Slash | Star) {
			let (operator, line) = self.binary_operator()?;
			let right = self.unary()?;
			left = self.binary(left, operator, right, line)?;
		}
		Ok(left)
	}

	/// Parse unary expressions.
	fn unary(&mut self) -> Result<Subtree, ParserError> {
		if matches!(self.peek()?.r#type, Minus) {
			let line = self.advance()?.line;
			self.descend(line)?;
			let right = self.unary()?;
			self.depth -= 1;
			let height = self.check_height(right.height + 1, line)?;
			return Ok(Subtree { expression: Expression::unary(UnaryOperator::Negate, right.expression, line), height });
		}
		self.primary()
	}

	/// Parse primary expressions.
	fn primary(&mut self) -> Result<Subtree, ParserError> {
		let token = self.peek()?.clone();
		let leaf = |expression| Subtree { expression, height: 1 };
		match token.r#type {
			Integer(n) => {
				self.advance()?;
				Ok(leaf(Expression::literal(LiteralValue::Integer(n))))
			}
			Decimal(n) => {
				self.advance()?;
				Ok(leaf(Expression::literal(LiteralValue::Decimal(n))))
			}
			Identifier(name) => {
				self.advance()?;
				Ok(leaf(Expression::variable(name, token.line)))
			}
			LeftParen => self.group(RightParen, ')'),
			LeftBracket => self.group(RightBracket, ']'),
			Eof => Err(self.unexpected()?.into()),
			_ => {
				let error = ParseError::new(token.line, ParseErrorType::ExpectedExpression(token.lexeme.to_string()));
				Err(error.into())
			}
		}
	}

	/// Parse `( expression )` or `[ expression ]`.
	fn group(&mut self, closing: TokenType<'a>, symbol: char) -> Result<Subtree, ParserError> {
		let line = self.advance()?.line; // consume the opening delimiter
		self.descend(line)?;
		let inner = self.term()?;
		if self.peek()?.r#type != closing {
			return Err(ParseError::new(self.peek()?.line, ParseErrorType::UnterminatedGroup(symbol)).into());
		}
		self.advance()?; // consume the closing delimiter
		self.depth -= 1;
		Ok(inner)
	}

	fn binary(&self, left: Subtree, operator: BinaryOperator, right: Subtree, line: usize) -> Result<Subtree, ParserError> {
		let height = self.check_height(left.height.max(right.height) + 1, line)?;
		Ok(Subtree { expression: Expression::binary(left.expression, operator, right.expression, line), height })
	}

	/// Enter one more level of nesting.
	fn descend(&mut self, line: usize) -> Result<(), ParserError> {
		self.depth += 1;
		if self.depth > MAX_DEPTH {
			return Err(ParseError::new(line, ParseErrorType::TooDeep(MAX_DEPTH)).into());
		}
		Ok(())
	}

	fn check_height(&self, height: usize, line: usize) -> Result<usize, ParserError> {
		if height > MAX_DEPTH {
			return Err(ParseError::new(line, ParseErrorType::TooDeep(MAX_DEPTH)).into());
		}
		Ok(height)
	}

	fn binary_operator(&mut self) -> Result<(BinaryOperator, usize), ParserError> {
		let token = self.advance()?;
		let operator = BinaryOperator::from_token(&token.r#type)
			.ok_or_else(|| anyhow!("Token {:?} is not a binary operator", token.r#type))?;
		Ok((operator, token.line))
	}

	/// Consume a token of the given type or fail naming what was expected.
	fn consume(&mut self, r#type: TokenType<'a>, expected: &'static str) -> Result<Token<'a>, ParserError> {
		if self.peek()?.r#type == r#type {
			return self.advance();
		}
		Err(self.expected(expected)?.into())
	}

	fn expected(&mut self, expected: &'static str) -> Result<ParseError, ParserError> {
		let token = self.peek()?;
		if matches!(token.r#type, Eof) {
			return self.unexpected();
		}
		Ok(ParseError::new(token.line, ParseErrorType::Expected { expected, found: token.lexeme.to_string() }))
	}

	/// Build the error for the token at the cursor.
	fn unexpected(&mut self) -> Result<ParseError, ParserError> {
		let token = self.peek()?;
		let r#type = match token.r#type {
			Eof => ParseErrorType::UnexpectedEof,
			_ => ParseErrorType::UnexpectedToken(token.lexeme.to_string()),
		};
		Ok(ParseError::new(token.line, r#type))
	}

	/// Advance to the next token.
	fn advance(&mut self) -> Result<Token<'a>, ParserError> {
		self.tokens.next().ok_or_else(|| anyhow!("Unexpected EOF").into())
	}

	/// Peek at the current token.
	fn peek(&mut self) -> Result<&Token<'a>, ParserError> {
		self.tokens.peek().ok_or_else(|| anyhow!("Unexpected EOF").into())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::scanner::Scanner;

	fn try_parse(input: &str) -> Result<Program, CalcError> { Parser::new(Scanner::new(input).scan_tokens().tokens).parse() }

	fn parse(input: &str, equals: &str) {
		let program = try_parse(input).unwrap();
		assert_eq!(program.to_string(), equals);
	}

	fn parse_error(input: &str) -> ParseError {
		match try_parse(input) {
			Err(CalcError::ParseError(e)) => e,
			other => panic!("expected a syntax error for {input:?}, got {other:?}"),
		}
	}

	#[test]
	fn parse_expressions() {
		parse("x = 3 + 4 * (-2 - 1);", "x = (3 + (4 * ((-2) - 1)));");
		parse("x = 1 + 2 * 3 / 4 - 5;", "x = ((1 + ((2 * 3) / 4)) - 5);");
		parse("x = 8 + 800.5 * 123 / 65 - (2 + 3);", "x = ((8 + ((800.5 * 123) / 65)) - (2 + 3));");
	}

	#[test]
	fn parse_precedence_and_associativity() {
		parse("x = 2 + 3 * 4;", "x = (2 + (3 * 4));");
		parse("x = 10 - 3 - 2;", "x = ((10 - 3) - 2);");
		parse("x = 8 / 4 / 2;", "x = ((8 / 4) / 2);");
		parse("x = 8 / 4 * 2;", "x = ((8 / 4) * 2);");
	}

	#[test]
	fn parse_unary() {
		parse("x = -123;", "x = (-123);");
		parse("x = -a - b;", "x = ((-a) - b);");
		parse("x = - (2 - 3);", "x = (-(2 - 3));");
		parse("x = --1;", "x = (-(-1));");
		parse("x = -2 * 3;", "x = ((-2) * 3);");
	}

	#[test]
	fn parse_literals() {
		parse("x = 42;", "x = 42;");
		parse("x = 3.5;", "x = 3.5;");
		parse("x = 2.0;", "x = 2.0;");
		parse("x = y;", "x = y;");
	}

	#[test]
	fn parse_grouping() {
		parse("x = (1 + 2) * 3;", "x = ((1 + 2) * 3);");
		parse("x = [1 + 2] * 3;", "x = ((1 + 2) * 3);");
		parse("x = ((1));", "x = 1;");
		parse("x = [(1 + 2)] * [3];", "x = ((1 + 2) * 3);");
		assert_eq!(try_parse("x = (2 + 3) * 4;").unwrap(), try_parse("x = [2 + 3] * 4;").unwrap());
	}

	#[test]
	fn parse_statements() {
		let program = try_parse("x = 10;\ny = 5;\nz = x + y * 2;").unwrap();
		assert_eq!(program.statements.len(), 3);
		assert!(matches!(&program.statements[2], Statement::Assignment { name, line: 3, .. } if name == "z"));
		parse("Evaluar 1 + 2;", "Evaluar (1 + 2);");
	}

	#[test]
	fn parse_conditionals() {
		parse("if (x < 10) { y = 5; }", "if (x < 10) { y = 5; }");
		parse("if (x >= 1 + 2) { y = 5; } else { y = 20; z = 1; }", "if (x >= (1 + 2)) { y = 5; } else { y = 20; z = 1; }");
		parse("if (x == y) { if (y > 0) { z = 1; } }", "if (x == y) { if (y > 0) { z = 1; } }");
		parse("if (a <= b) { c = 1; } d = 2;", "if (a <= b) { c = 1; }\nd = 2;");
	}

	#[test]
	fn parse_syntax_errors() {
		assert_eq!(parse_error("x = 1"), ParseError::new(1, ParseErrorType::UnexpectedEof));
		assert_eq!(parse_error(""), ParseError::new(1, ParseErrorType::UnexpectedEof));
		assert_eq!(parse_error("x = ;"), ParseError::new(1, ParseErrorType::ExpectedExpression(";".to_string())));
		assert_eq!(parse_error("x = (1 + 2;"), ParseError::new(1, ParseErrorType::UnterminatedGroup(')')));
		assert_eq!(parse_error("x = [1 + 2);"), ParseError::new(1, ParseErrorType::UnterminatedGroup(']')));
		assert_eq!(parse_error("x = 1;\n) y = 2;"), ParseError::new(2, ParseErrorType::UnexpectedToken(")".to_string())));
		assert_eq!(
			parse_error("x 1;"),
			ParseError::new(1, ParseErrorType::Expected { expected: "'='", found: "1".to_string() })
		);
	}

	#[test]
	fn parse_condition_errors() {
		assert_eq!(
			parse_error("if (x) { y = 1; }"),
			ParseError::new(1, ParseErrorType::Expected { expected: "comparison operator", found: ")".to_string() })
		);
		assert_eq!(
			parse_error("if (a < b < c) { y = 1; }"),
			ParseError::new(1, ParseErrorType::Expected { expected: "')'", found: "<".to_string() })
		);
		assert_eq!(parse_error("if (a < b) { }"), ParseError::new(1, ParseErrorType::UnexpectedToken("}".to_string())));
		assert_eq!(parse_error("x = a < b;"), ParseError::new(1, ParseErrorType::Expected { expected: "';'", found: "<".to_string() }));
		assert_eq!(parse_error("if (a < b) { y = 1; } else"), ParseError::new(1, ParseErrorType::UnexpectedEof));
	}

	#[test]
	fn parse_nesting_limit() {
		let too_deep = ParseError::new(1, ParseErrorType::TooDeep(MAX_DEPTH));

		assert!(try_parse(&format!("x = {}1;", "-".repeat(MAX_DEPTH - 1))).is_ok());
		assert_eq!(parse_error(&format!("x = {}1;", "-".repeat(MAX_DEPTH))), too_deep);
		assert_eq!(parse_error(&format!("x = {}1;", "-".repeat(200_000))), too_deep);

		assert!(try_parse(&format!("x = {}1{};", "(".repeat(MAX_DEPTH), ")".repeat(MAX_DEPTH))).is_ok());
		assert_eq!(parse_error(&format!("x = {}1{};", "[".repeat(200_000), "]".repeat(200_000))), too_deep);

		assert!(try_parse(&format!("x = 1{};", " + 1".repeat(MAX_DEPTH - 1))).is_ok());
		assert_eq!(parse_error(&format!("x = 1{};", " * 1".repeat(MAX_DEPTH))), too_deep);

		let nested = |levels: usize| format!("{}y = 1;{}", "if (1 < 2) { ".repeat(levels), " }".repeat(levels));
		assert!(try_parse(&nested(MAX_DEPTH)).is_ok());
		assert_eq!(parse_error(&nested(MAX_DEPTH + 1)), too_deep);
	}

	#[test]
	fn parse_is_deterministic() {
		let source = "x = 12; if (x < 10) { y = 5; } else { y = 20; }";
		assert_eq!(try_parse(source).unwrap(), try_parse(source).unwrap());
	}
}

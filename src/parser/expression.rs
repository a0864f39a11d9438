//! Expression AST nodes
//!
//! An `Expression` is a tree structure representing code like `-123 * (45.67)`
//! as nested nodes. Grouping leaves no node behind: `(a + b) * c` and
//! `[a + b] * c` build the same tree, the brackets only steered the parser.

use Expression::*;

use crate::scanner::TokenType;

/// Expression AST nodes
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
	Literal(LiteralValue),
	/// A read of a variable, resolved at evaluation time.
	Variable { name: String, line: usize },
	Unary { operator: UnaryOperator, right: Box<Expression>, line: usize },
	Binary { left: Box<Expression>, operator: BinaryOperator, right: Box<Expression>, line: usize },
}

impl Expression {
	pub fn literal(value: LiteralValue) -> Box<Self> { Box::new(Literal(value)) }

	pub fn variable(name: &str, line: usize) -> Box<Self> { Box::new(Variable { name: name.to_string(), line }) }

	pub fn unary(operator: UnaryOperator, right: Box<Self>, line: usize) -> Box<Self> {
		Box::new(Unary { operator, right, line })
	}

	pub fn binary(left: Box<Self>, operator: BinaryOperator, right: Box<Self>, line: usize) -> Box<Self> {
		Box::new(Binary { left, operator, right, line })
	}
}

/// Literal values in the AST, typed exactly as they were lexed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LiteralValue {
	Integer(i64),
	Decimal(f64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
	Negate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
	Add,
	Subtract,
	Multiply,
	Divide,
}

impl BinaryOperator {
	pub fn from_token(r#type: &TokenType) -> Option<Self> {
		Some(match r#type {
			TokenType::Plus => Self::Add,
			TokenType::Minus => Self::Subtract,
			TokenType::Star => Self::Multiply,
			TokenType::Slash => Self::Divide,
			_ => return None,
		})
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOperator {
	Less,
	Greater,
	LessEqual,
	GreaterEqual,
	Equal,
}

impl CompareOperator {
	pub fn from_token(r#type: &TokenType) -> Option<Self> {
		Some(match r#type {
			TokenType::Less => Self::Less,
			TokenType::Greater => Self::Greater,
			TokenType::LessEqual => Self::LessEqual,
			TokenType::GreaterEqual => Self::GreaterEqual,
			TokenType::EqualEqual => Self::Equal,
			_ => return None,
		})
	}
}

/// The guard of an `if`. Only valid there, comparisons are not expressions.
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
	pub left:     Expression,
	pub operator: CompareOperator,
	pub right:    Expression,
	pub line:     usize,
}

impl std::fmt::Display for Expression {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Literal(lit) => write!(f, "{lit}"),
			Variable { name, .. } => write!(f, "{name}"),
			Unary { operator, right, .. } => write!(f, "({operator}{right})"),
			Binary { left, operator, right, .. } => write!(f, "({left} {operator} {right})"),
		}
	}
}

impl std::fmt::Display for LiteralValue {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			LiteralValue::Integer(n) => write!(f, "{n}"),
			// Debug keeps the fractional part: `2.0`, not `2`.
			LiteralValue::Decimal(n) => write!(f, "{n:?}"),
		}
	}
}

impl std::fmt::Display for UnaryOperator {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			UnaryOperator::Negate => write!(f, "-"),
		}
	}
}

impl std::fmt::Display for BinaryOperator {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let symbol = match self {
			BinaryOperator::Add => "+",
			BinaryOperator::Subtract => "-",
			BinaryOperator::Multiply => "*",
			BinaryOperator::Divide => "/",
		};
		f.write_str(symbol)
	}
}

impl std::fmt::Display for CompareOperator {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let symbol = match self {
			CompareOperator::Less => "<",
			CompareOperator::Greater => ">",
			CompareOperator::LessEqual => "<=",
			CompareOperator::GreaterEqual => ">=",
			CompareOperator::Equal => "==",
		};
		f.write_str(symbol)
	}
}

impl std::fmt::Display for Condition {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "({} {} {})", self.left, self.operator, self.right)
	}
}

//! There is no place in the grammar where both an expression and a statement
//! are allowed. The operands of `+` are always expressions, never statements.
//! The branches of an `if` are always statements.

use crate::parser::expression::{Condition, Expression};

/// A statement in the programming language.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
	/// `name = value;`. Declares the name on first use, rebinds it afterwards.
	Assignment { name: String, value: Expression, line: usize },
	/// `if (condition) { ... } else { ... }`. Both blocks are non-empty.
	If { condition: Condition, then_branch: Vec<Statement>, else_branch: Option<Vec<Statement>> },
	/// `Evaluar expression;`, whose value is traced.
	Evaluate { expression: Expression, line: usize },
}

/// A whole parsed program.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
	pub statements: Vec<Statement>,
}

fn write_block(f: &mut std::fmt::Formatter<'_>, block: &[Statement]) -> std::fmt::Result {
	write!(f, "{{")?;
	for statement in block {
		write!(f, " {statement}")?;
	}
	write!(f, " }}")
}

impl std::fmt::Display for Statement {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Statement::Assignment { name, value, .. } => write!(f, "{name} = {value};"),
			Statement::If { condition, then_branch, else_branch } => {
				write!(f, "if {condition} ")?;
				write_block(f, then_branch)?;
				if let Some(else_branch) = else_branch {
					write!(f, " else ")?;
					write_block(f, else_branch)?;
				}
				Ok(())
			}
			Statement::Evaluate { expression, .. } => write!(f, "Evaluar {expression};"),
		}
	}
}

impl std::fmt::Display for Program {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let lines: Vec<String> = self.statements.iter().map(|s| s.to_string()).collect();
		write!(f, "{}", lines.join("\n"))
	}
}

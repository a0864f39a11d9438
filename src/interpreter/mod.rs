//! Tree-walking evaluator.
//!
//! The interpreter walks the program produced by the parser, recursively
//! evaluating each expression and executing each statement in order.
//!
//! # Semantics
//!
//! - **Literals** keep the kind they were lexed with.
//! - **Unary** `-` keeps the operand's kind.
//! - **Binary** `+ - *` give an int only when both operands are ints. `/`
//!   always gives a float and fails on a zero divisor. Ints that leave 64
//!   bits and floats that are not finite are an overflow.
//! - **Assignment** writes into the environment and records a [`Trace`].
//! - **If** runs exactly one branch, or nothing.
//!
//! Operands are evaluated left before right. An `UndeclaredAssignment` skips
//! its statement and execution continues, every other runtime error ends the
//! run.

pub mod value;

use std::fmt::Display;

use Expression::*;
use value::{ArithmeticError, Number};

use crate::{config::{AssignmentPolicy, Config}, environment::Environment, error::interpreter::InterpreterError, parser::expression::{Condition, Expression, LiteralValue, UnaryOperator}, statement::{Program, Statement}};

/// An externally visible effect of execution.
#[derive(Debug, Clone, PartialEq)]
pub enum Trace {
	/// A name was bound for the first time.
	Declared { name: String, value: Number },
	/// An existing name was rebound.
	Updated { name: String, value: Number },
	/// The value of an `Evaluar` statement.
	Evaluated { expression: String, value: Number },
}

impl Display for Trace {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Trace::Declared { name, value } => {
				write!(f, "Variable declared: {name} of type {} = {value}", value.kind())
			}
			Trace::Updated { name, value } => write!(f, "Variable '{name}' updated with value {value}"),
			Trace::Evaluated { expression, value } => write!(f, "{expression} => {value}"),
		}
	}
}

/// Interpreter that executes programs against the environment it owns.
#[derive(Debug, Default)]
pub struct Interpreter {
	environment: Environment,
	assignment:  AssignmentPolicy,
	traces:      Vec<Trace>,
	/// Errors that skipped a statement without ending the run.
	recovered:   Vec<InterpreterError>,
}

impl Interpreter {
	pub fn new(config: &Config) -> Self {
		let mut environment = Environment::new();
		for (name, value) in &config.defines {
			environment.define(name, *value);
		}
		Self::with_environment(environment, config.assignment)
	}

	pub fn with_environment(environment: Environment, assignment: AssignmentPolicy) -> Self {
		Self { environment, assignment, traces: Vec::new(), recovered: Vec::new() }
	}

	pub fn environment(&self) -> &Environment { &self.environment }

	pub fn traces(&self) -> &[Trace] { &self.traces }

	pub fn recovered(&self) -> &[InterpreterError] { &self.recovered }

	/// Takes the traces and recovered errors produced so far.
	pub fn drain(&mut self) -> (Vec<Trace>, Vec<InterpreterError>) {
		(std::mem::take(&mut self.traces), std::mem::take(&mut self.recovered))
	}

	/// Execute a whole program. Stops at the first unrecoverable error.
	pub fn interpret(&mut self, program: &Program) -> Result<(), InterpreterError> {
		tracing::debug!(statements = program.statements.len(), "interpreting program");
		self.execute_block(&program.statements)
	}

	fn execute_block(&mut self, statements: &[Statement]) -> Result<(), InterpreterError> {
		for statement in statements {
			match self.execute(statement) {
				Err(e) if e.is_recoverable() => {
					tracing::warn!(line = e.line(), "skipped statement: {e}");
					self.recovered.push(e);
				}
				result => result?,
			}
		}
		Ok(())
	}

	fn execute(&mut self, statement: &Statement) -> Result<(), InterpreterError> {
		match statement {
			Statement::Assignment { name, value, line } => {
				let value = self.evaluate(value)?;
				let trace = if self.environment.assign(name, value).is_some() {
					Trace::Updated { name: name.clone(), value }
				} else {
					match self.assignment {
						AssignmentPolicy::Declare => {
							self.environment.define(name, value);
							Trace::Declared { name: name.clone(), value }
						}
						AssignmentPolicy::RequireDeclared => {
							return Err(InterpreterError::UndeclaredAssignment { name: name.clone(), line: *line });
						}
					}
				};
				tracing::debug!(line, "{trace}");
				self.traces.push(trace);
			}
			Statement::If { condition, then_branch, else_branch } => {
				let taken = self.condition(condition)?;
				tracing::debug!(line = condition.line, taken, "if {condition}");
				if taken {
					self.execute_block(then_branch)?
				} else if let Some(else_branch) = else_branch {
					self.execute_block(else_branch)?
				}
			}
			Statement::Evaluate { expression, line } => {
				let value = self.evaluate(expression)?;
				let trace = Trace::Evaluated { expression: expression.to_string(), value };
				tracing::debug!(line, "{trace}");
				self.traces.push(trace);
			}
		}
		Ok(())
	}

	/// Evaluate a guard.
	fn condition(&self, condition: &Condition) -> Result<bool, InterpreterError> {
		let left = self.evaluate(&condition.left)?;
		let right = self.evaluate(&condition.right)?;
		Ok(left.compare(condition.operator, &right))
	}

	/// Evaluate the given expression and return its value.
	pub fn evaluate(&self, expr: &Expression) -> Result<Number, InterpreterError> {
		Ok(match expr {
			Literal(LiteralValue::Integer(n)) => Number::Int(*n),
			Literal(LiteralValue::Decimal(n)) => Number::Float(*n),
			Variable { name, line } => self
				.environment
				.get(name)
				.ok_or_else(|| InterpreterError::UndefinedVariable { name: name.clone(), line: *line })?,
			Unary { operator: UnaryOperator::Negate, right, line } => {
				self.evaluate(right)?.negate().map_err(|e| arithmetic_error(e, *line))?
			}
			Binary { left, operator, right, line } => {
				let left_value = self.evaluate(left)?;
				let right_value = self.evaluate(right)?;
				left_value.binary_op(*operator, &right_value).map_err(|e| arithmetic_error(e, *line))?
			}
		})
	}
}

fn arithmetic_error(error: ArithmeticError, line: usize) -> InterpreterError {
	match error {
		ArithmeticError::Overflow => InterpreterError::Overflow { line },
		ArithmeticError::DivisionByZero => InterpreterError::DivisionByZero { line },
	}
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
/// Errors that can occur during evaluation
pub enum InterpreterError {
	/// A read of a name that has no binding.
	#[error("line {line}: Variable '{name}' is not defined")]
	UndefinedVariable { name: String, line: usize },
	/// The right operand of `/` evaluated to zero.
	#[error("line {line}: Division by zero")]
	DivisionByZero { line: usize },
	/// Arithmetic left the representable range: 64-bit ints, finite floats.
	#[error("line {line}: Numeric overflow")]
	Overflow { line: usize },
	/// A binding of an unknown name while declarations are disabled.
	#[error("line {line}: Variable '{name}' is not declared")]
	UndeclaredAssignment { name: String, line: usize },
}

impl InterpreterError {
	/// Whether execution may continue with the next statement.
	pub fn is_recoverable(&self) -> bool { matches!(self, InterpreterError::UndeclaredAssignment { .. }) }

	pub fn line(&self) -> usize {
		match self {
			InterpreterError::UndefinedVariable { line, .. }
			| InterpreterError::DivisionByZero { line }
			| InterpreterError::Overflow { line }
			| InterpreterError::UndeclaredAssignment { line, .. } => *line,
		}
	}
}

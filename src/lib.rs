//! # ifcalc
//!
//! An interpreter for a tiny imperative language: integer and decimal
//! arithmetic, variable bindings, and `if`/`else` guarded by one comparison.
//!
//! ``` text
//! x = 12;
//! if (x < 10) { y = 5; } else { y = [x - 2] * 2.5; }
//! Evaluar y / 4;
//! ```
//!
//! ## Scanning
//!
//! Takes in the characters and converts them into tokens. Whitespace is
//! dropped, newlines only move the line counter. A character that starts no
//! token is reported and skipped.
//!
//! ## Parsing
//!
//! Builds the syntax tree from the tokens, or stops at the first syntax error.
//! The parser never computes anything, it only builds nodes.
//!
//! ``` markdown
//! z (Statement::Assignment)
//! └── + (Expression::Binary)
//!     ├── x (Expression::Variable)
//!     └── * (Expression::Binary)
//!         ├── y (Expression::Variable)
//!         └── 2 (Expression::Literal)
//! ```
//!
//! ## Evaluation
//!
//! A tree-walk over the program, reading and writing one [`Environment`].
//! Bindings and `Evaluar` statements leave [`Trace`]s behind, problems leave
//! [`Diagnostic`]s.

pub mod cli;
mod config;
mod environment;
mod error;
mod interpreter;
mod parser;
mod scanner;
mod session;
mod statement;

pub use config::{AssignmentPolicy, Config, parse_define};
pub use environment::Environment;
pub use error::{CalcError, Diagnostic, interpreter::InterpreterError, parser::{ParseError, ParseErrorType}, scanner::{ScanError, ScanErrorType}};
pub use interpreter::{Interpreter, Trace, value::{ArithmeticError, Kind, Number}};
pub use parser::{Parser, expression::{BinaryOperator, CompareOperator, Condition, Expression, LiteralValue, UnaryOperator}};
pub use scanner::{Scanned, Scanner, Token, TokenType};
pub use session::Session;
pub use statement::{Program, Statement};

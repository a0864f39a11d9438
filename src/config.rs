//! Run configuration.

use anyhow::{Context, bail};

use crate::{interpreter::value::Number, scanner::TokenType};

/// What a binding of a name with no entry in the environment does.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AssignmentPolicy {
	/// The first binding declares the name.
	#[default]
	Declare,
	/// Only pre-seeded names may be bound, anything else is an
	/// `UndeclaredAssignment`.
	RequireDeclared,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
	pub assignment: AssignmentPolicy,
	/// Bindings placed in the environment before the first run.
	pub defines:    Vec<(String, Number)>,
}

impl Config {
	pub fn strict(mut self, strict: bool) -> Self {
		self.assignment = if strict { AssignmentPolicy::RequireDeclared } else { AssignmentPolicy::Declare };
		self
	}

	/// Adds a pre-seeded binding written as `NAME=VALUE`.
	pub fn define(mut self, definition: &str) -> anyhow::Result<Self> {
		self.defines.push(parse_define(definition)?);
		Ok(self)
	}
}

/// Parses `NAME=VALUE`, where `VALUE` is an integer or decimal literal with an
/// optional leading `-`.
pub fn parse_define(definition: &str) -> anyhow::Result<(String, Number)> {
	let (name, value) = definition.split_once('=').context("Expected NAME=VALUE")?;
	let name = name.trim();
	let value = value.trim();
	let valid_start = name.chars().next().is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
	if !valid_start || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
		bail!("'{name}' is not a valid variable name");
	}
	if !matches!(TokenType::keyword_or_identifier(name), TokenType::Identifier(_)) {
		bail!("'{name}' is a reserved word");
	}
	let number = if let Ok(n) = value.parse::<i64>() {
		Number::Int(n)
	} else {
		let n: f64 = value.parse().with_context(|| format!("'{value}' is not a number"))?;
		if !n.is_finite() {
			bail!("'{value}' is not a finite number");
		}
		Number::Float(n)
	};
	Ok((name.to_string(), number))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parse_defines() {
		assert_eq!(parse_define("x=10").unwrap(), ("x".to_string(), Number::Int(10)));
		assert_eq!(parse_define(" rate = -2.5 ").unwrap(), ("rate".to_string(), Number::Float(-2.5)));
		assert!(parse_define("x").is_err());
		assert!(parse_define("1x=3").is_err());
		assert!(parse_define("if=3").is_err());
		assert!(parse_define("x=abc").is_err());
		assert!(parse_define("x=inf").is_err());
	}

	#[test]
	fn builder() {
		let config = Config::default().strict(true).define("y=1").unwrap();
		assert_eq!(config.assignment, AssignmentPolicy::RequireDeclared);
		assert_eq!(config.defines, vec![("y".to_string(), Number::Int(1))]);
	}
}

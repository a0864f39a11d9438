use std::collections::HashMap;

use crate::interpreter::value::Number;

/// The variable store of one run. Entries are created by the first binding of
/// a name, overwritten by every later one, and never removed during a run.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct Environment {
	variables: HashMap<String, Number>,
}

impl Environment {
	pub fn new() -> Self { Self { variables: HashMap::new() } }

	/// Binds or rebinds a name. Returns the previous value, if any.
	pub fn define(&mut self, name: &str, value: Number) -> Option<Number> {
		self.variables.insert(name.to_string(), value)
	}

	/// Rebinds an existing name. Returns `None`, leaving the store untouched,
	/// when the name was never defined.
	pub fn assign(&mut self, name: &str, value: Number) -> Option<Number> {
		let slot = self.variables.get_mut(name)?;
		Some(std::mem::replace(slot, value))
	}

	pub fn get(&self, name: &str) -> Option<Number> { self.variables.get(name).copied() }

	pub fn contains(&self, name: &str) -> bool { self.variables.contains_key(name) }

	pub fn len(&self) -> usize { self.variables.len() }

	pub fn is_empty(&self) -> bool { self.variables.is_empty() }

	pub fn clear(&mut self) { self.variables.clear() }

	/// All bindings, sorted by name.
	pub fn snapshot(&self) -> Vec<(String, Number)> {
		let mut entries: Vec<(String, Number)> = self.variables.iter().map(|(k, v)| (k.clone(), *v)).collect();
		entries.sort_by(|a, b| a.0.cmp(&b.0));
		entries
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn rebinding_overwrites() {
		let mut environment = Environment::new();
		assert_eq!(environment.define("x", Number::Int(10)), None);
		assert_eq!(environment.define("x", Number::Float(2.5)), Some(Number::Int(10)));
		assert_eq!(environment.get("x"), Some(Number::Float(2.5)));
		assert_eq!(environment.len(), 1);
	}

	#[test]
	fn assign_requires_existing_name() {
		let mut environment = Environment::new();
		assert_eq!(environment.assign("x", Number::Int(1)), None);
		assert!(!environment.contains("x"));
		environment.define("x", Number::Int(1));
		assert_eq!(environment.assign("x", Number::Int(2)), Some(Number::Int(1)));
		assert_eq!(environment.get("x"), Some(Number::Int(2)));
	}

	#[test]
	fn snapshot_is_sorted() {
		let mut environment = Environment::new();
		environment.define("b", Number::Int(2));
		environment.define("a", Number::Int(1));
		environment.define("c", Number::Float(0.5));
		let names: Vec<String> = environment.snapshot().into_iter().map(|(name, _)| name).collect();
		assert_eq!(names, vec!["a", "b", "c"]);
		environment.clear();
		assert!(environment.is_empty());
	}
}

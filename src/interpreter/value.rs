use std::{cmp::Ordering, fmt::Display};

use Number::*;

use crate::parser::expression::{BinaryOperator, CompareOperator};

/// A runtime value. The variant is the value's kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
	Int(i64),
	Float(f64),
}

/// The numeric classification carried alongside a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
	Int,
	Float,
}

/// Why an arithmetic operation produced no value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticError {
	/// The result left the representable range: an int outside 64 bits, or a
	/// float that is infinite or NaN.
	Overflow,
	DivisionByZero,
}

impl Display for Kind {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Kind::Int => write!(f, "int"),
			Kind::Float => write!(f, "float"),
		}
	}
}

impl Display for Number {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Int(n) => write!(f, "{n}"),
			Float(n) => write!(f, "{n:?}"),
		}
	}
}

type Arithmetic = Result<Number, ArithmeticError>;

/// Floats that are not finite never become values.
fn finite(n: f64) -> Arithmetic { if n.is_finite() { Ok(Float(n)) } else { Err(ArithmeticError::Overflow) } }

impl Number {
	pub fn kind(&self) -> Kind {
		match self {
			Int(_) => Kind::Int,
			Float(_) => Kind::Float,
		}
	}

	pub fn as_f64(&self) -> f64 {
		match *self {
			Int(n) => n as f64,
			Float(n) => n,
		}
	}

	pub fn is_zero(&self) -> bool {
		match *self {
			Int(n) => n == 0,
			Float(n) => n == 0.0,
		}
	}

	/// Performs an arithmetic operation.
	pub fn binary_op(&self, op: BinaryOperator, right: &Self) -> Arithmetic {
		match op {
			BinaryOperator::Add => self.plus(right),
			BinaryOperator::Subtract => self.minus(right),
			BinaryOperator::Multiply => self.star(right),
			BinaryOperator::Divide => self.slash(right),
		}
	}

	/// Tries to add two values together.
	pub fn plus(&self, other: &Self) -> Arithmetic {
		match (self, other) {
			(Int(l), Int(r)) => l.checked_add(*r).map(Int).ok_or(ArithmeticError::Overflow),
			(l, r) => finite(l.as_f64() + r.as_f64()),
		}
	}

	/// Tries to subtract two values.
	pub fn minus(&self, other: &Self) -> Arithmetic {
		match (self, other) {
			(Int(l), Int(r)) => l.checked_sub(*r).map(Int).ok_or(ArithmeticError::Overflow),
			(l, r) => finite(l.as_f64() - r.as_f64()),
		}
	}

	/// Tries to multiply two values together.
	pub fn star(&self, other: &Self) -> Arithmetic {
		match (self, other) {
			(Int(l), Int(r)) => l.checked_mul(*r).map(Int).ok_or(ArithmeticError::Overflow),
			(l, r) => finite(l.as_f64() * r.as_f64()),
		}
	}

	/// Divides two values. The quotient is always a float, even for `4 / 2`.
	pub fn slash(&self, other: &Self) -> Arithmetic {
		if other.is_zero() {
			return Err(ArithmeticError::DivisionByZero);
		}
		finite(self.as_f64() / other.as_f64())
	}

	pub fn negate(&self) -> Arithmetic {
		match self {
			Int(n) => n.checked_neg().map(Int).ok_or(ArithmeticError::Overflow),
			Float(n) => Ok(Float(-n)),
		}
	}

	/// Compares two values exactly, without rounding an int to a float first.
	pub fn compare(&self, op: CompareOperator, other: &Self) -> bool {
		let ordering = match (self, other) {
			(Int(l), Int(r)) => Some(l.cmp(r)),
			(Float(l), Float(r)) => l.partial_cmp(r),
			(Int(l), Float(r)) => compare_int_float(*l, *r),
			(Float(l), Int(r)) => compare_int_float(*r, *l).map(Ordering::reverse),
		};
		let Some(ordering) = ordering else { return false };
		match op {
			CompareOperator::Less => ordering.is_lt(),
			CompareOperator::Greater => ordering.is_gt(),
			CompareOperator::LessEqual => ordering.is_le(),
			CompareOperator::GreaterEqual => ordering.is_ge(),
			CompareOperator::Equal => ordering.is_eq(),
		}
	}
}

/// Orders an int against a float. Within the `i64` range the float's integral
/// part is compared as an int, its fraction breaks ties.
fn compare_int_float(int: i64, float: f64) -> Option<Ordering> {
	// 2^63, the first float above every i64.
	const LIMIT: f64 = 9_223_372_036_854_775_808.0;
	if float.is_nan() {
		return None;
	}
	if float >= LIMIT {
		return Some(Ordering::Less);
	}
	if float < -LIMIT {
		return Some(Ordering::Greater);
	}
	let whole = float.trunc();
	Some(int.cmp(&(whole as i64)).then_with(|| 0.0_f64.partial_cmp(&(float - whole)).unwrap_or(Ordering::Equal)))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn kinds_follow_operands() {
		assert_eq!(Int(2).plus(&Int(3)), Ok(Int(5)));
		assert_eq!(Int(2).plus(&Float(0.5)), Ok(Float(2.5)));
		assert_eq!(Float(1.5).star(&Int(2)), Ok(Float(3.0)));
		assert_eq!(Int(7).minus(&Int(10)), Ok(Int(-3)));
	}

	#[test]
	fn division_is_real() {
		assert_eq!(Int(7).slash(&Int(2)), Ok(Float(3.5)));
		assert_eq!(Int(4).slash(&Int(2)), Ok(Float(2.0)));
		assert_eq!(Int(5).slash(&Int(0)), Err(ArithmeticError::DivisionByZero));
		assert_eq!(Float(5.0).slash(&Float(0.0)), Err(ArithmeticError::DivisionByZero));
		assert_eq!(Int(5).slash(&Float(-0.0)), Err(ArithmeticError::DivisionByZero));
		assert_eq!(
			Int(5).binary_op(BinaryOperator::Divide, &Int(0)),
			Err(ArithmeticError::DivisionByZero)
		);
	}

	#[test]
	fn overflow_is_detected() {
		assert_eq!(Int(i64::MAX).plus(&Int(1)), Err(ArithmeticError::Overflow));
		assert_eq!(Int(i64::MIN).minus(&Int(1)), Err(ArithmeticError::Overflow));
		assert_eq!(Int(i64::MAX).star(&Int(2)), Err(ArithmeticError::Overflow));
		assert_eq!(Int(i64::MIN).negate(), Err(ArithmeticError::Overflow));
		assert_eq!(Float(2.5).negate(), Ok(Float(-2.5)));
	}

	#[test]
	fn floats_stay_finite() {
		assert_eq!(Int(1).slash(&Float(1e-320)), Err(ArithmeticError::Overflow));
		assert_eq!(Float(1e300).star(&Float(1e300)), Err(ArithmeticError::Overflow));
		assert_eq!(Float(f64::MAX).plus(&Float(f64::MAX)), Err(ArithmeticError::Overflow));
		assert_eq!(Float(-f64::MAX).minus(&Float(f64::MAX)), Err(ArithmeticError::Overflow));
		assert_eq!(Float(1.5).star(&Float(2.0)), Ok(Float(3.0)));
	}

	#[test]
	fn comparisons() {
		assert!(Int(3).compare(CompareOperator::Less, &Int(4)));
		assert!(Int(4).compare(CompareOperator::LessEqual, &Int(4)));
		assert!(Int(2).compare(CompareOperator::Equal, &Float(2.0)));
		assert!(!Float(2.5).compare(CompareOperator::GreaterEqual, &Int(3)));
		assert!(Int(9).compare(CompareOperator::Greater, &Float(8.5)));
		assert!(Float(-2.5).compare(CompareOperator::Greater, &Int(-3)));
		assert!(Int(-3).compare(CompareOperator::Less, &Float(-2.5)));
	}

	#[test]
	fn comparisons_are_exact_past_f64_precision() {
		let big = Int(9_007_199_254_740_993);
		let float = Float(9_007_199_254_740_992.0);
		assert!(big.compare(CompareOperator::Greater, &float));
		assert!(!big.compare(CompareOperator::Equal, &float));
		assert!(float.compare(CompareOperator::Less, &big));
		assert!(Int(i64::MAX).compare(CompareOperator::Less, &Float(9.3e18)));
		assert!(Int(i64::MIN).compare(CompareOperator::Equal, &Float(-9_223_372_036_854_775_808.0)));
		assert!(Int(i64::MIN).compare(CompareOperator::Greater, &Float(-1e19)));
	}

	#[test]
	fn display_keeps_kind() {
		assert_eq!(Int(10).to_string(), "10");
		assert_eq!(Float(2.0).to_string(), "2.0");
		assert_eq!(Float(3.5).to_string(), "3.5");
		assert_eq!(Int(1).kind().to_string(), "int");
		assert_eq!(Float(1.0).kind().to_string(), "float");
	}
}

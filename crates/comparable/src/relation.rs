//! The six comparison relations and their less-than derivations.

use std::fmt;

/// One of the six relational operations a comparable attribute drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
	/// `<`, the foundation every other relation falls back to.
	LessThan,
	/// `>`
	GreaterThan,
	/// `==`
	Equals,
	/// `>=`
	GreaterOrEqual,
	/// `<=`
	LessOrEqual,
	/// `!=`
	NotEqual,
}

impl Relation {
	/// Every relation, in operator-table order.
	pub const ALL: [Relation; 6] = [
		Relation::LessThan,
		Relation::GreaterThan,
		Relation::Equals,
		Relation::GreaterOrEqual,
		Relation::LessOrEqual,
		Relation::NotEqual,
	];

	/// The relations an attribute type may override.
	pub const DERIVABLE: [Relation; 5] = [
		Relation::GreaterThan,
		Relation::Equals,
		Relation::GreaterOrEqual,
		Relation::LessOrEqual,
		Relation::NotEqual,
	];

	/// Snake-case name used in logs and error messages.
	pub const fn as_str(self) -> &'static str {
		match self {
			Relation::LessThan => "less_than",
			Relation::GreaterThan => "greater_than",
			Relation::Equals => "equals",
			Relation::GreaterOrEqual => "greater_or_equal",
			Relation::LessOrEqual => "less_or_equal",
			Relation::NotEqual => "not_equal",
		}
	}

	/// The operator symbol for this relation.
	pub const fn symbol(self) -> &'static str {
		match self {
			Relation::LessThan => "<",
			Relation::GreaterThan => ">",
			Relation::Equals => "==",
			Relation::GreaterOrEqual => ">=",
			Relation::LessOrEqual => "<=",
			Relation::NotEqual => "!=",
		}
	}

	/// Returns true for the relations that may carry a custom override.
	pub const fn is_derivable(self) -> bool {
		!matches!(self, Relation::LessThan)
	}

	/// Computes this relation from the two directed less-than tests.
	///
	/// `own_lt_other` evaluates `own < other` and `other_lt_own` evaluates
	/// `other < own`. Each is called at most once and only when the relation
	/// needs it.
	pub fn derive(
		self,
		own_lt_other: impl FnOnce() -> bool,
		other_lt_own: impl FnOnce() -> bool,
	) -> bool {
		match self {
			Relation::LessThan => own_lt_other(),
			Relation::GreaterThan => other_lt_own(),
			Relation::Equals => !(own_lt_other() || other_lt_own()),
			Relation::GreaterOrEqual => !own_lt_other(),
			Relation::LessOrEqual => !other_lt_own(),
			Relation::NotEqual => own_lt_other() || other_lt_own(),
		}
	}
}

impl fmt::Display for Relation {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

#[cfg(test)]
mod tests {
	use rstest::rstest;

	use super::Relation;

	#[rstest]
	#[case::less(true, false, [true, false, false, false, true, true])]
	#[case::greater(false, true, [false, true, false, true, false, true])]
	#[case::equivalent(false, false, [false, false, true, true, true, false])]
	fn derive_table(#[case] own_lt: bool, #[case] other_lt: bool, #[case] expected: [bool; 6]) {
		let derived = Relation::ALL.map(|r| r.derive(|| own_lt, || other_lt));
		assert_eq!(derived, expected);
	}

	#[test]
	fn derivable_excludes_less_than() {
		assert!(!Relation::LessThan.is_derivable());
		assert!(Relation::DERIVABLE.iter().all(|r| r.is_derivable()));
		assert_eq!(Relation::DERIVABLE.len() + 1, Relation::ALL.len());
	}

	#[test]
	fn derive_skips_unneeded_tests() {
		let mut calls = 0;
		assert!(!Relation::GreaterThan.derive(|| panic!("own < other not needed"), || {
			calls += 1;
			false
		}));
		assert_eq!(calls, 1);
		assert!(Relation::NotEqual.derive(|| true, || panic!("short-circuits")));
	}

	#[test]
	fn names_and_symbols() {
		assert_eq!(Relation::GreaterOrEqual.to_string(), "greater_or_equal");
		assert_eq!(Relation::NotEqual.symbol(), "!=");
	}
}

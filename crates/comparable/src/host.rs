//! Wiring a host type's native comparison operators to its comparator.

use std::cmp::Ordering;

use crate::by::ComparableBy;
use crate::error::Result;
use crate::relation::Relation;
use crate::value::ComparableValue;

/// A type whose comparisons are all driven by one attribute.
///
/// The `cmp_*` methods surface lookup failures. The native operators
/// generated by [`comparison_operators!`](crate::comparison_operators)
/// delegate to them.
pub trait ComparableHost: 'static {
	/// Type of the comparison basis.
	type Key: ?Sized + ComparableValue + 'static;

	/// The comparator shared by every instance.
	fn comparable() -> &'static ComparableBy<Self, Self::Key>;

	/// `self < other`
	fn cmp_less_than(&self, other: &Self) -> Result<bool> {
		Self::comparable().less_than(self, other)
	}

	/// `self > other`
	fn cmp_greater_than(&self, other: &Self) -> Result<bool> {
		Self::comparable().greater_than(self, other)
	}

	/// `self == other`
	fn cmp_equals(&self, other: &Self) -> Result<bool> {
		Self::comparable().equals(self, other)
	}

	/// `self >= other`
	fn cmp_greater_or_equal(&self, other: &Self) -> Result<bool> {
		Self::comparable().greater_or_equal(self, other)
	}

	/// `self <= other`
	fn cmp_less_or_equal(&self, other: &Self) -> Result<bool> {
		Self::comparable().less_or_equal(self, other)
	}

	/// `self != other`
	fn cmp_not_equal(&self, other: &Self) -> Result<bool> {
		Self::comparable().not_equal(self, other)
	}

	/// Three-way comparison; `None` when the attributes are incomparable.
	fn cmp_three_way(&self, other: &Self) -> Result<Option<Ordering>> {
		Self::comparable().compare(self, other)
	}
}

/// Maps a fallible relation onto a native operator result.
///
/// A failed lookup leaves the operands unordered: only `!=` holds.
#[doc(hidden)]
pub fn operator_result(relation: Relation, result: Result<bool>) -> bool {
	result.unwrap_or_else(|err| {
		tracing::warn!(
			relation = relation.as_str(),
			error = %err,
			"comparable.operator_unordered"
		);
		relation == Relation::NotEqual
	})
}

/// Maps a fallible three-way comparison onto [`PartialOrd::partial_cmp`].
#[doc(hidden)]
pub fn operator_ordering(result: Result<Option<Ordering>>) -> Option<Ordering> {
	result.unwrap_or_else(|err| {
		tracing::warn!(error = %err, "comparable.operator_unordered");
		None
	})
}

/// Implements [`PartialEq`] and [`PartialOrd`] for a [`ComparableHost`].
///
/// Every operator delegates to the comparator's matching relation, so
/// attribute types that override a relation keep that override behind the
/// native operator too.
///
/// ```ignore
/// struct Crate {
///     weight: u32,
/// }
///
/// static BY_WEIGHT: ComparableBy<Crate, u32> = ComparableBy::field("weight", |c| &c.weight);
///
/// impl ComparableHost for Crate {
///     type Key = u32;
///
///     fn comparable() -> &'static ComparableBy<Self, u32> {
///         &BY_WEIGHT
///     }
/// }
///
/// comparison_operators!(Crate);
/// ```
#[macro_export]
macro_rules! comparison_operators {
	($($host:ty),+ $(,)?) => {
		$(
			impl ::core::cmp::PartialEq for $host {
				fn eq(&self, other: &Self) -> bool {
					$crate::host::operator_result(
						$crate::Relation::Equals,
						$crate::ComparableHost::cmp_equals(self, other),
					)
				}

				#[allow(clippy::partialeq_ne_impl)]
				fn ne(&self, other: &Self) -> bool {
					$crate::host::operator_result(
						$crate::Relation::NotEqual,
						$crate::ComparableHost::cmp_not_equal(self, other),
					)
				}
			}

			impl ::core::cmp::PartialOrd for $host {
				fn partial_cmp(&self, other: &Self) -> ::core::option::Option<::core::cmp::Ordering> {
					$crate::host::operator_ordering($crate::ComparableHost::cmp_three_way(self, other))
				}

				fn lt(&self, other: &Self) -> bool {
					$crate::host::operator_result(
						$crate::Relation::LessThan,
						$crate::ComparableHost::cmp_less_than(self, other),
					)
				}

				fn gt(&self, other: &Self) -> bool {
					$crate::host::operator_result(
						$crate::Relation::GreaterThan,
						$crate::ComparableHost::cmp_greater_than(self, other),
					)
				}

				fn le(&self, other: &Self) -> bool {
					$crate::host::operator_result(
						$crate::Relation::LessOrEqual,
						$crate::ComparableHost::cmp_less_or_equal(self, other),
					)
				}

				fn ge(&self, other: &Self) -> bool {
					$crate::host::operator_result(
						$crate::Relation::GreaterOrEqual,
						$crate::ComparableHost::cmp_greater_or_equal(self, other),
					)
				}
			}
		)+
	};
}

#[cfg(test)]
mod tests {
	use super::{operator_ordering, operator_result};
	use crate::error::{CompareError, Operand};
	use crate::relation::Relation;

	fn missing() -> CompareError {
		CompareError::AttributeNotFound {
			attribute: "weight".into(),
			operand: Operand::Other,
		}
	}

	#[test]
	fn failed_lookup_is_unordered() {
		for relation in Relation::ALL {
			let expected = relation == Relation::NotEqual;
			assert_eq!(operator_result(relation, Err(missing())), expected);
		}
		assert_eq!(operator_ordering(Err(missing())), None);
	}

	#[test]
	fn successful_lookup_passes_through() {
		assert!(operator_result(Relation::Equals, Ok(true)));
		assert!(!operator_result(Relation::NotEqual, Ok(false)));
	}
}

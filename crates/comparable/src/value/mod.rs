//! The capability an attribute type must provide to drive comparisons.
//!
//! Only [`ComparableValue::less_than`] is required. A type may additionally
//! pin any of the five derivable relations to its own implementation through
//! [`ComparableValue::OVERRIDES`]; every relation left as
//! [`Override::Derived`] is computed from `less_than` instead.

use std::fmt;

use crate::relation::Relation;

/// A binary predicate supplied by an attribute type for one relation.
pub type RelationFn<T> = fn(&T, &T) -> bool;

/// How a single relation is evaluated for an attribute type.
pub enum Override<T: ?Sized> {
	/// Fall back to the `less_than` derivation.
	Derived,
	/// Use the type's own implementation.
	Custom(RelationFn<T>),
}

impl<T: ?Sized> Override<T> {
	/// Returns true if this relation uses the type's own implementation.
	pub const fn is_custom(&self) -> bool {
		matches!(self, Override::Custom(_))
	}
}

impl<T: ?Sized> Clone for Override<T> {
	fn clone(&self) -> Self {
		*self
	}
}

impl<T: ?Sized> Copy for Override<T> {}

impl<T: ?Sized> fmt::Debug for Override<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Override::Derived => f.write_str("Derived"),
			Override::Custom(_) => f.write_str("Custom"),
		}
	}
}

/// Per-relation override table for an attribute type.
///
/// Each entry is independent: overriding `equals` does not change how
/// `not_equal` is computed.
pub struct Overrides<T: ?Sized> {
	greater_than: Override<T>,
	equals: Override<T>,
	greater_or_equal: Override<T>,
	less_or_equal: Override<T>,
	not_equal: Override<T>,
}

impl<T: ?Sized> Overrides<T> {
	/// Every relation derived from `less_than`.
	pub const DERIVED: Self = Self {
		greater_than: Override::Derived,
		equals: Override::Derived,
		greater_or_equal: Override::Derived,
		less_or_equal: Override::Derived,
		not_equal: Override::Derived,
	};

	/// Binds `relation` to `f`.
	///
	/// [`Relation::LessThan`] is not overridable and is left untouched.
	pub const fn with(mut self, relation: Relation, f: RelationFn<T>) -> Self {
		let slot = Override::Custom(f);
		match relation {
			Relation::LessThan => {}
			Relation::GreaterThan => self.greater_than = slot,
			Relation::Equals => self.equals = slot,
			Relation::GreaterOrEqual => self.greater_or_equal = slot,
			Relation::LessOrEqual => self.less_or_equal = slot,
			Relation::NotEqual => self.not_equal = slot,
		}
		self
	}

	/// Returns how `relation` is evaluated. Always `Derived` for `LessThan`.
	pub const fn get(&self, relation: Relation) -> Override<T> {
		match relation {
			Relation::LessThan => Override::Derived,
			Relation::GreaterThan => self.greater_than,
			Relation::Equals => self.equals,
			Relation::GreaterOrEqual => self.greater_or_equal,
			Relation::LessOrEqual => self.less_or_equal,
			Relation::NotEqual => self.not_equal,
		}
	}

	/// Returns true if no relation is overridden.
	pub fn is_derived(&self) -> bool {
		Relation::DERIVABLE.iter().all(|&r| !self.get(r).is_custom())
	}
}

impl<T: ?Sized + PartialOrd> Overrides<T> {
	/// Every relation bound to the type's [`PartialEq`]/[`PartialOrd`] operator.
	pub const STANDARD: Self = Self {
		greater_than: Override::Custom(<T as PartialOrd>::gt),
		equals: Override::Custom(<T as PartialEq>::eq),
		greater_or_equal: Override::Custom(<T as PartialOrd>::ge),
		less_or_equal: Override::Custom(<T as PartialOrd>::le),
		not_equal: Override::Custom(<T as PartialEq>::ne),
	};
}

impl<T: ?Sized> Clone for Overrides<T> {
	fn clone(&self) -> Self {
		*self
	}
}

impl<T: ?Sized> Copy for Overrides<T> {}

impl<T: ?Sized> fmt::Debug for Overrides<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Overrides")
			.field("greater_than", &self.greater_than)
			.field("equals", &self.equals)
			.field("greater_or_equal", &self.greater_or_equal)
			.field("less_or_equal", &self.less_or_equal)
			.field("not_equal", &self.not_equal)
			.finish()
	}
}

/// A value that can serve as a comparison basis.
///
/// `less_than` must be a strict weak ordering: irreflexive, asymmetric,
/// transitive, with transitive incomparability. Derived `equals`,
/// `greater_or_equal` and `less_or_equal` are only consistent under that
/// precondition. A partial `less_than` should override those relations.
///
/// The `f32` and `f64` impls are exempt: NaN breaks irreflexive
/// incomparability, so they bind every derivable relation to the IEEE
/// operators through [`Overrides::STANDARD`]. A NaN attribute is therefore
/// unequal to itself and [`compare`](crate::ComparableBy::compare) reports it
/// as incomparable.
pub trait ComparableValue {
	/// Returns true if `self` orders strictly before `other`.
	fn less_than(&self, other: &Self) -> bool;

	/// Relations this type implements itself.
	const OVERRIDES: Overrides<Self> = Overrides::DERIVED;
}

macro_rules! standard_comparable {
	($($ty:ty),* $(,)?) => {
		$(
			impl ComparableValue for $ty {
				#[inline]
				fn less_than(&self, other: &Self) -> bool {
					self < other
				}

				const OVERRIDES: Overrides<Self> = Overrides::STANDARD;
			}
		)*
	};
}

standard_comparable!(
	u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64, bool, char, str,
	String, (),
);

#[cfg(test)]
mod tests;

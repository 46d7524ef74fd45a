//! Comparison delegation to one designated attribute of a host type.
//!
//! [`ComparableBy`] reads the comparison basis off both operands and then
//! either calls the attribute type's own implementation of the requested
//! relation or derives the result from `less_than`.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;

use crate::error::{CompareError, Operand, Result};
use crate::relation::Relation;
use crate::value::{ComparableValue, Override};

/// Lookup of attributes by name, for hosts that expose a dynamic set of
/// comparable values.
pub trait Attributes<V: ?Sized> {
	/// Returns the attribute called `name`, if this instance carries it.
	fn attribute(&self, name: &str) -> Option<&V>;
}

/// Reads the comparison basis off a host.
pub enum Accessor<H: ?Sized, V: ?Sized> {
	/// A field every host instance has.
	Field(for<'h> fn(&'h H) -> &'h V),
	/// A field that may be absent on some instances.
	Optional(for<'h> fn(&'h H) -> Option<&'h V>),
	/// A by-name lookup through [`Attributes`].
	Named(for<'h, 'n> fn(&'h H, &'n str) -> Option<&'h V>),
}

impl<H: ?Sized, V: ?Sized> Accessor<H, V> {
	/// Short label for the accessor kind.
	pub const fn kind(&self) -> &'static str {
		match self {
			Accessor::Field(_) => "field",
			Accessor::Optional(_) => "optional",
			Accessor::Named(_) => "named",
		}
	}
}

impl<H: ?Sized, V: ?Sized> Clone for Accessor<H, V> {
	fn clone(&self) -> Self {
		*self
	}
}

impl<H: ?Sized, V: ?Sized> Copy for Accessor<H, V> {}

impl<H: ?Sized, V: ?Sized> fmt::Debug for Accessor<H, V> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.kind())
	}
}

/// Derives all six comparisons of a host `H` from one attribute of type `V`.
///
/// The attribute name and accessor are fixed at construction. Nothing is
/// validated up front: a missing attribute is reported as
/// [`CompareError::AttributeNotFound`] by the first comparison that needs it.
///
/// The comparator never writes to either operand and holds no mutable
/// state, so a single instance can be shared freely across threads.
pub struct ComparableBy<H: ?Sized, V: ?Sized> {
	attribute: Cow<'static, str>,
	accessor: Accessor<H, V>,
}

impl<H: ?Sized, V: ?Sized + ComparableValue> ComparableBy<H, V> {
	/// Compares by a field every host has.
	pub const fn field(attribute: &'static str, get: for<'h> fn(&'h H) -> &'h V) -> Self {
		Self {
			attribute: Cow::Borrowed(attribute),
			accessor: Accessor::Field(get),
		}
	}

	/// Compares by a field that may be absent at comparison time.
	pub const fn optional(
		attribute: &'static str,
		get: for<'h> fn(&'h H) -> Option<&'h V>,
	) -> Self {
		Self {
			attribute: Cow::Borrowed(attribute),
			accessor: Accessor::Optional(get),
		}
	}

	/// Compares by the attribute `H` reports under `attribute`.
	pub fn named(attribute: impl Into<Cow<'static, str>>) -> Self
	where
		H: Attributes<V>,
	{
		Self {
			attribute: attribute.into(),
			accessor: Accessor::Named(<H as Attributes<V>>::attribute),
		}
	}

	/// Name of the comparison basis.
	pub fn attribute(&self) -> &str {
		&self.attribute
	}

	/// How the comparison basis is read.
	pub fn accessor(&self) -> Accessor<H, V> {
		self.accessor
	}

	/// Reads the comparison basis off `host`.
	pub fn value_of<'h>(&self, host: &'h H) -> Result<&'h V> {
		self.lookup(host, Operand::Own)
	}

	fn lookup<'h>(&self, host: &'h H, operand: Operand) -> Result<&'h V> {
		let found = match self.accessor {
			Accessor::Field(get) => Some(get(host)),
			Accessor::Optional(get) => get(host),
			Accessor::Named(get) => get(host, &self.attribute),
		};
		found.ok_or_else(|| {
			tracing::debug!(
				attribute = %self.attribute,
				operand = operand.as_str(),
				"comparable.attribute_not_found"
			);
			CompareError::AttributeNotFound {
				attribute: self.attribute.clone(),
				operand,
			}
		})
	}

	fn operands<'a, 'b>(&self, own: &'a H, other: &'b H) -> Result<(&'a V, &'b V)> {
		Ok((
			self.lookup(own, Operand::Own)?,
			self.lookup(other, Operand::Other)?,
		))
	}

	/// Evaluates `relation` on two attribute values.
	///
	/// A custom implementation on `V` wins. Otherwise the result is derived
	/// from `less_than`, calling it only as often as the relation needs.
	fn resolve(&self, own: &V, other: &V, relation: Relation) -> bool {
		match V::OVERRIDES.get(relation) {
			Override::Custom(f) => {
				tracing::trace!(
					attribute = %self.attribute,
					relation = relation.as_str(),
					path = "custom",
					"comparable.resolve"
				);
				f(own, other)
			}
			Override::Derived => {
				tracing::trace!(
					attribute = %self.attribute,
					relation = relation.as_str(),
					path = "derived",
					"comparable.resolve"
				);
				relation.derive(|| own.less_than(other), || other.less_than(own))
			}
		}
	}

	/// Evaluates any relation between two hosts.
	pub fn evaluate(&self, relation: Relation, own: &H, other: &H) -> Result<bool> {
		let (own, other) = self.operands(own, other)?;
		Ok(match relation {
			Relation::LessThan => own.less_than(other),
			derivable => self.resolve(own, other, derivable),
		})
	}

	/// `own < other`. Always the attribute's own `less_than`.
	pub fn less_than(&self, own: &H, other: &H) -> Result<bool> {
		self.evaluate(Relation::LessThan, own, other)
	}

	/// `own > other`, derived as `other < own`.
	pub fn greater_than(&self, own: &H, other: &H) -> Result<bool> {
		self.evaluate(Relation::GreaterThan, own, other)
	}

	/// `own == other`, derived as neither being less than the other.
	pub fn equals(&self, own: &H, other: &H) -> Result<bool> {
		self.evaluate(Relation::Equals, own, other)
	}

	/// `own >= other`, derived as `!(own < other)`.
	pub fn greater_or_equal(&self, own: &H, other: &H) -> Result<bool> {
		self.evaluate(Relation::GreaterOrEqual, own, other)
	}

	/// `own <= other`, derived as `!(other < own)`.
	pub fn less_or_equal(&self, own: &H, other: &H) -> Result<bool> {
		self.evaluate(Relation::LessOrEqual, own, other)
	}

	/// `own != other`, derived as either being less than the other.
	pub fn not_equal(&self, own: &H, other: &H) -> Result<bool> {
		self.evaluate(Relation::NotEqual, own, other)
	}

	/// Three-way comparison built from `less_than`, `greater_than` and
	/// `equals`, in that order. `None` when all three are false.
	pub fn compare(&self, own: &H, other: &H) -> Result<Option<Ordering>> {
		let (own, other) = self.operands(own, other)?;
		if own.less_than(other) {
			Ok(Some(Ordering::Less))
		} else if self.resolve(own, other, Relation::GreaterThan) {
			Ok(Some(Ordering::Greater))
		} else if self.resolve(own, other, Relation::Equals) {
			Ok(Some(Ordering::Equal))
		} else {
			Ok(None)
		}
	}
}

impl<H: ?Sized, V: ?Sized> Clone for ComparableBy<H, V> {
	fn clone(&self) -> Self {
		Self {
			attribute: self.attribute.clone(),
			accessor: self.accessor,
		}
	}
}

impl<H: ?Sized, V: ?Sized> fmt::Debug for ComparableBy<H, V> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ComparableBy")
			.field("attribute", &self.attribute)
			.field("accessor", &self.accessor)
			.finish()
	}
}

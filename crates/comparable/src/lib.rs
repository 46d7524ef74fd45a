//! Derive a full set of comparisons from one designated attribute.
//!
//! A host type names a single attribute as its comparison basis through a
//! [`ComparableBy`]. All six relations (`<`, `>`, `==`, `>=`, `<=`, `!=`)
//! read that attribute off both operands and then either call the
//! attribute type's own implementation, when [`ComparableValue::OVERRIDES`]
//! supplies one, or derive the answer from [`ComparableValue::less_than`].

/// Attribute lookup and relation resolution.
pub mod by;
/// Comparison error types.
pub mod error;
/// Native operator wiring for host types.
pub mod host;
/// The six relations and their derivations.
pub mod relation;
/// The comparable-value capability and override tables.
pub mod value;

pub use by::{Accessor, Attributes, ComparableBy};
pub use error::{CompareError, Operand, Result};
pub use host::ComparableHost;
pub use relation::Relation;
pub use value::{ComparableValue, Override, Overrides, RelationFn};

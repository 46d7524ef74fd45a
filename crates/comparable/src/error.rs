//! Error types for attribute-based comparison.

use std::borrow::Cow;
use std::fmt;

use thiserror::Error;

/// Which side of a binary comparison an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
	/// The receiver (`self`).
	Own,
	/// The argument (`other`).
	Other,
}

impl Operand {
	/// Lowercase name used in error messages.
	pub const fn as_str(self) -> &'static str {
		match self {
			Operand::Own => "own",
			Operand::Other => "other",
		}
	}
}

impl fmt::Display for Operand {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Errors that can occur while comparing two hosts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompareError {
	/// The comparison basis could not be read from one operand.
	#[error("comparison attribute '{attribute}' not found on {operand} operand")]
	AttributeNotFound {
		/// Name the comparator was constructed with.
		attribute: Cow<'static, str>,
		/// The operand the lookup failed on.
		operand: Operand,
	},
}

/// Result type for comparison operations.
pub type Result<T> = std::result::Result<T, CompareError>;

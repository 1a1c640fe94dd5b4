//! Binding errors.

use thiserror::Error;

/// Errors raised while binding a gate to its slot names.
///
/// Gate operations themselves never fail; these are all detected by
/// [`GateBuilder`](crate::GateBuilder) before a gate exists.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GateError {
	/// The number of slot names differs from the delegate's arity.
	#[error("expected {expected} slot names, found {found}")]
	ArityMismatch {
		/// Delegate parameter count.
		expected: usize,
		/// Slot names supplied.
		found: usize,
	},

	/// A slot name is empty.
	#[error("slot name at index {index} is empty")]
	EmptySlotName {
		/// Parameter index of the empty name.
		index: usize,
	},

	/// A slot name is not an identifier.
	#[error("invalid slot name: {0:?}")]
	InvalidSlotName(String),

	/// Two slots share a name.
	#[error("duplicate slot name: {0}")]
	DuplicateSlotName(String),
}

/// Result type for gate binding.
pub type Result<T> = std::result::Result<T, GateError>;

use crate::SlotValue;

/// One argument holder: the current value and whether it has been supplied.
///
/// An unset slot always holds its type's canonical default.
#[derive(Debug, Clone, PartialEq)]
pub struct Slot<T> {
	value: T,
	is_set: bool,
}

impl<T: SlotValue> Slot<T> {
	pub(crate) fn vacant() -> Self {
		Self {
			value: T::canonical_default(),
			is_set: false,
		}
	}

	/// Returns the current value.
	pub fn value(&self) -> &T {
		&self.value
	}

	/// Returns true if a value was supplied since the last clear.
	pub fn is_set(&self) -> bool {
		self.is_set
	}

	pub(crate) fn fill(&mut self, value: T) {
		self.value = value;
		self.is_set = true;
	}

	/// Marks the slot as set while holding the canonical default.
	pub(crate) fn fill_default(&mut self) {
		self.fill(T::canonical_default());
	}

	pub(crate) fn reset(&mut self) {
		self.value = T::canonical_default();
		self.is_set = false;
	}

	pub(crate) fn into_value(self) -> T {
		self.value
	}
}

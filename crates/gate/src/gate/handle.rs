use std::fmt;

use tracing::debug;

use super::ArgumentGate;
use crate::{Arguments, LockMode, NullPolicy, SlotAt, SlotValue};

/// Accessor for the slot holding parameter `I` of a gate.
///
/// Handles are cheap to create and borrow the gate; obtain one with
/// [`ArgumentGate::slot`].
pub struct SlotHandle<'g, A: Arguments, F, M: LockMode, const I: usize> {
	gate: &'g ArgumentGate<A, F, M>,
}

impl<'g, A, F, M, const I: usize> SlotHandle<'g, A, F, M, I>
where
	A: SlotAt<I>,
	M: LockMode,
{
	pub(super) fn new(gate: &'g ArgumentGate<A, F, M>) -> Self {
		Self { gate }
	}

	/// Returns the slot's name.
	pub fn name(&self) -> &'g str {
		&self.gate.slot_names[I]
	}

	/// Returns the slot's parameter index.
	pub const fn index(&self) -> usize {
		I
	}

	/// Returns a copy of the current value.
	pub fn get(&self) -> A::Value {
		self.gate.with_state(|state| <A as SlotAt<I>>::slot(&state.slots).value().clone())
	}

	/// Returns true if the slot was supplied since the last clear.
	pub fn is_set(&self) -> bool {
		self.gate.with_state(|state| <A as SlotAt<I>>::slot(&state.slots).is_set())
	}

	/// Stores `value` without attempting to fire, returning the stored value.
	///
	/// A null value is stored as the canonical default, which is what gets
	/// returned. While the gate is disabled nothing is stored and `value` is
	/// returned unchanged.
	pub fn assign(&self, value: A::Value) -> A::Value {
		let gate = self.gate;
		let (stored, traced) = gate.with_state(|state| {
			if !state.enabled {
				return (value, false);
			}
			let stored = if value.is_null() { <A::Value as SlotValue>::canonical_default() } else { value };
			<A as SlotAt<I>>::slot_mut(&mut state.slots).fill(stored.clone());
			(stored, state.debug)
		});
		if traced {
			debug!(gate = %gate.name, slot = self.name(), value = ?stored, "slot.assign");
		}
		stored
	}

	/// Resets the slot to its default and unset. Never fires.
	///
	/// No-op while the gate is disabled.
	pub fn clear(&self) {
		let gate = self.gate;
		let traced = gate.with_state(|state| {
			if !state.enabled {
				return false;
			}
			<A as SlotAt<I>>::slot_mut(&mut state.slots).reset();
			state.debug
		});
		if traced {
			debug!(gate = %gate.name, slot = self.name(), "slot.clear");
		}
	}
}

impl<A, F, M, const I: usize> SlotHandle<'_, A, F, M, I>
where
	A: SlotAt<I>,
	F: Fn(A),
	M: LockMode,
{
	/// Stores `value` and attempts to fire. Returns true if the delegate ran.
	///
	/// Setting a nullable slot to null marks it set with its default; under
	/// [`NullPolicy::Suppress`] that call returns false without firing, even
	/// when it completes the argument set. Returns false without storing
	/// anything while the gate is disabled.
	pub fn set(&self, value: A::Value) -> bool {
		let gate = self.gate;
		let null = value.is_null();
		let stored = gate.with_state(|state| {
			if !state.enabled {
				return None;
			}
			let traced = state.debug.then(|| value.clone());
			let slot = <A as SlotAt<I>>::slot_mut(&mut state.slots);
			if null {
				slot.fill_default();
			} else {
				slot.fill(value);
			}
			Some(traced)
		});
		let Some(traced) = stored else {
			return false;
		};

		if let Some(value) = traced {
			if null {
				debug!(gate = %gate.name, slot = self.name(), value = ?value, "slot.set.null");
			} else {
				debug!(gate = %gate.name, slot = self.name(), value = ?value, "slot.set");
			}
		}
		if null && gate.null_policy == NullPolicy::Suppress {
			return false;
		}
		gate.fire()
	}
}

impl<A: Arguments, F, M: LockMode, const I: usize> Clone for SlotHandle<'_, A, F, M, I> {
	fn clone(&self) -> Self {
		*self
	}
}

impl<A: Arguments, F, M: LockMode, const I: usize> Copy for SlotHandle<'_, A, F, M, I> {}

impl<A: Arguments, F, M: LockMode, const I: usize> fmt::Debug for SlotHandle<'_, A, F, M, I> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("SlotHandle")
			.field("gate", &self.gate.name)
			.field("slot", &self.gate.slot_names[I])
			.field("index", &I)
			.finish()
	}
}

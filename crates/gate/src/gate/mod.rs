//! The argument gate.
//!
//! A gate holds one slot per delegate parameter. Callers fill slots from
//! anywhere, in any order; when the last unset slot is filled the gate invokes
//! its delegate with every collected value, on the calling thread.
//!
//! # Locking
//!
//! Slot mutation and the fire decision run inside the gate's critical section
//! (see [`LockMode`]). The delegate never does: [`ArgumentGate::fire`] copies
//! the slots under the lock, releases it, and only then evaluates readiness
//! and invokes the delegate on the copy. A delegate may therefore call back
//! into its own gate, and a slow delegate does not block other callers. The
//! values it receives are a point-in-time snapshot and may already be stale.
//! Debug events are emitted after the lock is released, so subscribers may
//! inspect the gate as well.

use std::fmt;

use smallvec::SmallVec;
use tracing::debug;

use crate::{Arguments, GateBuilder, GateConfig, LockMode, NullPolicy, SlotAt, ThreadSafe};

mod handle;

pub use handle::SlotHandle;

/// Slot names reported by [`ArgumentGate::pending`].
pub type PendingSlots<'a> = SmallVec<[&'a str; 4]>;

/// Mutable gate state, guarded by the lock mode.
struct GateState<A: Arguments> {
	slots: A::Slots,
	enabled: bool,
	debug: bool,
}

/// Collects the arguments of `F` one at a time and calls `F` once all are set.
///
/// `A` is the delegate's parameter list as a tuple, `F` the delegate and `M`
/// the [`LockMode`]. Per-slot operations live on [`SlotHandle`], reached
/// through [`ArgumentGate::slot`]; the gate itself only carries the
/// control surface (fire, clear, enable, debug).
///
/// ```
/// use quorum_gate::ArgumentGate;
///
/// let gate = ArgumentGate::<(i32, i32)>::builder(["a", "b"])
/// 	.delegate(|(a, b)| assert_eq!((a, b), (1, 2)))
/// 	.build()?;
///
/// assert!(!gate.slot::<0>().set(1));
/// assert!(gate.slot::<1>().set(2));
///
/// gate.slot::<0>().clear();
/// assert!(!gate.fire());
/// assert_eq!(gate.slot::<0>().assign(1), 1);
/// assert!(gate.fire());
/// # Ok::<(), quorum_gate::GateError>(())
/// ```
pub struct ArgumentGate<A: Arguments, F = fn(A), M: LockMode = ThreadSafe> {
	name: String,
	slot_names: Box<[String]>,
	delegate: Option<F>,
	one_shot: bool,
	null_policy: NullPolicy,
	state: M::Cell<GateState<A>>,
}

impl<A: Arguments> ArgumentGate<A> {
	/// Starts binding a gate with one slot name per parameter of `A`.
	pub fn builder<I>(slot_names: I) -> GateBuilder<A>
	where
		I: IntoIterator,
		I::Item: Into<String>,
	{
		GateBuilder::new(slot_names)
	}
}

impl<A: Arguments, F, M: LockMode> ArgumentGate<A, F, M> {
	pub(crate) fn from_parts(name: String, slot_names: Vec<String>, delegate: Option<F>, config: GateConfig) -> Self {
		Self {
			name,
			slot_names: slot_names.into_boxed_slice(),
			delegate,
			one_shot: config.one_shot,
			null_policy: config.null_policy,
			state: M::new_cell(GateState {
				slots: A::vacant_slots(),
				enabled: config.enabled,
				debug: config.debug,
			}),
		}
	}

	fn with_state<R>(&self, f: impl FnOnce(&mut GateState<A>) -> R) -> R {
		M::with(&self.state, f)
	}

	/// Returns the gate's label.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Slot names in parameter order.
	pub fn slot_names(&self) -> &[String] {
		&self.slot_names
	}

	/// Parameter index of the slot called `name`.
	pub fn index_of(&self, name: &str) -> Option<usize> {
		self.slot_names.iter().position(|slot| slot == name)
	}

	/// Returns a handle to the slot for parameter `I`.
	pub fn slot<const I: usize>(&self) -> SlotHandle<'_, A, F, M, I>
	where
		A: SlotAt<I>,
	{
		SlotHandle::new(self)
	}

	pub fn is_one_shot(&self) -> bool {
		self.one_shot
	}

	pub fn is_thread_safe(&self) -> bool {
		M::THREAD_SAFE
	}

	pub fn null_policy(&self) -> NullPolicy {
		self.null_policy
	}

	/// Returns true if a delegate is bound.
	pub fn is_bound(&self) -> bool {
		self.delegate.is_some()
	}

	/// Returns true if every slot is set.
	pub fn are_all_set(&self) -> bool {
		self.with_state(|state| A::all_set(&state.slots))
	}

	/// Names of the slots that are currently unset, in parameter order.
	pub fn pending(&self) -> PendingSlots<'_> {
		self.with_state(|state| self.unset_names(&state.slots))
	}

	fn unset_names(&self, slots: &A::Slots) -> PendingSlots<'_> {
		self.slot_names
			.iter()
			.enumerate()
			.filter(|&(index, _)| !A::is_set_at(slots, index))
			.map(|(_, name)| name.as_str())
			.collect()
	}

	/// Resets every slot to its default and unset. Never fires.
	///
	/// No-op while the gate is disabled.
	pub fn clear(&self) {
		let traced = self.with_state(|state| {
			if !state.enabled {
				return false;
			}
			A::reset_slots(&mut state.slots);
			state.debug
		});
		if traced {
			debug!(gate = %self.name, "gate.clear");
		}
	}

	pub fn is_enabled(&self) -> bool {
		self.with_state(|state| state.enabled)
	}

	/// Enables or disables the gate and returns the new state.
	///
	/// A disabled gate ignores every set, assign, clear and fire; slot state
	/// is kept as it was and resumes when the gate is enabled again.
	pub fn set_enabled(&self, enabled: bool) -> bool {
		let traced = self.with_state(|state| {
			state.enabled = enabled;
			state.debug
		});
		if traced {
			debug!(gate = %self.name, enabled, "gate.set_enabled");
		}
		enabled
	}

	pub fn is_debug(&self) -> bool {
		self.with_state(|state| state.debug)
	}

	/// Turns debug tracing on or off and returns the new state.
	///
	/// The change itself is traced when debug was on before or is on after.
	pub fn set_debug(&self, on: bool) -> bool {
		let traced = self.with_state(|state| {
			let traced = on || state.debug;
			state.debug = on;
			traced
		});
		if traced {
			debug!(gate = %self.name, debug = on, "gate.set_debug");
		}
		on
	}
}

impl<A: Arguments, F: Fn(A), M: LockMode> ArgumentGate<A, F, M> {
	/// Invokes the delegate if the gate is enabled, bound and every slot is set.
	///
	/// Returns true if the delegate ran. In one-shot mode all slots are cleared
	/// before the delegate is called, so a delegate that re-enters the gate
	/// sees it empty.
	pub fn fire(&self) -> bool {
		let snapshot = self.with_state(|state| state.enabled.then(|| (state.slots.clone(), state.debug)));
		let Some((slots, debug)) = snapshot else {
			return false;
		};

		let Some(delegate) = &self.delegate else {
			if debug {
				debug!(gate = %self.name, "gate.fire.unbound");
			}
			return false;
		};
		if !A::all_set(&slots) {
			if debug {
				debug!(gate = %self.name, pending = ?self.unset_names(&slots), "gate.fire.pending");
			}
			return false;
		}

		if debug {
			debug!(gate = %self.name, one_shot = self.one_shot, "gate.fire");
		}
		if self.one_shot {
			self.clear();
		}
		delegate(A::into_arguments(slots));
		true
	}
}

impl<A: Arguments, F, M: LockMode> fmt::Debug for ArgumentGate<A, F, M> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ArgumentGate")
			.field("name", &self.name)
			.field("slots", &self.slot_names)
			.field("one_shot", &self.one_shot)
			.field("thread_safe", &M::THREAD_SAFE)
			.field("null_policy", &self.null_policy)
			.field("bound", &self.delegate.is_some())
			.finish_non_exhaustive()
	}
}

//! Mutual-exclusion policies for gate state.
//!
//! The policy is part of a gate's type. A [`ThreadSafe`] gate guards slot
//! state with one [`parking_lot::Mutex`] per gate and can be shared across
//! threads. An [`Unsynchronized`] gate keeps its state in a [`RefCell`], which
//! makes the gate `!Sync`: sharing it across threads does not compile.

use std::cell::RefCell;

use parking_lot::Mutex;

mod sealed {
	pub trait Sealed {}
}

/// Selects how a gate guards its slot state.
pub trait LockMode: sealed::Sealed + 'static {
	/// Container for the guarded state.
	type Cell<T>;

	/// Whether gates using this mode may be shared between threads.
	const THREAD_SAFE: bool;

	#[doc(hidden)]
	fn new_cell<T>(value: T) -> Self::Cell<T>;

	/// Runs `f` inside the critical section.
	///
	/// `f` must not call back into the gate.
	#[doc(hidden)]
	fn with<T, R>(cell: &Self::Cell<T>, f: impl FnOnce(&mut T) -> R) -> R;
}

/// Slot state behind a per-gate mutex.
#[derive(Debug)]
pub enum ThreadSafe {}

/// Slot state without locking, for gates owned by a single thread.
#[derive(Debug)]
pub enum Unsynchronized {}

impl sealed::Sealed for ThreadSafe {}
impl sealed::Sealed for Unsynchronized {}

impl LockMode for ThreadSafe {
	type Cell<T> = Mutex<T>;

	const THREAD_SAFE: bool = true;

	fn new_cell<T>(value: T) -> Mutex<T> {
		Mutex::new(value)
	}

	#[inline]
	fn with<T, R>(cell: &Mutex<T>, f: impl FnOnce(&mut T) -> R) -> R {
		f(&mut *cell.lock())
	}
}

impl LockMode for Unsynchronized {
	type Cell<T> = RefCell<T>;

	const THREAD_SAFE: bool = false;

	fn new_cell<T>(value: T) -> RefCell<T> {
		RefCell::new(value)
	}

	#[inline]
	fn with<T, R>(cell: &RefCell<T>, f: impl FnOnce(&mut T) -> R) -> R {
		f(&mut *cell.borrow_mut())
	}
}

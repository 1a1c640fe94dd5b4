//! Argument gates: collect a function's arguments one at a time, call it once.
//!
//! An [`ArgumentGate`] is bound to a delegate `Fn(A)` where `A` is a tuple of
//! parameter types. Each parameter gets a named [`Slot`]. Slots are filled
//! independently, from unrelated call sites or threads; the call that fills
//! the last unset slot invokes the delegate with every collected value.
//!
//! ```
//! use std::sync::atomic::{AtomicUsize, Ordering};
//!
//! use quorum_gate::ArgumentGate;
//!
//! let calls = AtomicUsize::new(0);
//! let gate = ArgumentGate::<(u32, String)>::builder(["id", "label"])
//! 	.name("render")
//! 	.delegate(|(id, label): (u32, String)| {
//! 		assert_eq!((id, label.as_str()), (7, "seven"));
//! 		calls.fetch_add(1, Ordering::SeqCst);
//! 	})
//! 	.build()?;
//!
//! assert!(!gate.slot::<0>().set(7));
//! assert_eq!(gate.pending().as_slice(), ["label"]);
//! assert!(gate.slot::<1>().set("seven".to_string()));
//! assert_eq!(calls.load(Ordering::SeqCst), 1);
//! # Ok::<(), quorum_gate::GateError>(())
//! ```
//!
//! # Policies
//!
//! - **Enabled**: a disabled gate ignores every mutation and never fires.
//! - **Debug**: a debug gate emits `tracing` events at `DEBUG` level for every
//!   mutation and fire decision.
//! - **One-shot**: a firing gate clears all slots before calling the delegate.
//! - **Null policy**: whether setting an `Option` slot to `None` may fire.
//! - **Lock mode**: [`ThreadSafe`] or [`Unsynchronized`], chosen by type.

#![cfg_attr(test, allow(unused_crate_dependencies))]

mod args;
mod builder;
mod config;
mod error;
mod gate;
mod lock;
mod slot;
mod value;

pub use args::{Arguments, SlotAt};
pub use builder::{DEFAULT_GATE_NAME, GateBuilder};
pub use config::{GateConfig, NullPolicy};
pub use error::{GateError, Result};
pub use gate::{ArgumentGate, PendingSlots, SlotHandle};
pub use lock::{LockMode, ThreadSafe, Unsynchronized};
pub use slot::Slot;
pub use value::SlotValue;

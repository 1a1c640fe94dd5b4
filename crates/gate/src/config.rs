//! Construction-time gate settings.

use serde::{Deserialize, Serialize};

/// What happens when a nullable slot is set to its null value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NullPolicy {
	/// The slot becomes set with its default, but the call never fires the
	/// gate, even when it completes the argument set. A later `fire` or
	/// non-null `set` is needed.
	#[default]
	Suppress,
	/// Null values are treated like any other value and may fire the gate.
	Fire,
}

/// Settings fixed when a gate is bound.
///
/// `enabled` and `debug` are only initial values; both can be toggled on a
/// live gate. `one_shot` and `null_policy` are fixed for the gate's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct GateConfig {
	/// Clear every slot when the gate fires, before the delegate runs.
	pub one_shot: bool,
	/// Initial enabled state. A disabled gate ignores every mutation.
	pub enabled: bool,
	/// Initial debug state. Debug gates emit `tracing` events for each mutation.
	pub debug: bool,
	/// Handling of null values in nullable slots.
	pub null_policy: NullPolicy,
}

impl Default for GateConfig {
	fn default() -> Self {
		Self {
			one_shot: false,
			enabled: true,
			debug: false,
			null_policy: NullPolicy::Suppress,
		}
	}
}

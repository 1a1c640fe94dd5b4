//! Binding a delegate and slot names into a gate.

use std::marker::PhantomData;

use crate::error::Result;
use crate::{ArgumentGate, Arguments, GateConfig, GateError, LockMode, NullPolicy, ThreadSafe, Unsynchronized};

/// Label used when none is given.
pub const DEFAULT_GATE_NAME: &str = "gate";

/// Binds slot names, a delegate and a [`GateConfig`] into an [`ArgumentGate`].
///
/// Slot names are validated when the gate is built: there must be exactly one
/// per delegate parameter, each an identifier, with no duplicates.
///
/// A builder without a delegate produces an unbound gate, which collects
/// arguments but never fires.
pub struct GateBuilder<A, F = fn(A)> {
	name: String,
	slot_names: Vec<String>,
	config: GateConfig,
	delegate: Option<F>,
	_args: PhantomData<fn(A)>,
}

impl<A: Arguments> GateBuilder<A> {
	/// Starts a binding with one name per delegate parameter, in order.
	pub fn new<I>(slot_names: I) -> Self
	where
		I: IntoIterator,
		I::Item: Into<String>,
	{
		Self {
			name: DEFAULT_GATE_NAME.to_string(),
			slot_names: slot_names.into_iter().map(Into::into).collect(),
			config: GateConfig::default(),
			delegate: None,
			_args: PhantomData,
		}
	}
}

impl<A: Arguments, F> GateBuilder<A, F> {
	/// Sets the label reported in diagnostics.
	pub fn name(mut self, name: impl Into<String>) -> Self {
		self.name = name.into();
		self
	}

	/// Replaces the whole configuration.
	pub fn config(mut self, config: GateConfig) -> Self {
		self.config = config;
		self
	}

	pub fn one_shot(mut self, one_shot: bool) -> Self {
		self.config.one_shot = one_shot;
		self
	}

	pub fn enabled(mut self, enabled: bool) -> Self {
		self.config.enabled = enabled;
		self
	}

	pub fn debug(mut self, debug: bool) -> Self {
		self.config.debug = debug;
		self
	}

	pub fn null_policy(mut self, null_policy: NullPolicy) -> Self {
		self.config.null_policy = null_policy;
		self
	}

	/// Binds the delegate invoked when every slot is set.
	pub fn delegate<G>(self, delegate: G) -> GateBuilder<A, G>
	where
		G: Fn(A),
	{
		GateBuilder {
			name: self.name,
			slot_names: self.slot_names,
			config: self.config,
			delegate: Some(delegate),
			_args: PhantomData,
		}
	}

	/// Builds a gate that can be shared between threads.
	pub fn build(self) -> Result<ArgumentGate<A, F, ThreadSafe>>
	where
		F: Fn(A),
	{
		self.build_with()
	}

	/// Builds a gate for use from a single thread, without locking.
	pub fn build_unsynchronized(self) -> Result<ArgumentGate<A, F, Unsynchronized>>
	where
		F: Fn(A),
	{
		self.build_with()
	}

	/// Builds a gate with the lock mode `M`.
	pub fn build_with<M: LockMode>(self) -> Result<ArgumentGate<A, F, M>>
	where
		F: Fn(A),
	{
		self.validate()?;
		tracing::trace!(gate = %self.name, slots = ?self.slot_names, thread_safe = M::THREAD_SAFE, "gate.bind");
		Ok(ArgumentGate::from_parts(self.name, self.slot_names, self.delegate, self.config))
	}

	fn validate(&self) -> Result<()> {
		if self.slot_names.len() != A::ARITY {
			return Err(GateError::ArityMismatch {
				expected: A::ARITY,
				found: self.slot_names.len(),
			});
		}
		for (index, name) in self.slot_names.iter().enumerate() {
			if name.is_empty() {
				return Err(GateError::EmptySlotName { index });
			}
			if !is_identifier(name) {
				return Err(GateError::InvalidSlotName(name.clone()));
			}
			if self.slot_names[..index].contains(name) {
				return Err(GateError::DuplicateSlotName(name.clone()));
			}
		}
		Ok(())
	}
}

fn is_identifier(name: &str) -> bool {
	let mut chars = name.chars();
	chars.next().is_some_and(|c| c == '_' || c.is_alphabetic()) && chars.all(|c| c == '_' || c.is_alphanumeric())
}

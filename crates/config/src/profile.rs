use std::path::Path;

use indexmap::IndexMap;
use quorum_gate::{ArgumentGate, Arguments, GateBuilder, GateConfig, LockMode};
use serde::{Deserialize, Serialize};

use crate::{ConfigError, ConfigWarning, Result};

const GATE_SECTION: &str = "gate";
const PROFILE_KEYS: &[&str] = &["one-shot", "thread-safe", "enabled", "debug", "null-policy"];

/// Settings for one named gate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct GateProfile {
	/// Whether gates bound from this profile must be [`ThreadSafe`](quorum_gate::ThreadSafe).
	pub thread_safe: bool,
	/// Settings passed to the gate builder.
	#[serde(flatten)]
	pub gate: GateConfig,
}

impl GateProfile {
	/// Checks that the lock mode `M` agrees with the profile's `thread-safe` flag.
	pub fn check_lock_mode<M: LockMode>(&self) -> Result<()> {
		if self.thread_safe == M::THREAD_SAFE {
			Ok(())
		} else {
			Err(ConfigError::LockModeMismatch {
				declared: self.thread_safe,
				actual: M::THREAD_SAFE,
			})
		}
	}
}

/// Named gate profiles, in the order they were first defined.
#[derive(Debug, Clone, Default)]
pub struct Profiles {
	profiles: IndexMap<String, GateProfile>,
	warnings: Vec<ConfigWarning>,
}

impl Profiles {
	/// Parses a TOML document into [`Profiles`].
	///
	/// Unknown sections and keys are recorded as warnings rather than
	/// failing the parse.
	pub fn parse(input: &str) -> Result<Self> {
		let document: toml::Table = toml::from_str(input)?;
		let mut profiles = Self::default();

		for (section, value) in document {
			if section != GATE_SECTION {
				profiles.warnings.push(ConfigWarning::UnknownSection(section));
				continue;
			}
			let toml::Value::Table(gates) = value else {
				return Err(ConfigError::InvalidSection);
			};
			for (name, value) in gates {
				if let toml::Value::Table(entry) = &value {
					profiles.warnings.extend(
						entry
							.keys()
							.filter(|key| !PROFILE_KEYS.contains(&key.as_str()))
							.map(|key| ConfigWarning::UnknownKey {
								profile: name.clone(),
								key: key.clone(),
							}),
					);
				}
				let profile: GateProfile = value.try_into().map_err(|error| ConfigError::InvalidProfile { name: name.clone(), error })?;
				profiles.profiles.insert(name, profile);
			}
		}

		tracing::debug!(profiles = profiles.len(), warnings = profiles.warnings.len(), "profiles.parse");
		Ok(profiles)
	}

	/// Loads profiles from a file.
	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
			path: path.to_path_buf(),
			error: e,
		})?;
		Self::parse(&content)
	}

	/// Merges another set of profiles into this one.
	///
	/// Profiles from `other` replace same-named profiles in `self` and keep
	/// their original position. New names are appended.
	pub fn merge(&mut self, other: Profiles) {
		self.profiles.extend(other.profiles);
		self.warnings.extend(other.warnings);
	}

	pub fn get(&self, name: &str) -> Option<&GateProfile> {
		self.profiles.get(name)
	}

	/// Like [`get`](Self::get), but a missing profile is an error.
	pub fn profile(&self, name: &str) -> Result<&GateProfile> {
		self.get(name).ok_or_else(|| ConfigError::UnknownProfile(name.to_string()))
	}

	pub fn insert(&mut self, name: impl Into<String>, profile: GateProfile) -> Option<GateProfile> {
		self.profiles.insert(name.into(), profile)
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &GateProfile)> {
		self.profiles.iter().map(|(name, profile)| (name.as_str(), profile))
	}

	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.profiles.keys().map(String::as_str)
	}

	pub fn len(&self) -> usize {
		self.profiles.len()
	}

	pub fn is_empty(&self) -> bool {
		self.profiles.is_empty()
	}

	/// Non-fatal warnings encountered while parsing.
	pub fn warnings(&self) -> &[ConfigWarning] {
		&self.warnings
	}

	/// Starts a gate binding configured from the profile `name`.
	///
	/// The builder is labelled with the profile name. Its settings can still
	/// be adjusted before a delegate is bound.
	///
	/// The profile's `thread-safe` flag is not carried by the builder, which
	/// can still be built with any lock mode. Use [`bind`](Self::bind), or
	/// call [`GateProfile::check_lock_mode`] before building, to enforce it.
	pub fn builder<A: Arguments>(&self, name: &str, slot_names: impl IntoIterator<Item = impl Into<String>>) -> Result<GateBuilder<A>> {
		let profile = self.profile(name)?;
		Ok(GateBuilder::new(slot_names).name(name).config(profile.gate))
	}

	/// Binds a gate from the profile `name` with lock mode `M`.
	///
	/// Fails if the profile is missing, if its `thread-safe` flag disagrees
	/// with `M`, or if the slot names are rejected.
	pub fn bind<M, A, F>(&self, name: &str, slot_names: impl IntoIterator<Item = impl Into<String>>, delegate: F) -> Result<ArgumentGate<A, F, M>>
	where
		M: LockMode,
		A: Arguments,
		F: Fn(A),
	{
		self.profile(name)?.check_lock_mode::<M>()?;
		let gate = self.builder::<A>(name, slot_names)?.delegate(delegate).build_with::<M>()?;
		Ok(gate)
	}
}

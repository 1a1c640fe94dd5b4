//! Error types for profile parsing.

use std::path::PathBuf;

use quorum_gate::GateError;
use thiserror::Error;

/// Errors that can occur when loading profiles or binding a gate from one.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error parsing TOML syntax.
	#[error("TOML parse error: {0}")]
	Toml(#[from] toml::de::Error),

	/// Error reading a profile file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// The `gate` key holds something other than a table of profiles.
	#[error("`gate` must be a table of profiles")]
	InvalidSection,

	/// A profile table has a value of the wrong type.
	#[error("invalid profile `{name}`: {error}")]
	InvalidProfile {
		/// Profile name.
		name: String,
		/// The underlying deserialization error.
		error: toml::de::Error,
	},

	/// No profile with the requested name exists.
	#[error("unknown gate profile: {0}")]
	UnknownProfile(String),

	/// The profile's `thread-safe` flag disagrees with the gate's lock mode.
	#[error("profile declares thread-safe = {declared}, but the gate's lock mode is thread-safe = {actual}")]
	LockModeMismatch {
		/// Value of `thread-safe` in the profile.
		declared: bool,
		/// Whether the requested lock mode synchronizes.
		actual: bool,
	},

	/// The gate rejected its slot names.
	#[error(transparent)]
	Gate(#[from] GateError),
}

/// Non-fatal problems found while parsing. Collected in
/// [`Profiles::warnings`](crate::Profiles::warnings).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
	/// A top-level table other than `gate`.
	UnknownSection(String),
	/// A key inside a profile that no setting uses.
	UnknownKey {
		/// Profile the key was found in.
		profile: String,
		/// The unrecognised key.
		key: String,
	},
}

impl std::fmt::Display for ConfigWarning {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			ConfigWarning::UnknownSection(section) => write!(f, "'{section}' is not a known section and will be ignored"),
			ConfigWarning::UnknownKey { profile, key } => write!(f, "'{key}' in profile '{profile}' will be ignored"),
		}
	}
}

/// Result type for profile operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

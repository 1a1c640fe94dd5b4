//! Gate profiles for Quorum.
//!
//! A profile file names sets of gate settings so call sites only choose a
//! profile and supply slot names and a delegate:
//!
//! ```toml
//! [gate.fetch-user]
//! one-shot = true
//! thread-safe = true
//!
//! [gate.render]
//! debug = true
//! null-policy = "fire"
//! ```
//!
//! Every key is optional. Missing keys take the [`GateConfig`] defaults:
//! enabled, not one-shot, no debug tracing, null values suppressed, and not
//! thread-safe.
//!
//! Unknown sections and keys are not errors. They are collected in
//! [`Profiles::warnings`] for the caller to report.
//!
//! [`GateConfig`]: quorum_gate::GateConfig

#![cfg_attr(test, allow(unused_crate_dependencies))]

pub mod error;
mod profile;

pub use error::{ConfigError, ConfigWarning, Result};
pub use profile::{GateProfile, Profiles};

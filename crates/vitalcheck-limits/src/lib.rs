//! # vitalcheck-limits
//!
//! Loads the thresholds used by the age validator, blood-pressure
//! classifier, vital-signs analyzer, and dose calculator from a TOML document.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use std::path::Path;
//! use vitalcheck_core::HealthAssessor;
//!
//! let limits = vitalcheck_limits::from_file(Path::new("limits.toml"))?;
//! let assessor = HealthAssessor::new(limits);
//! ```
//!
//! Every key is optional. An empty document yields `HealthLimits::default()`.

pub mod loader;

pub use loader::{from_file, from_toml_str, validate};

// ── Tests ─────────────────────────────────────────────────────────────────────

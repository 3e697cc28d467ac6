//! # vitalcheck-core
//!
//! Decision logic for patient intake.
//!
//! This crate provides:
//! - `HealthAssessor`: the age validator, blood-pressure risk classifier,
//!   vital-signs status rules, and weight-based dose calculator
//! - the `LogSink` trait for where intake entries are recorded
//! - `IntakeWorkflow`, which sequences them over a `Patient` or a reading
//!
//! ## Usage
//!
//! ```rust,ignore
//! use vitalcheck_core::{HealthAssessor, IntakeWorkflow};
//! use vitalcheck_log::InMemoryLog;
//!
//! let assessor = HealthAssessor::default();
//! let mut intake = IntakeWorkflow::new(assessor, InMemoryLog::new(), std::io::stdout());
//! let outcome = intake.process_with_vitals(&patient, 152, 90, true)?;
//! ```

pub mod assessor;
pub mod intake;
pub mod traits;
pub mod vitals;

pub use assessor::HealthAssessor;
pub use intake::IntakeWorkflow;
pub use traits::LogSink;
pub use vitals::AnalysisOptions;

// ── Tests ─────────────────────────────────────────────────────────────────────

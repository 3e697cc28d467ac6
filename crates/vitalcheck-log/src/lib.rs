//! # vitalcheck-log
//!
//! The in-memory log sink that records intake decisions.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use vitalcheck_core::{HealthAssessor, IntakeWorkflow};
//! use vitalcheck_log::InMemoryLog;
//!
//! let assessor = HealthAssessor::default();
//! let mut intake = IntakeWorkflow::new(assessor, InMemoryLog::new(), std::io::stdout());
//! intake.process(&patient)?;
//!
//! let (log, _) = intake.into_parts();
//! for entry in log.iter() {
//!     println!("{entry}");
//! }
//! ```

pub mod memory;
pub mod snapshot;

pub use memory::InMemoryLog;
pub use snapshot::LogSnapshot;

// ── Tests ─────────────────────────────────────────────────────────────────────

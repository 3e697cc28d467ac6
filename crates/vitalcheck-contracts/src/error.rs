//! Error types for the vitalcheck crates.
//!
//! An out-of-range age is a normal workflow outcome, not an error: the intake
//! workflow records it and returns early. `VitalError::InvalidAge` exists for
//! callers that want to escalate it themselves.

use thiserror::Error;

/// The unified error type for vitalcheck.
#[derive(Debug, Error)]
pub enum VitalError {
    /// The patient's age lies outside the accepted range.
    #[error("age {age} is outside the valid range [{min}, {max}]")]
    InvalidAge { age: i32, min: i32, max: i32 },

    /// A vital-sign reading lies outside the range any real reading could take.
    #[error("invalid {sign} value: {value}, must be between {min} and {max}")]
    InvalidVitalSign {
        sign: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// A dose calculation input was rejected.
    #[error("invalid dose input: {reason}")]
    InvalidDoseInput { reason: String },

    /// The drug code has no entry in the dose table.
    #[error("unknown drug code: {code}")]
    UnknownDrug { code: String },

    /// A vital status name did not match any known status.
    #[error("unknown vital status '{value}'")]
    UnknownStatus { value: String },

    /// Health limits are missing, malformed, or inconsistent.
    #[error("configuration error: {reason}")]
    ConfigError { reason: String },

    /// A workflow line could not be written to its output.
    #[error("output write failed: {0}")]
    Output(#[from] std::io::Error),
}

/// Convenience alias used throughout the vitalcheck crates.
pub type VitalResult<T> = Result<T, VitalError>;

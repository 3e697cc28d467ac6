//! Vital-sign readings and the status the analyzer assigns to them.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::VitalError;

/// One heart-rate and blood-oxygen reading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VitalReading {
    /// Heart rate in beats per minute.
    pub heart_rate: f64,
    /// Blood oxygen saturation in percent.
    pub spo2: f64,
}

/// Four-level vital-signs status, least to most urgent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VitalStatus {
    Ok,
    Warning,
    /// A warning with a severe raw reading. Labelled `SEVERE?` because it
    /// flags a reading for review rather than a confirmed deterioration.
    Severe,
    Critical,
}

impl VitalStatus {
    pub fn label(self) -> &'static str {
        match self {
            VitalStatus::Ok => "OK",
            VitalStatus::Warning => "WARNING",
            VitalStatus::Severe => "SEVERE?",
            VitalStatus::Critical => "CRITICAL",
        }
    }
}

impl fmt::Display for VitalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for VitalStatus {
    type Err = VitalError;

    /// Accepts the labels (`SEVERE?`) and plain names (`severe`), any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().trim_end_matches('?').to_ascii_lowercase().as_str() {
            "ok" => Ok(VitalStatus::Ok),
            "warning" => Ok(VitalStatus::Warning),
            "severe" => Ok(VitalStatus::Severe),
            "critical" => Ok(VitalStatus::Critical),
            _ => Err(VitalError::UnknownStatus {
                value: s.to_string(),
            }),
        }
    }
}

/// Everything one analysis produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VitalsReport {
    pub reading: VitalReading,
    /// Heart rate scaled so the physiological range maps to `[0, 1]`.
    pub normalized_hr: f64,
    /// SpO2 scaled to `[0, 1]`.
    pub normalized_spo2: f64,
    /// The final status, after any manual override.
    pub status: VitalStatus,
    /// True when `status` came from a manual override.
    pub overridden: bool,
    /// `Last status: <STATUS>`, with ` (DBG)` appended in debug mode.
    pub message: String,
}

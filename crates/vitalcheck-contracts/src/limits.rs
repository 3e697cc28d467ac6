//! Numeric thresholds used by the age validator, the blood-pressure
//! classifier, the vital-signs analyzer, and the dose calculator.
//!
//! `HealthLimits::default()` carries the clinical constants the intake
//! workflow has always used. `vitalcheck-limits` can load overrides from TOML;
//! any field left out keeps its default.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Inclusive age range and the age of majority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AgeLimits {
    /// Lowest valid age (inclusive).
    pub min: i32,
    /// Highest valid age (inclusive).
    pub max: i32,
    /// Patients younger than this are minors.
    pub adult: i32,
}

impl AgeLimits {
    pub const MIN_AGE: i32 = 0;
    pub const MAX_AGE: i32 = 130;
    pub const ADULT_AGE: i32 = 18;
}

impl Default for AgeLimits {
    fn default() -> Self {
        Self {
            min: Self::MIN_AGE,
            max: Self::MAX_AGE,
            adult: Self::ADULT_AGE,
        }
    }
}

/// Blood-pressure thresholds in mmHg. All comparisons are strict (`>`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BloodPressureLimits {
    /// Systolic above this is high risk.
    pub high_systolic: i32,
    /// Diastolic above this is high risk.
    pub high_diastolic: i32,
    /// Systolic above this (and not high risk) is medium risk.
    pub medium_systolic: i32,
}

impl BloodPressureLimits {
    pub const HIGH_SYSTOLIC: i32 = 150;
    pub const HIGH_DIASTOLIC: i32 = 95;
    pub const MEDIUM_SYSTOLIC: i32 = 130;
}

impl Default for BloodPressureLimits {
    fn default() -> Self {
        Self {
            high_systolic: Self::HIGH_SYSTOLIC,
            high_diastolic: Self::HIGH_DIASTOLIC,
            medium_systolic: Self::MEDIUM_SYSTOLIC,
        }
    }
}

/// Heart-rate and SpO2 ranges and the status thresholds of the vital-signs
/// analyzer.
///
/// `hr_min`/`hr_max` and `spo2_max` scale raw readings into `[0, 1]`; readings
/// outside the physiological range normalize outside it. The `*_valid_max`
/// bounds reject readings that cannot be real.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VitalSignLimits {
    /// Heart rate (bpm) that normalizes to 0.
    pub hr_min: f64,
    /// Heart rate (bpm) that normalizes to 1.
    pub hr_max: f64,
    /// Highest accepted heart-rate reading.
    pub hr_valid_max: f64,
    /// SpO2 (%) that normalizes to 1.
    pub spo2_max: f64,
    /// Normalized heart rate above this, with low SpO2, is critical.
    pub norm_hr_critical: f64,
    /// Normalized SpO2 below this, with high heart rate, is critical.
    pub norm_spo2_critical: f64,
    /// Normalized heart rate above this is at least a warning.
    pub norm_hr_warning: f64,
    /// Raw SpO2 below this escalates a warning to severe.
    pub spo2_severe: f64,
    /// Raw heart rate above this escalates a warning to severe.
    pub hr_severe: f64,
}

impl Default for VitalSignLimits {
    fn default() -> Self {
        Self {
            hr_min: 40.0,
            hr_max: 180.0,
            hr_valid_max: 300.0,
            spo2_max: 100.0,
            norm_hr_critical: 0.7,
            norm_spo2_critical: 0.3,
            norm_hr_warning: 0.4,
            spo2_severe: 88.0,
            hr_severe: 200.0,
        }
    }
}

/// Per-kilogram dose table and the pediatric adjustment.
///
/// Supplying `per_kg_mg` in TOML replaces the whole default table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DosingLimits {
    /// Patients younger than this receive the pediatric factor.
    pub pediatric_age: i32,
    /// Multiplier applied to pediatric doses.
    pub pediatric_factor: f64,
    /// Milligrams per kilogram of body mass, keyed by drug code.
    pub per_kg_mg: BTreeMap<String, f64>,
}

impl Default for DosingLimits {
    fn default() -> Self {
        Self {
            pediatric_age: 12,
            pediatric_factor: 0.8,
            per_kg_mg: BTreeMap::from([
                ("DRUG_A".to_string(), 2.0),
                ("DRUG_B".to_string(), 0.5),
                ("DRUG_C".to_string(), 1.2),
            ]),
        }
    }
}

/// Every threshold the validator, classifier, analyzer, and dose calculator
/// consult.
///
/// Example in TOML:
/// ```toml
/// [age]
/// min = 0
/// max = 130
/// adult = 18
///
/// [blood_pressure]
/// high_systolic = 150
/// high_diastolic = 95
/// medium_systolic = 130
///
/// [vital_signs]
/// hr_min = 40.0
/// hr_max = 180.0
///
/// [dosing]
/// pediatric_age = 12
/// pediatric_factor = 0.8
///
/// [dosing.per_kg_mg]
/// DRUG_A = 2.0
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HealthLimits {
    pub age: AgeLimits,
    pub blood_pressure: BloodPressureLimits,
    pub vital_signs: VitalSignLimits,
    pub dosing: DosingLimits,
}

//! Loading `HealthLimits` from TOML.
//!
//! Loading algorithm:
//!
//! 1. Deserialize the document; absent tables and keys keep their defaults,
//!    unknown keys are rejected.
//! 2. Check the limits are consistent (see `validate`).
//! 3. Return the limits, or `VitalError::ConfigError` naming the problem.

use std::path::Path;

use tracing::{debug, warn};

use vitalcheck_contracts::{
    error::{VitalError, VitalResult},
    limits::HealthLimits,
};

/// Parse `s` as TOML and return validated limits.
///
/// Returns `VitalError::ConfigError` if the TOML is malformed, has unknown
/// keys, or describes inconsistent limits.
pub fn from_toml_str(s: &str) -> VitalResult<HealthLimits> {
    let limits: HealthLimits = toml::from_str(s).map_err(|e| VitalError::ConfigError {
        reason: format!("failed to parse limits TOML: {}", e),
    })?;
    validate(&limits)?;

    debug!(
        min_age = limits.age.min,
        max_age = limits.age.max,
        adult_age = limits.age.adult,
        high_systolic = limits.blood_pressure.high_systolic,
        high_diastolic = limits.blood_pressure.high_diastolic,
        medium_systolic = limits.blood_pressure.medium_systolic,
        drugs = limits.dosing.per_kg_mg.len(),
        "health limits loaded"
    );

    Ok(limits)
}

/// Read the file at `path` and parse it as limits TOML.
pub fn from_file(path: &Path) -> VitalResult<HealthLimits> {
    let contents = std::fs::read_to_string(path).map_err(|e| VitalError::ConfigError {
        reason: format!("failed to read limits file '{}': {}", path.display(), e),
    })?;
    from_toml_str(&contents)
}

/// Reject limits the validator and classifier could not apply sensibly.
///
/// Requires `min <= adult <= max` for ages,
/// `medium_systolic <= high_systolic` for blood pressure, `hr_min < hr_max`
/// and a positive `spo2_max` for normalization, and non-negative, finite
/// dosing numbers.
pub fn validate(limits: &HealthLimits) -> VitalResult<()> {
    let age = &limits.age;
    if age.min > age.max {
        return Err(invalid(format!(
            "age.min ({}) is greater than age.max ({})",
            age.min, age.max
        )));
    }
    if age.adult < age.min || age.adult > age.max {
        return Err(invalid(format!(
            "age.adult ({}) lies outside [{}, {}]",
            age.adult, age.min, age.max
        )));
    }

    let bp = &limits.blood_pressure;
    if bp.medium_systolic > bp.high_systolic {
        return Err(invalid(format!(
            "blood_pressure.medium_systolic ({}) is greater than blood_pressure.high_systolic ({})",
            bp.medium_systolic, bp.high_systolic
        )));
    }

    let vs = &limits.vital_signs;
    if !(vs.hr_min < vs.hr_max) {
        return Err(invalid(format!(
            "vital_signs.hr_min ({}) must be below vital_signs.hr_max ({})",
            vs.hr_min, vs.hr_max
        )));
    }
    if !(vs.spo2_max > 0.0) {
        return Err(invalid(format!(
            "vital_signs.spo2_max ({}) must be positive",
            vs.spo2_max
        )));
    }

    let dosing = &limits.dosing;
    if !(dosing.pediatric_factor.is_finite() && dosing.pediatric_factor >= 0.0) {
        return Err(invalid(format!(
            "dosing.pediatric_factor ({}) must be a non-negative number",
            dosing.pediatric_factor
        )));
    }
    if let Some((code, rate)) = dosing
        .per_kg_mg
        .iter()
        .find(|(_, rate)| !(rate.is_finite() && **rate >= 0.0))
    {
        return Err(invalid(format!(
            "dosing.per_kg_mg.{} ({}) must be a non-negative number",
            code, rate
        )));
    }

    Ok(())
}

fn invalid(reason: String) -> VitalError {
    warn!(reason = %reason, "rejecting inconsistent health limits");
    VitalError::ConfigError { reason }
}

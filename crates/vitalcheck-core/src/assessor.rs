//! The pure decision functions: age validation, blood-pressure risk
//! classification, vital-sign status, and weight-based dosing.

use tracing::debug;

use vitalcheck_contracts::{
    assessment::{AgeBracket, RiskTier},
    error::{VitalError, VitalResult},
    limits::HealthLimits,
    vitals::{VitalReading, VitalStatus},
};

/// Applies `HealthLimits` to ages and blood-pressure readings.
///
/// Every method is a pure function of its arguments and the limits it was
/// built with. `HealthAssessor::default()` uses the standard clinical limits.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HealthAssessor {
    limits: HealthLimits,
}

impl HealthAssessor {
    pub fn new(limits: HealthLimits) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> &HealthLimits {
        &self.limits
    }

    /// True iff `min <= age <= max` (default `[0, 130]`).
    pub fn is_valid_age(&self, age: i32) -> bool {
        age >= self.limits.age.min && age <= self.limits.age.max
    }

    /// True iff `age` is below the age of majority (default 18).
    ///
    /// Does not check validity; a negative age is a minor here.
    pub fn is_minor(&self, age: i32) -> bool {
        age < self.limits.age.adult
    }

    pub fn age_bracket(&self, age: i32) -> AgeBracket {
        if self.is_minor(age) {
            AgeBracket::Minor
        } else {
            AgeBracket::Adult
        }
    }

    /// Like `is_valid_age`, but as a `Result` for callers that treat an
    /// out-of-range age as an error.
    pub fn check_age(&self, age: i32) -> VitalResult<()> {
        if self.is_valid_age(age) {
            Ok(())
        } else {
            Err(VitalError::InvalidAge {
                age,
                min: self.limits.age.min,
                max: self.limits.age.max,
            })
        }
    }

    /// Classify a blood-pressure reading.
    ///
    /// High risk is tested first: systolic above 150 OR diastolic above 95.
    /// Only then is systolic above 130 medium risk. Anything else, including
    /// nonsensical negative readings, is normal.
    pub fn assess_blood_pressure(&self, systolic: i32, diastolic: i32) -> RiskTier {
        let bp = &self.limits.blood_pressure;

        let tier = if systolic > bp.high_systolic || diastolic > bp.high_diastolic {
            RiskTier::High
        } else if systolic > bp.medium_systolic {
            RiskTier::Medium
        } else {
            RiskTier::Normal
        };

        debug!(systolic, diastolic, tier = %tier, "blood pressure classified");
        tier
    }

    /// Reject readings outside `[0, hr_valid_max]` bpm or `[0, spo2_max]` %.
    /// NaN is rejected too.
    pub fn check_vital_reading(&self, reading: &VitalReading) -> VitalResult<()> {
        let vs = &self.limits.vital_signs;
        if !(0.0..=vs.hr_valid_max).contains(&reading.heart_rate) {
            return Err(VitalError::InvalidVitalSign {
                sign: "HR",
                value: reading.heart_rate,
                min: 0.0,
                max: vs.hr_valid_max,
            });
        }
        if !(0.0..=vs.spo2_max).contains(&reading.spo2) {
            return Err(VitalError::InvalidVitalSign {
                sign: "SpO2",
                value: reading.spo2,
                min: 0.0,
                max: vs.spo2_max,
            });
        }
        Ok(())
    }

    /// Scale a heart rate so `hr_min` maps to 0 and `hr_max` to 1.
    pub fn normalize_hr(&self, heart_rate: f64) -> f64 {
        let vs = &self.limits.vital_signs;
        (heart_rate - vs.hr_min) / (vs.hr_max - vs.hr_min)
    }

    pub fn normalize_spo2(&self, spo2: f64) -> f64 {
        spo2 / self.limits.vital_signs.spo2_max
    }

    /// Status of a reading from its normalized and raw values.
    ///
    /// Critical needs both a high normalized heart rate and a low normalized
    /// SpO2. Otherwise a heart rate above the warning level is a warning,
    /// escalated to severe when raw SpO2 is low or raw heart rate very high.
    pub fn vital_status(&self, reading: &VitalReading) -> VitalStatus {
        let vs = &self.limits.vital_signs;
        let norm_hr = self.normalize_hr(reading.heart_rate);
        let norm_spo2 = self.normalize_spo2(reading.spo2);

        let status = if norm_hr > vs.norm_hr_critical && norm_spo2 < vs.norm_spo2_critical {
            VitalStatus::Critical
        } else if norm_hr > vs.norm_hr_warning {
            if reading.spo2 < vs.spo2_severe || reading.heart_rate > vs.hr_severe {
                VitalStatus::Severe
            } else {
                VitalStatus::Warning
            }
        } else {
            VitalStatus::Ok
        };

        debug!(
            heart_rate = reading.heart_rate,
            spo2 = reading.spo2,
            norm_hr,
            norm_spo2,
            status = %status,
            "vital signs classified"
        );
        status
    }

    /// Weight-based dose in mg, rounded to two decimals.
    ///
    /// Patients under the pediatric age get the pediatric factor applied.
    /// Allergies and interactions are not considered.
    ///
    /// # Errors
    ///
    /// `InvalidDoseInput` for a non-positive weight or a negative age,
    /// `UnknownDrug` when `drug_code` has no dose table entry.
    pub fn medication_dose(
        &self,
        weight_kg: f64,
        age_years: i32,
        drug_code: &str,
    ) -> VitalResult<f64> {
        let dosing = &self.limits.dosing;

        if weight_kg.is_nan() || weight_kg <= 0.0 {
            return Err(VitalError::InvalidDoseInput {
                reason: "weight_kg must be positive".to_string(),
            });
        }
        if age_years < 0 {
            return Err(VitalError::InvalidDoseInput {
                reason: "age_years cannot be negative".to_string(),
            });
        }
        let per_kg = dosing
            .per_kg_mg
            .get(drug_code)
            .copied()
            .ok_or_else(|| VitalError::UnknownDrug {
                code: drug_code.to_string(),
            })?;

        let mut dose_mg = weight_kg * per_kg;
        if age_years < dosing.pediatric_age {
            dose_mg *= dosing.pediatric_factor;
        }
        let dose_mg = (dose_mg * 100.0).round() / 100.0;

        debug!(weight_kg, age_years, drug_code, dose_mg, "medication dose calculated");
        Ok(dose_mg)
    }
}

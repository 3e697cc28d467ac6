//! # vitalcheck-contracts
//!
//! Shared types for the vitalcheck intake, vital-signs, and dosing tools.
//!
//! Every crate in the workspace imports from here. No decision logic lives
//! in this crate, only data definitions and the error type.

pub mod assessment;
pub mod error;
pub mod limits;
pub mod patient;
pub mod vitals;

#[cfg(test)]
mod tests {
    use super::*;
    use assessment::{AgeBracket, IntakeOutcome, RiskTier};
    use error::VitalError;
    use limits::{BloodPressureLimits, HealthLimits};
    use patient::Patient;
    use vitals::VitalStatus;

    // ── Patient ──────────────────────────────────────────────────────────────

    #[test]
    fn patient_accessors_and_setters() {
        let mut p = Patient::new("Ada", 36, "asthma");
        assert_eq!(p.name(), "Ada");
        assert_eq!(p.age(), 36);
        assert_eq!(p.existing_condition(), "asthma");

        p.set_name("Ada L.");
        p.set_age(37);
        p.set_existing_condition("none");
        assert_eq!(p, Patient::new("Ada L.", 37, "none"));
    }

    #[test]
    fn patient_condition_defaults_when_absent() {
        let p: Patient = serde_json::from_str(r#"{ "name": "Bo", "age": 9 }"#).unwrap();
        assert_eq!(p.existing_condition, "");
        assert_eq!(p.age, 9);
    }

    // ── RiskTier ─────────────────────────────────────────────────────────────

    #[test]
    fn risk_tier_scores_are_ordinal() {
        assert_eq!(RiskTier::Normal.score(), 0);
        assert_eq!(RiskTier::Medium.score(), 1);
        assert_eq!(RiskTier::High.score(), 2);
        assert!(RiskTier::Normal < RiskTier::Medium);
        assert!(RiskTier::Medium < RiskTier::High);
    }

    #[test]
    fn risk_tier_display_uses_label() {
        assert_eq!(RiskTier::High.to_string(), "high risk");
        assert_eq!(RiskTier::Normal.to_string(), "normal");
    }

    #[test]
    fn age_bracket_serializes_kebab_case() {
        assert_eq!(serde_json::to_string(&AgeBracket::Minor).unwrap(), r#""minor""#);
    }

    // ── IntakeOutcome ────────────────────────────────────────────────────────

    #[test]
    fn invalid_age_outcome_scores_minus_one() {
        let outcome = IntakeOutcome::InvalidAge { age: 131 };
        assert_eq!(outcome.score(), -1);
        assert_eq!(outcome.tier(), None);
    }

    #[test]
    fn assessed_outcome_scores_tier() {
        let outcome = IntakeOutcome::Assessed { tier: RiskTier::Medium };
        assert_eq!(outcome.score(), 1);
        assert_eq!(outcome.tier(), Some(RiskTier::Medium));
    }

    #[test]
    fn intake_outcome_is_tagged_in_json() {
        let json = serde_json::to_value(IntakeOutcome::Assessed { tier: RiskTier::High }).unwrap();
        assert_eq!(json["outcome"], "assessed");
        assert_eq!(json["tier"], "high");
    }

    // ── HealthLimits ─────────────────────────────────────────────────────────

    #[test]
    fn default_limits_match_clinical_constants() {
        let limits = HealthLimits::default();
        assert_eq!(limits.age.min, 0);
        assert_eq!(limits.age.max, 130);
        assert_eq!(limits.age.adult, 18);
        assert_eq!(limits.blood_pressure.high_systolic, 150);
        assert_eq!(limits.blood_pressure.high_diastolic, 95);
        assert_eq!(limits.blood_pressure.medium_systolic, 130);
    }

    #[test]
    fn partial_limits_fill_from_defaults() {
        let limits: HealthLimits =
            serde_json::from_str(r#"{ "age": { "adult": 21 } }"#).unwrap();
        assert_eq!(limits.age.adult, 21);
        assert_eq!(limits.age.max, 130);
        assert_eq!(limits.blood_pressure, BloodPressureLimits::default());
    }

    #[test]
    fn default_vital_and_dosing_limits() {
        let limits = HealthLimits::default();
        assert_eq!(limits.vital_signs.hr_min, 40.0);
        assert_eq!(limits.vital_signs.hr_max, 180.0);
        assert_eq!(limits.vital_signs.spo2_severe, 88.0);
        assert_eq!(limits.dosing.pediatric_age, 12);
        assert_eq!(limits.dosing.pediatric_factor, 0.8);
        assert_eq!(limits.dosing.per_kg_mg.get("DRUG_B"), Some(&0.5));
        assert_eq!(limits.dosing.per_kg_mg.len(), 3);
    }

    // ── VitalStatus ──────────────────────────────────────────────────────────

    #[test]
    fn vital_status_labels() {
        assert_eq!(VitalStatus::Ok.to_string(), "OK");
        assert_eq!(VitalStatus::Severe.to_string(), "SEVERE?");
        assert_eq!(VitalStatus::Critical.to_string(), "CRITICAL");
        assert!(VitalStatus::Warning < VitalStatus::Severe);
    }

    #[test]
    fn vital_status_parses_labels_and_names() {
        assert_eq!("SEVERE?".parse::<VitalStatus>().unwrap(), VitalStatus::Severe);
        assert_eq!("warning".parse::<VitalStatus>().unwrap(), VitalStatus::Warning);
        assert_eq!(" Critical ".parse::<VitalStatus>().unwrap(), VitalStatus::Critical);

        match "stable".parse::<VitalStatus>() {
            Err(VitalError::UnknownStatus { value }) => assert_eq!(value, "stable"),
            other => panic!("expected UnknownStatus, got {:?}", other),
        }
    }

    // ── VitalError display messages ──────────────────────────────────────────

    #[test]
    fn error_invalid_age_display() {
        let err = VitalError::InvalidAge { age: -4, min: 0, max: 130 };
        let msg = err.to_string();
        assert!(msg.contains("-4"));
        assert!(msg.contains("[0, 130]"));
    }

    #[test]
    fn error_invalid_vital_sign_display() {
        let err = VitalError::InvalidVitalSign {
            sign: "HR",
            value: 999.0,
            min: 0.0,
            max: 300.0,
        };
        assert_eq!(err.to_string(), "invalid HR value: 999, must be between 0 and 300");
    }

    #[test]
    fn error_dose_display() {
        let err = VitalError::UnknownDrug {
            code: "DRUG_X".to_string(),
        };
        assert!(err.to_string().contains("DRUG_X"));

        let err = VitalError::InvalidDoseInput {
            reason: "weight_kg must be positive".to_string(),
        };
        assert!(err.to_string().contains("weight_kg must be positive"));
    }

    #[test]
    fn error_config_error_display() {
        let err = VitalError::ConfigError {
            reason: "max age below min age".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("configuration error"));
        assert!(msg.contains("max age below min age"));
    }

    #[test]
    fn error_output_wraps_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: VitalError = io.into();
        assert!(err.to_string().contains("output write failed"));
        assert!(err.to_string().contains("pipe closed"));
    }
}

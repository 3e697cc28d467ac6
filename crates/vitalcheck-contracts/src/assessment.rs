//! Classification results produced by the validator, classifier, and
//! intake workflow.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Ordinal blood-pressure risk classification.
///
/// The discriminants are the integer scores reported to callers, and the
/// derived ordering follows them (`Normal < Medium < High`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RiskTier {
    Normal = 0,
    Medium = 1,
    High = 2,
}

impl RiskTier {
    /// The integer score for this tier: 0, 1 or 2.
    pub fn score(self) -> i32 {
        self as i32
    }

    pub fn label(self) -> &'static str {
        match self {
            RiskTier::Normal => "normal",
            RiskTier::Medium => "medium risk",
            RiskTier::High => "high risk",
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Whether a (valid) patient is a minor or an adult.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AgeBracket {
    Minor,
    Adult,
}

/// Outcome of the scoring intake path.
///
/// `InvalidAge` is an expected result, not an error. `score()` maps it to the
/// `-1` sentinel used on the integer call boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "kebab-case")]
pub enum IntakeOutcome {
    /// The patient was rejected before any classification ran.
    InvalidAge { age: i32 },

    /// The blood-pressure reading was classified.
    Assessed { tier: RiskTier },
}

impl IntakeOutcome {
    /// Score sentinel for a rejected patient.
    pub const INVALID_SCORE: i32 = -1;

    /// The integer result: the tier score, or `-1` for an invalid age.
    pub fn score(&self) -> i32 {
        match self {
            IntakeOutcome::InvalidAge { .. } => Self::INVALID_SCORE,
            IntakeOutcome::Assessed { tier } => tier.score(),
        }
    }

    pub fn tier(&self) -> Option<RiskTier> {
        match self {
            IntakeOutcome::InvalidAge { .. } => None,
            IntakeOutcome::Assessed { tier } => Some(*tier),
        }
    }
}

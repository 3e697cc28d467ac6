//! The intake workflow: validate a patient's age, then classify.
//!
//! Two paths share the same age gate:
//!
//!   process              → age gate → "Processed" entry → minor/adult line
//!   process_with_vitals  → age gate → blood-pressure tier → optional score line
//!
//! A patient outside the valid age range is never classified. The rejection
//! is logged once and the workflow returns early; it is not an error.

use std::io::Write;

use tracing::{info, warn};

use vitalcheck_contracts::{
    assessment::{AgeBracket, IntakeOutcome},
    error::VitalResult,
    patient::Patient,
};

use crate::{assessor::HealthAssessor, traits::LogSink};

/// Sequences the validator and classifier over one patient at a time.
/// Vital-signs analysis lives on the same workflow (see `vitals`).
///
/// Result lines are written to `out` (stdout in the CLI); log entries go to
/// the owned `LogSink`.
pub struct IntakeWorkflow<L, W> {
    pub(crate) assessor: HealthAssessor,
    pub(crate) log: L,
    pub(crate) out: W,
}

impl<L: LogSink, W: Write> IntakeWorkflow<L, W> {
    pub fn new(assessor: HealthAssessor, log: L, out: W) -> Self {
        Self { assessor, log, out }
    }

    pub fn log(&self) -> &L {
        &self.log
    }

    /// Give back the sink and writer, e.g. to inspect captured output.
    pub fn into_parts(self) -> (L, W) {
        (self.log, self.out)
    }

    /// Classification path: report whether the patient is a minor or an adult.
    ///
    /// Returns `None` when the age is invalid. Exactly one log entry is
    /// appended on either branch, and no score is ever printed.
    ///
    /// # Errors
    ///
    /// Only `VitalError::Output` when a result line cannot be written.
    pub fn process(&mut self, patient: &Patient) -> VitalResult<Option<AgeBracket>> {
        if !self.assessor.is_valid_age(patient.age) {
            warn!(name = %patient.name, age = patient.age, "rejecting patient with invalid age");
            self.log.log(format!("Invalid patient: {}", patient.name));
            writeln!(self.out, "Invalid age!")?;
            return Ok(None);
        }

        // The entry is recorded before the line is written so a failed write
        // never loses it.
        let bracket = self.assessor.age_bracket(patient.age);
        self.log.log(format!("Processed patient {}", patient.name));
        info!(name = %patient.name, ?bracket, "patient processed");

        match bracket {
            AgeBracket::Minor => writeln!(self.out, "Patient is a minor.")?,
            AgeBracket::Adult => writeln!(self.out, "Patient is an adult.")?,
        }

        Ok(Some(bracket))
    }

    /// Scoring path: classify a blood-pressure reading for a valid patient.
    ///
    /// An invalid age logs one entry and yields `IntakeOutcome::InvalidAge`
    /// (score `-1`) without printing anything. A valid age logs nothing and
    /// prints `Patient <name>: score=<n>` only when `print_result` is set.
    ///
    /// # Errors
    ///
    /// Only `VitalError::Output` when the score line cannot be written.
    pub fn process_with_vitals(
        &mut self,
        patient: &Patient,
        systolic: i32,
        diastolic: i32,
        print_result: bool,
    ) -> VitalResult<IntakeOutcome> {
        if !self.assessor.is_valid_age(patient.age) {
            warn!(name = %patient.name, age = patient.age, "rejecting patient with invalid age");
            self.log.log(format!("Invalid patient age: {}", patient.age));
            return Ok(IntakeOutcome::InvalidAge { age: patient.age });
        }

        let tier = self.assessor.assess_blood_pressure(systolic, diastolic);

        if print_result {
            writeln!(self.out, "Patient {}: score={}", patient.name, tier.score())?;
        }

        info!(name = %patient.name, systolic, diastolic, score = tier.score(), "patient assessed");

        Ok(IntakeOutcome::Assessed { tier })
    }
}

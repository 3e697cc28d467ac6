//! Vital-signs analysis on the intake workflow.
//!
//!   reading → range check → normalize → status (or override) → log → display
//!
//! Unlike an out-of-range age, an impossible reading is an error: nothing is
//! logged or printed for it.

use std::io::Write;

use tracing::{info, warn};

use vitalcheck_contracts::{
    error::VitalResult,
    vitals::{VitalReading, VitalStatus, VitalsReport},
};

use crate::{intake::IntakeWorkflow, traits::LogSink};

/// Switches for one `analyze_vitals` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisOptions {
    /// Append a `HR=…, STATUS=…` entry to the log.
    pub log: bool,
    /// Print the reading and its status.
    pub verbose: bool,
    /// Mark the status message with ` (DBG)`.
    pub debug: bool,
    /// Use this status instead of the computed one.
    pub override_status: Option<VitalStatus>,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            log: true,
            verbose: false,
            debug: false,
            override_status: None,
        }
    }
}

impl<L: LogSink, W: Write> IntakeWorkflow<L, W> {
    /// Normalize a heart-rate/SpO2 reading and assign it a status.
    ///
    /// # Errors
    ///
    /// `VitalError::InvalidVitalSign` for a reading outside the accepted
    /// range, `VitalError::Output` when a verbose line cannot be written.
    pub fn analyze_vitals(
        &mut self,
        reading: &VitalReading,
        options: &AnalysisOptions,
    ) -> VitalResult<VitalsReport> {
        if let Err(e) = self.assessor.check_vital_reading(reading) {
            warn!(error = %e, "rejecting vital-sign reading");
            return Err(e);
        }

        let normalized_hr = self.assessor.normalize_hr(reading.heart_rate);
        let normalized_spo2 = self.assessor.normalize_spo2(reading.spo2);

        let status = match options.override_status {
            Some(status) => status,
            None => self.assessor.vital_status(reading),
        };

        let mut message = format!("Last status: {}", status);
        if options.debug {
            message.push_str(" (DBG)");
        }

        if options.log {
            self.log.log(format!(
                "HR={}, SpO2={}, NormHR={:.2}, NormSpO2={:.2}, STATUS={}",
                reading.heart_rate, reading.spo2, normalized_hr, normalized_spo2, status
            ));
        }

        info!(
            heart_rate = reading.heart_rate,
            spo2 = reading.spo2,
            status = %status,
            overridden = options.override_status.is_some(),
            "vital signs analyzed"
        );

        if options.verbose {
            writeln!(
                self.out,
                "Analyzing vital data: HR={} SpO2={}",
                reading.heart_rate, reading.spo2
            )?;
            writeln!(self.out, "Status is: {}", status)?;
        }

        Ok(VitalsReport {
            reading: *reading,
            normalized_hr,
            normalized_spo2,
            status,
            overridden: options.override_status.is_some(),
            message,
        })
    }
}

#[cfg(test)]
mod tests {
    use vitalcheck_contracts::{
        error::VitalError,
        vitals::{VitalReading, VitalStatus},
    };

    use super::AnalysisOptions;
    use crate::{assessor::HealthAssessor, intake::IntakeWorkflow, traits::LogSink};

    #[derive(Default)]
    struct MockLog {
        entries: Vec<String>,
    }

    impl LogSink for MockLog {
        fn log(&mut self, message: String) {
            self.entries.push(message);
        }

        fn entries(&self) -> &[String] {
            &self.entries
        }
    }

    fn workflow() -> IntakeWorkflow<MockLog, Vec<u8>> {
        IntakeWorkflow::new(HealthAssessor::default(), MockLog::default(), Vec::new())
    }

    fn reading(heart_rate: f64, spo2: f64) -> VitalReading {
        VitalReading { heart_rate, spo2 }
    }

    #[test]
    fn analysis_logs_by_default_and_prints_nothing() {
        let mut wf = workflow();
        let report = wf
            .analyze_vitals(&reading(110.0, 95.0), &AnalysisOptions::default())
            .unwrap();

        assert_eq!(report.status, VitalStatus::Ok);
        assert_eq!(report.message, "Last status: OK");
        assert!(!report.overridden);

        let (log, out) = wf.into_parts();
        assert_eq!(
            log.entries,
            vec!["HR=110, SpO2=95, NormHR=0.50, NormSpO2=0.95, STATUS=OK".to_string()]
        );
        assert!(out.is_empty());
    }

    #[test]
    fn verbose_debug_analysis_prints_status() {
        let mut wf = workflow();
        let options = AnalysisOptions {
            log: false,
            verbose: true,
            debug: true,
            override_status: None,
        };
        let report = wf.analyze_vitals(&reading(150.0, 85.0), &options).unwrap();
        assert_eq!(report.status, VitalStatus::Severe);
        assert_eq!(report.message, "Last status: SEVERE? (DBG)");

        let (log, out) = wf.into_parts();
        assert!(log.entries.is_empty());
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Analyzing vital data: HR=150 SpO2=85\nStatus is: SEVERE?\n"
        );
    }

    #[test]
    fn override_replaces_computed_status() {
        let mut wf = workflow();
        let options = AnalysisOptions {
            override_status: Some(VitalStatus::Critical),
            ..AnalysisOptions::default()
        };
        let report = wf.analyze_vitals(&reading(60.0, 99.0), &options).unwrap();
        assert_eq!(report.status, VitalStatus::Critical);
        assert!(report.overridden);
        assert!(wf.log().entries()[0].ends_with("STATUS=CRITICAL"));
    }

    #[test]
    fn impossible_readings_are_errors_with_no_entry() {
        let mut wf = workflow();
        let readings = [
            reading(999.0, 95.0),
            reading(-1.0, 95.0),
            reading(80.0, -3.0),
            reading(80.0, 101.0),
        ];
        for r in readings {
            match wf.analyze_vitals(&r, &AnalysisOptions::default()) {
                Err(VitalError::InvalidVitalSign { .. }) => {}
                other => panic!("expected InvalidVitalSign for {:?}, got {:?}", r, other),
            }
        }
        assert!(wf.log().entries().is_empty());
    }

    #[test]
    fn heart_rate_checked_before_spo2() {
        let mut wf = workflow();
        match wf.analyze_vitals(&reading(999.0, -3.0), &AnalysisOptions::default()) {
            Err(VitalError::InvalidVitalSign { sign, .. }) => assert_eq!(sign, "HR"),
            other => panic!("expected InvalidVitalSign, got {:?}", other),
        }
    }
}

//! vitalcheck: patient intake from the command line.
//!
//! Runs one patient through an intake path, analyzes a vital-signs reading,
//! or calculates a weight-based dose, and prints the result lines.
//!
//! Usage:
//!   vitalcheck intake --name Ada --age 36
//!   vitalcheck assess --name Ada --age 36 --systolic 152 --diastolic 90 --print
//!   vitalcheck vitals --heart-rate 150 --spo2 85 --verbose
//!   vitalcheck dose --weight 20 --age 8 --drug DRUG_C
//!   vitalcheck --limits limits.toml --show-log intake --name Bo --age 12

use std::{
    io::{self, Write},
    path::PathBuf,
};

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use vitalcheck_contracts::{
    error::VitalResult,
    limits::HealthLimits,
    patient::Patient,
    vitals::{VitalReading, VitalStatus},
};
use vitalcheck_core::{AnalysisOptions, HealthAssessor, IntakeWorkflow};
use vitalcheck_log::InMemoryLog;

// ── CLI definition ────────────────────────────────────────────────────────────

/// Validate a patient's age and classify blood-pressure risk.
#[derive(Debug, Parser)]
#[command(
    name = "vitalcheck",
    about = "Patient intake: age validation and blood-pressure risk scoring",
    long_about = "Validates a patient's age against the configured range, then reports\n\
                  the age bracket or the blood-pressure risk score (0 normal, 1 medium,\n\
                  2 high, -1 for an invalid age)."
)]
struct Cli {
    /// TOML file overriding the default age and blood-pressure limits.
    #[arg(long, global = true, value_name = "FILE")]
    limits: Option<PathBuf>,

    /// Print the accumulated log entries after the run.
    #[arg(long, global = true)]
    show_log: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Validate the age and report whether the patient is a minor or an adult.
    Intake {
        #[command(flatten)]
        patient: PatientArgs,
    },
    /// Validate the age and score a blood-pressure reading.
    Assess {
        #[command(flatten)]
        patient: PatientArgs,
        /// Systolic pressure in mmHg.
        #[arg(long, allow_negative_numbers = true)]
        systolic: i32,
        /// Diastolic pressure in mmHg.
        #[arg(long, allow_negative_numbers = true)]
        diastolic: i32,
        /// Also print the "Patient <name>: score=<n>" line.
        #[arg(long)]
        print: bool,
    },
    /// Normalize a heart-rate/SpO2 reading and report its status.
    Vitals {
        /// Heart rate in beats per minute.
        #[arg(long, allow_negative_numbers = true)]
        heart_rate: f64,
        /// Blood oxygen saturation in percent.
        #[arg(long, allow_negative_numbers = true)]
        spo2: f64,
        /// Report this status instead of the computed one (OK, WARNING, SEVERE, CRITICAL).
        #[arg(long = "override", value_name = "STATUS")]
        override_status: Option<VitalStatus>,
        /// Print the reading and its status.
        #[arg(long)]
        verbose: bool,
        /// Mark the status message as a debug run.
        #[arg(long)]
        debug: bool,
        /// Do not record the reading in the log.
        #[arg(long)]
        no_log: bool,
    },
    /// Calculate a weight-based medication dose in mg.
    Dose {
        /// Body mass in kilograms.
        #[arg(long, allow_negative_numbers = true)]
        weight: f64,
        /// Age in years.
        #[arg(long, allow_negative_numbers = true)]
        age: i32,
        /// Drug code from the dose table, e.g. DRUG_A.
        #[arg(long)]
        drug: String,
    },
}

#[derive(Debug, clap::Args)]
struct PatientArgs {
    /// Patient name.
    #[arg(long)]
    name: String,
    /// Age in years.
    #[arg(long, allow_negative_numbers = true)]
    age: i32,
    /// Existing condition, recorded but not used in any decision.
    #[arg(long, default_value = "")]
    condition: String,
}

impl From<PatientArgs> for Patient {
    fn from(args: PatientArgs) -> Self {
        Patient::new(args.name, args.age, args.condition)
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Initialize structured logging.  Set RUST_LOG=debug for verbose output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .compact()
        .init();

    let cli = Cli::parse();

    let stdout = io::stdout();
    if let Err(e) = run(cli, stdout.lock()) {
        eprintln!("vitalcheck error: {}", e);
        std::process::exit(1);
    }
}

// ── Dispatch ──────────────────────────────────────────────────────────────────

fn run<W: Write>(cli: Cli, out: W) -> VitalResult<()> {
    let limits = match &cli.limits {
        Some(path) => vitalcheck_limits::from_file(path)?,
        None => HealthLimits::default(),
    };

    let assessor = HealthAssessor::new(limits);
    let mut intake = IntakeWorkflow::new(assessor.clone(), InMemoryLog::new(), out);

    let result_line = match cli.command {
        Command::Intake { patient } => {
            intake.process(&Patient::from(patient))?;
            None
        }
        Command::Assess {
            patient,
            systolic,
            diastolic,
            print,
        } => {
            let patient = Patient::from(patient);
            let outcome = intake.process_with_vitals(&patient, systolic, diastolic, print)?;
            let label = outcome.tier().map_or("invalid age", |tier| tier.label());
            Some(format!("result: {} ({})", outcome.score(), label))
        }
        Command::Vitals {
            heart_rate,
            spo2,
            override_status,
            verbose,
            debug,
            no_log,
        } => {
            let options = AnalysisOptions {
                log: !no_log,
                verbose,
                debug,
                override_status,
            };
            let report = intake.analyze_vitals(&VitalReading { heart_rate, spo2 }, &options)?;
            Some(report.message)
        }
        Command::Dose { weight, age, drug } => {
            let dose_mg = assessor.medication_dose(weight, age, &drug)?;
            Some(format!("dose: {} mg", dose_mg))
        }
    };

    let (log, mut out) = intake.into_parts();
    if let Some(line) = result_line {
        writeln!(out, "{}", line)?;
    }
    if cli.show_log {
        let snapshot = log.export();
        writeln!(out, "log ({} entries):", snapshot.entry_count)?;
        for entry in &snapshot.entries {
            writeln!(out, "  {}", entry)?;
        }
    }
    out.flush()?;
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

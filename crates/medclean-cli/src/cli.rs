//! CLI argument definitions for the record cleaner.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "medclean",
    version,
    about = "Healthcare record cleaner - normalize and impute tabular clinical data",
    long_about = "Clean tabular healthcare records in one batch pass.\n\n\
                  Reconciles age and date of birth, fills doctor/diagnosis codes from\n\
                  a clinical crosswalk, median-imputes invalid expenses, expands\n\
                  clinical abbreviations, and reports expansion fidelity."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow row-level record values in logs.
    ///
    /// The input is patient data; by default any cell value that would
    /// appear in a log line is redacted.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Clean a CSV of healthcare records and write the cleaned dataset
    /// plus a summary report.
    Clean(CleanArgs),

    /// Print the built-in abbreviation table and doctor/diagnosis crosswalk.
    Lexicon,
}

#[derive(Parser)]
pub struct CleanArgs {
    /// Path to the input CSV file.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output directory for cleaned.csv and summary.json
    /// (default: <INPUT's directory>/output).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Anchor year for age derivation (default: the current year).
    #[arg(long = "year", value_name = "YYYY")]
    pub year: Option<i32>,

    /// Substitute lexicon JSON file (ordered abbreviation and crosswalk
    /// entries) instead of the built-in clinical tables.
    #[arg(long = "lexicon", value_name = "FILE")]
    pub lexicon: Option<PathBuf>,

    /// How many top symptom terms to show in the summary.
    #[arg(long = "top-symptoms", value_name = "N", default_value_t = 10)]
    pub top_symptoms: usize,

    /// Run the pipeline and report without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

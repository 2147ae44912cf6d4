use std::path::PathBuf;

use medclean_model::SummaryReport;

/// Result of one `clean` invocation, consumed by the summary printer.
#[derive(Debug)]
pub struct CleanResult {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    /// Written cleaned dataset, absent under `--dry-run`.
    pub cleaned_path: Option<PathBuf>,
    /// Written summary JSON, absent under `--dry-run`.
    pub report_path: Option<PathBuf>,
    pub report: SummaryReport,
    pub output_records: usize,
    pub top_symptoms: Vec<(String, usize)>,
}

pub mod context;
pub mod crosswalk;
pub mod dedupe;
pub mod demographics;
pub mod expense;
pub mod fidelity;
pub mod normalize;
pub mod pipeline;
pub mod report;
pub mod terms;

pub use context::CleanContext;
pub use crosswalk::resolve_crosswalk;
pub use dedupe::dedupe_records;
pub use demographics::reconcile_demographics;
pub use expense::sanitize_expenses;
pub use fidelity::fidelity_score;
pub use normalize::ExpansionEngine;
pub use pipeline::{PipelineOutcome, run_pipeline};
pub use report::{RunMetrics, build_summary_report};
pub use terms::symptom_term_frequencies;

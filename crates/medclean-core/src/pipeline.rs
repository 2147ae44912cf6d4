//! Record cleaning pipeline with explicit stages.
//!
//! The pipeline follows these stages in order:
//! 1. **Dedupe**: Remove exact-duplicate rows at ingestion
//! 2. **Demographics**: Reconcile age and date of birth, flag anomalies
//! 3. **Crosswalk**: Fill doctor/diagnosis code from the lexicon
//! 4. **Expense**: Median-impute absent and negative amounts
//! 5. **Normalize**: Expand clinical abbreviations, score fidelity
//! 6. **Dedupe**: Second pass, since expansion can collide rows
//! 7. **Aggregate**: Assemble the ordered summary report
//!
//! Each stage is a pure function over the record set; the orchestrator
//! owns ordering, timing, and metric collection.

use std::time::Instant;

use anyhow::Result;
use tracing::{debug, info, info_span};

use medclean_model::SummaryReport;
use medclean_model::record::PatientRecord;

use crate::context::CleanContext;
use crate::crosswalk::resolve_crosswalk;
use crate::dedupe::dedupe_records;
use crate::demographics::reconcile_demographics;
use crate::expense::sanitize_expenses;
use crate::fidelity::fidelity_score;
use crate::normalize::ExpansionEngine;
use crate::report::{RunMetrics, build_summary_report};

/// Everything a run produces: the cleaned records, the raw stage metrics,
/// and the assembled summary report.
#[derive(Debug)]
pub struct PipelineOutcome {
    pub records: Vec<PatientRecord>,
    pub metrics: RunMetrics,
    pub report: SummaryReport,
}

fn count_missing<F>(records: &[PatientRecord], field: F) -> u64
where
    F: Fn(&PatientRecord) -> bool,
{
    records.iter().filter(|record| field(record)).count() as u64
}

/// Run every cleaning stage over `records`.
///
/// Single-threaded, one pass; the record set moves through the stages by
/// value. Per-record problems (unparseable dates, unknown lexicon keys)
/// are recovered inside the stages; the only fatal errors are upstream of
/// this function, at the schema boundary.
pub fn run_pipeline(records: Vec<PatientRecord>, ctx: &CleanContext<'_>) -> Result<PipelineOutcome> {
    let run_span = info_span!("clean_run", current_year = ctx.current_year);
    let _run_guard = run_span.enter();
    let run_start = Instant::now();

    let mut metrics = RunMetrics {
        total_records: records.len() as u64,
        ..RunMetrics::default()
    };

    // =========================================================================
    // Stage 1: Dedupe at ingestion
    // =========================================================================
    let (records, removed) = info_span!("dedupe_ingest").in_scope(|| {
        let start = Instant::now();
        let (records, removed) = dedupe_records(records);
        debug!(
            record_count = records.len(),
            removed,
            duration_ms = start.elapsed().as_millis(),
            "ingest dedupe complete"
        );
        (records, removed)
    });
    metrics.duplicates_removed += removed as u64;

    // Missing-value metrics describe the record set the run repairs.
    metrics.missing_diagnosis_code = count_missing(&records, |r| r.diagnosis_code.is_none());
    metrics.missing_doctor = count_missing(&records, |r| r.doctor.is_none());
    metrics.missing_dob = count_missing(&records, |r| r.date_of_birth.is_none());
    metrics.missing_age = count_missing(&records, |r| r.age.is_none());

    // =========================================================================
    // Stage 2: Demographic reconciliation
    // =========================================================================
    let records = info_span!("demographics").in_scope(|| {
        let start = Instant::now();
        let records = reconcile_demographics(records, ctx.current_year);
        debug!(
            record_count = records.len(),
            duration_ms = start.elapsed().as_millis(),
            "demographics complete"
        );
        records
    });
    metrics.age_anomalies = count_missing(&records, |r| r.age_anomaly);

    // =========================================================================
    // Stage 3: Crosswalk resolution
    // =========================================================================
    let records = info_span!("crosswalk").in_scope(|| {
        let start = Instant::now();
        let records = resolve_crosswalk(records, ctx.lexicon);
        debug!(
            record_count = records.len(),
            duration_ms = start.elapsed().as_millis(),
            "crosswalk complete"
        );
        records
    });

    // =========================================================================
    // Stage 4: Expense sanitization
    // =========================================================================
    let records = info_span!("expense").in_scope(|| {
        let start = Instant::now();
        let records = sanitize_expenses(records);
        debug!(
            record_count = records.len(),
            duration_ms = start.elapsed().as_millis(),
            "expense sanitization complete"
        );
        records
    });

    // =========================================================================
    // Stage 5: Abbreviation expansion and fidelity scoring
    // =========================================================================
    let engine = ExpansionEngine::new(ctx.lexicon)?;
    let records = info_span!("normalize").in_scope(|| {
        let start = Instant::now();
        let records: Vec<PatientRecord> = records
            .into_iter()
            .map(|mut record| {
                record.symptoms = engine.expand_field(record.symptoms.as_deref());
                record.medical_history = engine.expand_field(record.medical_history.as_deref());
                match record.clinical_notes.take() {
                    Some(original) => {
                        let expanded = engine.expand(&original);
                        record.fidelity_score = Some(fidelity_score(&original, &expanded));
                        record.clinical_notes = Some(expanded);
                    }
                    // Nothing changed, so the expansion is perfectly faithful.
                    None => record.fidelity_score = Some(1.0),
                }
                record
            })
            .collect();
        debug!(
            record_count = records.len(),
            duration_ms = start.elapsed().as_millis(),
            "normalization complete"
        );
        records
    });

    let scored: Vec<f64> = records.iter().filter_map(|r| r.fidelity_score).collect();
    metrics.mean_fidelity = if scored.is_empty() {
        1.0
    } else {
        scored.iter().sum::<f64>() / scored.len() as f64
    };

    // =========================================================================
    // Stage 6: Dedupe after normalization
    // =========================================================================
    let (records, removed) = info_span!("dedupe_final").in_scope(|| {
        let start = Instant::now();
        let (records, removed) = dedupe_records(records);
        debug!(
            record_count = records.len(),
            removed,
            duration_ms = start.elapsed().as_millis(),
            "final dedupe complete"
        );
        (records, removed)
    });
    metrics.duplicates_removed += removed as u64;

    // =========================================================================
    // Stage 7: Aggregate
    // =========================================================================
    let report = build_summary_report(&metrics);

    info!(
        total_records = metrics.total_records,
        output_records = records.len(),
        duplicates_removed = metrics.duplicates_removed,
        age_anomalies = metrics.age_anomalies,
        mean_fidelity = metrics.mean_fidelity,
        duration_ms = run_start.elapsed().as_millis(),
        "clean run complete"
    );

    Ok(PipelineOutcome {
        records,
        metrics,
        report,
    })
}

//! Exact-duplicate removal.

use std::collections::BTreeSet;

use medclean_model::record::PatientRecord;

/// Remove exact-duplicate records (full-row equality over the persisted
/// fields), keeping the first occurrence and the relative order of the
/// survivors. Returns the surviving records and the number removed.
///
/// The pipeline runs this twice: once at ingestion and once after text
/// normalization, since expansion can collide previously-distinct rows.
pub fn dedupe_records(records: Vec<PatientRecord>) -> (Vec<PatientRecord>, usize) {
    let mut seen = BTreeSet::new();
    let before = records.len();
    let kept: Vec<PatientRecord> = records
        .into_iter()
        .filter(|record| seen.insert(record.dedupe_key()))
        .collect();
    let removed = before - kept.len();
    (kept, removed)
}

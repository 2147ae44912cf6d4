//! Expense sanitization by run-wide median imputation.

use tracing::warn;

use medclean_model::record::PatientRecord;

fn is_valid(expense: Option<f64>) -> bool {
    matches!(expense, Some(value) if value >= 0.0)
}

/// Median of the valid values, midpoint-averaged for even counts.
fn median(mut values: Vec<f64>) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    values.sort_by(f64::total_cmp);
    let mid = values.len() / 2;
    if values.len() % 2 == 1 {
        Some(values[mid])
    } else {
        Some((values[mid - 1] + values[mid]) / 2.0)
    }
}

/// Replace every invalid expense (absent or negative) with the median of
/// the currently-valid values, computed once over the whole run.
///
/// Degenerate input, where no valid expense exists, leaves the invalid
/// values absent rather than fabricating a number.
pub fn sanitize_expenses(records: Vec<PatientRecord>) -> Vec<PatientRecord> {
    let valid: Vec<f64> = records
        .iter()
        .filter_map(|record| record.expense)
        .filter(|value| *value >= 0.0)
        .collect();
    let Some(fill) = median(valid) else {
        if !records.is_empty() {
            warn!("no valid expense in run, invalid values left absent");
        }
        return records
            .into_iter()
            .map(|mut record| {
                if !is_valid(record.expense) {
                    record.expense = None;
                }
                record
            })
            .collect();
    };
    records
        .into_iter()
        .map(|mut record| {
            if !is_valid(record.expense) {
                record.expense = Some(fill);
            }
            record
        })
        .collect()
}

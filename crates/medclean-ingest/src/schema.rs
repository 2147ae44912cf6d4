//! Input schema validation.
//!
//! All eight canonical columns must be present before any cleaning stage
//! runs; a partial schema aborts the whole run.

use medclean_model::COLUMN_NAMES;

use crate::error::{IngestError, Result};
use crate::table::RecordTable;

/// Resolved positions of the canonical columns within an input table.
#[derive(Debug, Clone, Copy)]
pub struct ColumnIndex {
    pub diagnosis_code: usize,
    pub doctor: usize,
    pub date_of_birth: usize,
    pub age: usize,
    pub expense: usize,
    pub symptoms: usize,
    pub medical_history: usize,
    pub clinical_notes: usize,
}

/// Validate that every required column is present (case-insensitive header
/// match) and resolve their positions.
pub fn validate_schema(table: &RecordTable) -> Result<ColumnIndex> {
    if table.headers.is_empty() {
        return Err(IngestError::EmptyTable);
    }
    let position = |name: &str| -> Result<usize> {
        table
            .headers
            .iter()
            .position(|header| header.eq_ignore_ascii_case(name))
            .ok_or_else(|| IngestError::MissingColumn(name.to_string()))
    };
    Ok(ColumnIndex {
        diagnosis_code: position(COLUMN_NAMES[0])?,
        doctor: position(COLUMN_NAMES[1])?,
        date_of_birth: position(COLUMN_NAMES[2])?,
        age: position(COLUMN_NAMES[3])?,
        expense: position(COLUMN_NAMES[4])?,
        symptoms: position(COLUMN_NAMES[5])?,
        medical_history: position(COLUMN_NAMES[6])?,
        clinical_notes: position(COLUMN_NAMES[7])?,
    })
}

//! Conversion between raw table rows and typed patient records.
//!
//! Parse failures on numeric cells are recovered locally: the field
//! becomes absent for that record and the record continues through the
//! pipeline. The raw cell is only logged at debug when row-level logging
//! is appropriate for the deployment.

use medclean_model::field::{self, FieldError};
use medclean_model::record::PatientRecord;
use medclean_model::redact::redact_value;
use tracing::debug;

use crate::schema::ColumnIndex;
use crate::table::RecordTable;

fn text_field(row: &[String], idx: usize) -> Option<String> {
    let value = row.get(idx).map(String::as_str).unwrap_or("").trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

fn age_field(row: &[String], idx: usize, row_number: usize) -> Option<i64> {
    let raw = row.get(idx).map(String::as_str).unwrap_or("");
    match field::parse_age(raw) {
        Ok(value) => Some(value),
        Err(FieldError::Empty) => None,
        Err(_) => {
            debug!(
                row = row_number,
                column = "Age",
                value = redact_value(raw),
                "unparseable cell treated as absent"
            );
            None
        }
    }
}

fn expense_field(row: &[String], idx: usize, row_number: usize) -> Option<f64> {
    let raw = row.get(idx).map(String::as_str).unwrap_or("");
    match field::parse_expense(raw) {
        Ok(value) => Some(value),
        Err(FieldError::Empty) => None,
        Err(_) => {
            debug!(
                row = row_number,
                column = "Expense",
                value = redact_value(raw),
                "unparseable cell treated as absent"
            );
            None
        }
    }
}

/// Convert validated table rows into patient records.
pub fn records_from_table(table: &RecordTable, index: ColumnIndex) -> Vec<PatientRecord> {
    table
        .rows
        .iter()
        .enumerate()
        .map(|(row_number, row)| PatientRecord {
            diagnosis_code: text_field(row, index.diagnosis_code),
            doctor: text_field(row, index.doctor),
            date_of_birth: text_field(row, index.date_of_birth),
            age: age_field(row, index.age, row_number),
            expense: expense_field(row, index.expense, row_number),
            symptoms: text_field(row, index.symptoms),
            medical_history: text_field(row, index.medical_history),
            clinical_notes: text_field(row, index.clinical_notes),
            age_anomaly: false,
            fidelity_score: None,
        })
        .collect()
}

/// Render cleaned records as output rows in canonical column order.
/// Derived fields are stripped here.
pub fn rows_from_records(records: &[PatientRecord]) -> Vec<[String; 8]> {
    records
        .iter()
        .map(PatientRecord::persisted_values)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::validate_schema;
    use medclean_model::COLUMN_NAMES;

    fn table(rows: Vec<Vec<&str>>) -> RecordTable {
        RecordTable {
            headers: COLUMN_NAMES.iter().map(ToString::to_string).collect(),
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(ToString::to_string).collect())
                .collect(),
        }
    }

    #[test]
    fn typed_fields_parse_and_empty_cells_become_absent() {
        let table = table(vec![vec![
            "E11",
            "Dr. John Smith (Endocrinologist)",
            "1980-02-03",
            "44",
            "120.5",
            "",
            "DM",
            "Pt has DM",
        ]]);
        let index = validate_schema(&table).unwrap();
        let records = records_from_table(&table, index);
        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.age, Some(44));
        assert_eq!(record.expense, Some(120.5));
        assert_eq!(record.symptoms, None);
        assert_eq!(record.clinical_notes.as_deref(), Some("Pt has DM"));
    }

    #[test]
    fn unparseable_numerics_are_recovered_as_absent() {
        let table = table(vec![vec![
            "", "", "not-a-date", "unknown", "-abc", "SOB", "", "",
        ]]);
        let index = validate_schema(&table).unwrap();
        let records = records_from_table(&table, index);
        let record = &records[0];
        assert_eq!(record.age, None);
        assert_eq!(record.expense, None);
        // Date cells are carried as text; parsing happens in the
        // demographics stage.
        assert_eq!(record.date_of_birth.as_deref(), Some("not-a-date"));
    }

    #[test]
    fn output_rows_follow_canonical_order() {
        let record = PatientRecord {
            diagnosis_code: Some("I10".to_string()),
            age: Some(54),
            expense: Some(500.0),
            ..PatientRecord::default()
        };
        let rows = rows_from_records(&[record]);
        assert_eq!(rows[0][0], "I10");
        assert_eq!(rows[0][3], "54");
        assert_eq!(rows[0][4], "500");
        assert_eq!(rows[0][7], "");
    }
}

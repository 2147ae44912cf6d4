//! The patient record row type and its canonical column set.

use serde::{Deserialize, Serialize};

/// Canonical column order for ingestion and export.
///
/// Every input table must carry all eight columns; the cleaned table is
/// written back in this exact order.
pub const COLUMN_NAMES: [&str; 8] = [
    "Diagnosis_Code",
    "Doctor",
    "Date_of_Birth",
    "Age",
    "Expense",
    "Symptoms",
    "Medical_History",
    "Clinical_Notes",
];

/// One row of the healthcare table, mutated in place as it moves through
/// the cleaning stages.
///
/// `age_anomaly` and `fidelity_score` are derived during the run for
/// reporting and are never part of the exported dataset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PatientRecord {
    pub diagnosis_code: Option<String>,
    pub doctor: Option<String>,
    /// Date of birth formatted `YYYY-MM-DD`.
    pub date_of_birth: Option<String>,
    /// Age in integer years.
    pub age: Option<i64>,
    /// Non-negative currency amount (post-sanitization).
    pub expense: Option<f64>,
    pub symptoms: Option<String>,
    pub medical_history: Option<String>,
    pub clinical_notes: Option<String>,
    /// True when the original age was missing or outside `[0, 110]`.
    #[serde(skip)]
    pub age_anomaly: bool,
    /// Expansion fidelity of `clinical_notes`, in `[0, 1]`.
    #[serde(skip)]
    pub fidelity_score: Option<f64>,
}

impl PatientRecord {
    /// Composite key over the persisted fields, used for exact-duplicate
    /// detection. Derived fields do not participate.
    pub fn dedupe_key(&self) -> String {
        let mut key = String::new();
        for (pos, value) in self.persisted_values().into_iter().enumerate() {
            if pos > 0 {
                key.push('|');
            }
            key.push_str(&value);
        }
        key
    }

    /// The persisted fields rendered as cells in canonical column order.
    /// Absent fields render as empty cells.
    pub fn persisted_values(&self) -> [String; 8] {
        [
            cell(self.diagnosis_code.as_deref()),
            cell(self.doctor.as_deref()),
            cell(self.date_of_birth.as_deref()),
            self.age.map(|v| v.to_string()).unwrap_or_default(),
            self.expense.map(format_amount).unwrap_or_default(),
            cell(self.symptoms.as_deref()),
            cell(self.medical_history.as_deref()),
            cell(self.clinical_notes.as_deref()),
        ]
    }
}

fn cell(value: Option<&str>) -> String {
    value.unwrap_or_default().to_string()
}

/// Render a currency amount without a trailing `.0` for whole values.
pub fn format_amount(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

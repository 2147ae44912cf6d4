//! Cleaned dataset export.

use std::path::Path;

use csv::Writer;
use medclean_model::record::PatientRecord;
use medclean_model::COLUMN_NAMES;

use crate::convert::rows_from_records;
use crate::error::Result;

/// Write cleaned records as CSV in canonical column order. Transient
/// fields (`age_anomaly`, fidelity score) are never written.
pub fn write_cleaned_csv(path: &Path, records: &[PatientRecord]) -> Result<()> {
    let mut writer = Writer::from_path(path)?;
    writer.write_record(COLUMN_NAMES)?;
    for row in rows_from_records(records) {
        writer.write_record(&row)?;
    }
    writer.flush()?;
    Ok(())
}

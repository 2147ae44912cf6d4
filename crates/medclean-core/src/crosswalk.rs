//! Doctor/diagnosis-code crosswalk resolution.

use medclean_model::Lexicon;
use medclean_model::record::PatientRecord;

/// Fill `diagnosis_code` from `doctor` and `doctor` from `diagnosis_code`
/// via the lexicon, only where the target field is absent.
///
/// Present values are never overwritten, even when they disagree with the
/// lexicon. Unknown keys and rows missing both fields are left untouched.
/// When a diagnosis code maps to several doctors, the fill resolves
/// last-write-wins over the lexicon's forward entries; callers must not
/// assume a specific doctor is recovered for an ambiguous code.
pub fn resolve_crosswalk(records: Vec<PatientRecord>, lexicon: &Lexicon) -> Vec<PatientRecord> {
    records
        .into_iter()
        .map(|mut record| {
            if record.diagnosis_code.is_none()
                && let Some(doctor) = record.doctor.as_deref()
                && let Some(code) = lexicon.code_for_doctor(doctor)
            {
                record.diagnosis_code = Some(code.to_string());
            }
            if record.doctor.is_none()
                && let Some(code) = record.diagnosis_code.as_deref()
                && let Some(doctor) = lexicon.doctor_for_code(code)
            {
                record.doctor = Some(doctor.to_string());
            }
            record
        })
        .collect()
}

//! Demographic reconciliation: make `age` and `date_of_birth` mutually
//! consistent and flag out-of-domain ages.

use chrono::{Datelike, NaiveDate};
use tracing::debug;

use medclean_model::record::PatientRecord;
use medclean_model::redact::redact_value;

/// Accepted age domain, inclusive on both ends for the anomaly predicate.
const AGE_MIN: i64 = 0;
const AGE_MAX: i64 = 110;

/// Parse a `YYYY-MM-DD` birth date. The `Result` is surfaced to the
/// caller; a malformed date is downgraded to "no derivable age" there,
/// never propagated past this stage.
pub fn parse_birth_date(raw: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
}

fn is_anomalous(age: Option<i64>) -> bool {
    match age {
        None => true,
        Some(value) => value < AGE_MIN || value > AGE_MAX,
    }
}

/// Reconcile demographics for every record:
///
/// 1. Derive an age from a parseable `date_of_birth`.
/// 2. Replace the stated age with the derived one when the stated age is
///    missing or outside `[0, 110]`. The derived value wins even when it
///    is itself out of range; there is no second validation pass.
/// 3. Synthesize `date_of_birth` as `{year - age}-01-01` for records
///    missing it whose age lies strictly inside `(0, 110)`. Day and month
///    default to January 1; the precision loss is intentional.
/// 4. Flag `age_anomaly` from the original, pre-correction age.
pub fn reconcile_demographics(
    records: Vec<PatientRecord>,
    current_year: i32,
) -> Vec<PatientRecord> {
    records
        .into_iter()
        .map(|mut record| {
            let original_age = record.age;
            record.age_anomaly = is_anomalous(original_age);

            let derived_age = record.date_of_birth.as_deref().and_then(|raw| {
                match parse_birth_date(raw) {
                    Ok(date) => Some(i64::from(current_year) - i64::from(date.year())),
                    Err(error) => {
                        debug!(
                            value = redact_value(raw),
                            %error,
                            "unparseable date of birth, no derived age"
                        );
                        None
                    }
                }
            });

            if is_anomalous(original_age) {
                record.age = derived_age;
            }

            if record.date_of_birth.is_none()
                && let Some(age) = record.age
                && age > AGE_MIN
                && age < AGE_MAX
            {
                record.date_of_birth =
                    Some(format!("{}-01-01", i64::from(current_year) - age));
            }

            record
        })
        .collect()
}

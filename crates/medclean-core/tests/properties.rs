//! Property tests for the numeric and scoring stages.

use medclean_core::{fidelity_score, sanitize_expenses};
use medclean_model::record::PatientRecord;
use proptest::prelude::*;

fn expense_column() -> impl Strategy<Value = Vec<Option<f64>>> {
    prop::collection::vec(
        prop_oneof![
            Just(None),
            (-1_000.0f64..1_000.0).prop_map(Some),
        ],
        0..32,
    )
}

proptest! {
    #[test]
    fn sanitized_expenses_are_never_negative(column in expense_column()) {
        let records: Vec<PatientRecord> = column
            .iter()
            .map(|expense| PatientRecord {
                expense: *expense,
                ..PatientRecord::default()
            })
            .collect();
        let had_valid = column.iter().any(|e| matches!(e, Some(v) if *v >= 0.0));
        let cleaned = sanitize_expenses(records);
        for record in &cleaned {
            match record.expense {
                Some(value) => prop_assert!(value >= 0.0),
                // only the degenerate no-valid-expense run may leave gaps
                None => prop_assert!(!had_valid),
            }
        }
    }

    #[test]
    fn sanitization_preserves_valid_values(column in expense_column()) {
        let records: Vec<PatientRecord> = column
            .iter()
            .map(|expense| PatientRecord {
                expense: *expense,
                ..PatientRecord::default()
            })
            .collect();
        let cleaned = sanitize_expenses(records);
        for (before, after) in column.iter().zip(&cleaned) {
            if let Some(value) = before
                && *value >= 0.0
            {
                prop_assert_eq!(after.expense, Some(*value));
            }
        }
    }

    #[test]
    fn fidelity_stays_in_unit_interval(
        reference in "[a-z]{1,8}( [a-z]{1,8}){0,11}",
        candidate in "[a-z]{1,8}( [a-z]{1,8}){0,11}",
    ) {
        let score = fidelity_score(&reference, &candidate);
        prop_assert!((0.0..=1.0).contains(&score), "score was {}", score);
    }

    #[test]
    fn fidelity_of_identical_text_is_one(text in "[a-z]{1,8}( [a-z]{1,8}){0,11}") {
        prop_assert_eq!(fidelity_score(&text, &text), 1.0);
    }
}

//! End-to-end tests for the cleaning pipeline.

use medclean_core::{CleanContext, run_pipeline};
use medclean_model::record::PatientRecord;
use medclean_model::report::{MetricValue, metrics};
use medclean_model::Lexicon;

fn record() -> PatientRecord {
    PatientRecord::default()
}

fn run(records: Vec<PatientRecord>, year: i32) -> medclean_core::PipelineOutcome {
    let lexicon = Lexicon::clinical();
    let ctx = CleanContext::new(&lexicon, year);
    run_pipeline(records, &ctx).unwrap()
}

#[test]
fn reference_scenario_cardiologist_record() {
    // Dr. Jane Doe, no code, no age, negative expense, year 2024.
    let subject = PatientRecord {
        doctor: Some("Dr. Jane Doe (Cardiologist)".to_string()),
        date_of_birth: Some("1970-06-01".to_string()),
        expense: Some(-5.0),
        ..record()
    };
    let filler_a = PatientRecord {
        expense: Some(100.0),
        age: Some(40),
        ..record()
    };
    let filler_b = PatientRecord {
        expense: Some(300.0),
        age: Some(50),
        ..record()
    };
    let outcome = run(vec![subject, filler_a, filler_b], 2024);

    let cleaned = &outcome.records[0];
    assert_eq!(cleaned.diagnosis_code.as_deref(), Some("I10"));
    assert_eq!(cleaned.age, Some(54));
    assert_eq!(cleaned.date_of_birth.as_deref(), Some("1970-06-01"));
    // run median of the valid expenses {100, 300}
    assert_eq!(cleaned.expense, Some(200.0));
}

#[test]
fn pipeline_is_idempotent_on_cleaned_output() {
    let records = vec![
        PatientRecord {
            doctor: Some("Dr. John Smith (Endocrinologist)".to_string()),
            date_of_birth: Some("1980-02-03".to_string()),
            expense: Some(120.0),
            symptoms: Some("SOB and CP".to_string()),
            medical_history: Some("Hx of DM".to_string()),
            clinical_notes: Some("Pt stable, Rx PRN".to_string()),
            ..record()
        },
        PatientRecord {
            diagnosis_code: Some("I10".to_string()),
            age: Some(70),
            expense: Some(-1.0),
            clinical_notes: Some("HBP follow-up".to_string()),
            ..record()
        },
    ];
    let first = run(records, 2024);
    let second = run(first.records.clone(), 2024);

    let strip = |records: &[PatientRecord]| -> Vec<[String; 8]> {
        records.iter().map(PatientRecord::persisted_values).collect()
    };
    assert_eq!(strip(&first.records), strip(&second.records));
    // nothing left to expand, so the second run reports perfect fidelity
    assert_eq!(
        second.report.get(metrics::AVERAGE_FIDELITY_SCORE),
        Some(MetricValue::Score(1.0))
    );
}

#[test]
fn duplicates_collapse_and_are_counted() {
    let row = PatientRecord {
        doctor: Some("Dr. Ava Wilson (Gastroenterologist)".to_string()),
        age: Some(33),
        expense: Some(90.0),
        ..record()
    };
    let outcome = run(vec![row.clone(), row.clone(), row], 2024);
    assert_eq!(outcome.records.len(), 1);
    assert_eq!(
        outcome.report.get(metrics::DUPLICATES_REMOVED),
        Some(MetricValue::Count(2))
    );
    assert_eq!(
        outcome.report.get(metrics::TOTAL_RECORDS),
        Some(MetricValue::Count(3))
    );
}

#[test]
fn normalization_can_create_second_pass_duplicates() {
    // Distinct at ingestion, identical after expansion.
    let short = PatientRecord {
        age: Some(41),
        expense: Some(10.0),
        clinical_notes: Some("Pt has HBP".to_string()),
        ..record()
    };
    let long = PatientRecord {
        age: Some(41),
        expense: Some(10.0),
        clinical_notes: Some("Patient has High Blood Pressure".to_string()),
        ..record()
    };
    let outcome = run(vec![short, long], 2024);
    assert_eq!(outcome.records.len(), 1);
    assert_eq!(
        outcome.report.get(metrics::DUPLICATES_REMOVED),
        Some(MetricValue::Count(1))
    );
}

#[test]
fn missing_counts_reflect_state_at_ingestion() {
    let records = vec![
        PatientRecord {
            doctor: Some("Dr. Jane Doe (Cardiologist)".to_string()),
            date_of_birth: Some("1970-06-01".to_string()),
            ..record()
        },
        PatientRecord {
            diagnosis_code: Some("E11".to_string()),
            age: Some(44),
            expense: Some(50.0),
            ..record()
        },
    ];
    let outcome = run(records, 2024);
    assert_eq!(
        outcome.report.get(metrics::MISSING_DIAGNOSIS_CODE),
        Some(MetricValue::Count(1))
    );
    assert_eq!(
        outcome.report.get(metrics::MISSING_DOCTOR),
        Some(MetricValue::Count(1))
    );
    assert_eq!(
        outcome.report.get(metrics::MISSING_DOB),
        Some(MetricValue::Count(1))
    );
    assert_eq!(
        outcome.report.get(metrics::MISSING_AGE),
        Some(MetricValue::Count(1))
    );
    // both records repaired from the crosswalk
    assert_eq!(outcome.records[0].diagnosis_code.as_deref(), Some("I10"));
    assert_eq!(
        outcome.records[1].doctor.as_deref(),
        Some("Dr. John Smith (Endocrinologist)")
    );
}

#[test]
fn expenses_are_present_and_non_negative_after_a_valid_run() {
    let records = vec![
        PatientRecord {
            expense: Some(75.0),
            ..record()
        },
        PatientRecord {
            expense: Some(-20.0),
            ..record()
        },
        PatientRecord { ..record() },
    ];
    let outcome = run(records, 2024);
    for cleaned in &outcome.records {
        let expense = cleaned.expense.expect("expense imputed");
        assert!(expense >= 0.0);
    }
}

#[test]
fn degenerate_expense_run_leaves_the_column_absent() {
    let records = vec![
        PatientRecord {
            expense: Some(-1.0),
            age: Some(30),
            ..record()
        },
        PatientRecord {
            age: Some(40),
            ..record()
        },
    ];
    let outcome = run(records, 2024);
    assert!(outcome.records.iter().all(|r| r.expense.is_none()));
}

#[test]
fn age_anomalies_are_counted_from_original_ages() {
    let records = vec![
        PatientRecord {
            age: Some(54),
            ..record()
        },
        PatientRecord {
            age: Some(150),
            date_of_birth: Some("1990-01-01".to_string()),
            ..record()
        },
        PatientRecord {
            date_of_birth: Some("2000-05-05".to_string()),
            ..record()
        },
    ];
    let outcome = run(records, 2024);
    assert_eq!(
        outcome.report.get(metrics::AGE_ANOMALIES),
        Some(MetricValue::Count(2))
    );
    // the anomalous ages were still repaired
    assert_eq!(outcome.records[1].age, Some(34));
    assert_eq!(outcome.records[2].age, Some(24));
}

//! Summary report aggregation.

use medclean_model::report::{MetricValue, SummaryReport, metrics};

/// Scalar outputs collected from the pipeline stages.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunMetrics {
    /// Ingested row count, duplicates included.
    pub total_records: u64,
    /// Rows removed across both deduplication passes.
    pub duplicates_removed: u64,
    /// Originally-missing values per repaired column, counted on the
    /// record set the run processes.
    pub missing_diagnosis_code: u64,
    pub missing_doctor: u64,
    pub missing_dob: u64,
    pub missing_age: u64,
    /// Records whose original age was missing or out of domain.
    pub age_anomalies: u64,
    /// Mean expansion fidelity over the run, unrounded.
    pub mean_fidelity: f64,
}

/// Round to 4 decimal places for reporting.
fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

/// Assemble the ordered summary report from stage outputs. Pure function;
/// no independent logic beyond rounding.
pub fn build_summary_report(metrics_in: &RunMetrics) -> SummaryReport {
    let mut report = SummaryReport::new();
    report.push(metrics::TOTAL_RECORDS, MetricValue::Count(metrics_in.total_records));
    report.push(
        metrics::DUPLICATES_REMOVED,
        MetricValue::Count(metrics_in.duplicates_removed),
    );
    report.push(
        metrics::MISSING_DIAGNOSIS_CODE,
        MetricValue::Count(metrics_in.missing_diagnosis_code),
    );
    report.push(
        metrics::MISSING_DOCTOR,
        MetricValue::Count(metrics_in.missing_doctor),
    );
    report.push(metrics::MISSING_DOB, MetricValue::Count(metrics_in.missing_dob));
    report.push(metrics::MISSING_AGE, MetricValue::Count(metrics_in.missing_age));
    report.push(
        metrics::AGE_ANOMALIES,
        MetricValue::Count(metrics_in.age_anomalies),
    );
    report.push(
        metrics::AVERAGE_FIDELITY_SCORE,
        MetricValue::Score(round4(metrics_in.mean_fidelity)),
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emits_metrics_in_canonical_order() {
        let report = build_summary_report(&RunMetrics::default());
        let names: Vec<&str> = report.iter().map(|(name, _)| name).collect();
        assert_eq!(
            names,
            [
                metrics::TOTAL_RECORDS,
                metrics::DUPLICATES_REMOVED,
                metrics::MISSING_DIAGNOSIS_CODE,
                metrics::MISSING_DOCTOR,
                metrics::MISSING_DOB,
                metrics::MISSING_AGE,
                metrics::AGE_ANOMALIES,
                metrics::AVERAGE_FIDELITY_SCORE,
            ]
        );
    }

    #[test]
    fn fidelity_is_rounded_to_four_decimals() {
        let run = RunMetrics {
            mean_fidelity: 0.123_456_78,
            ..RunMetrics::default()
        };
        let report = build_summary_report(&run);
        assert_eq!(
            report.get(metrics::AVERAGE_FIDELITY_SCORE),
            Some(MetricValue::Score(0.1235))
        );
    }

    #[test]
    fn counts_pass_through_unchanged() {
        let run = RunMetrics {
            total_records: 10,
            duplicates_removed: 3,
            missing_age: 2,
            ..RunMetrics::default()
        };
        let report = build_summary_report(&run);
        assert_eq!(report.get(metrics::TOTAL_RECORDS), Some(MetricValue::Count(10)));
        assert_eq!(
            report.get(metrics::DUPLICATES_REMOVED),
            Some(MetricValue::Count(3))
        );
        assert_eq!(report.get(metrics::MISSING_AGE), Some(MetricValue::Count(2)));
    }
}

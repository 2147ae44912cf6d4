//! The run summary report: an insertion-ordered list of named metrics.

use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Canonical metric names, in the order the aggregator emits them.
pub mod metrics {
    pub const TOTAL_RECORDS: &str = "Total Records";
    pub const DUPLICATES_REMOVED: &str = "Duplicates Removed";
    pub const MISSING_DIAGNOSIS_CODE: &str = "Missing Diagnosis_Code Filled";
    pub const MISSING_DOCTOR: &str = "Missing Doctor Names Filled";
    pub const MISSING_DOB: &str = "Missing DOB Calculated";
    pub const MISSING_AGE: &str = "Missing Age Filled";
    pub const AGE_ANOMALIES: &str = "Age Anomalies";
    pub const AVERAGE_FIDELITY_SCORE: &str = "Average Fidelity Score";
}

/// A single scalar metric value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MetricValue {
    Count(u64),
    Score(f64),
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Count(value) => write!(f, "{value}"),
            Self::Score(value) => write!(f, "{value:.4}"),
        }
    }
}

/// Ordered mapping of metric names to values, built once per run and
/// handed to the reporting layer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SummaryReport {
    entries: Vec<(String, MetricValue)>,
}

impl SummaryReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a metric. Names are not deduplicated; the aggregator emits
    /// each name once.
    pub fn push(&mut self, name: &str, value: MetricValue) {
        self.entries.push((name.to_string(), value));
    }

    /// Look up a metric by name.
    pub fn get(&self, name: &str) -> Option<MetricValue> {
        self.entries
            .iter()
            .find(|(entry, _)| entry == name)
            .map(|(_, value)| *value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, MetricValue)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), *value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for SummaryReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            match value {
                MetricValue::Count(count) => map.serialize_entry(name, count)?,
                MetricValue::Score(score) => map.serialize_entry(name, score)?,
            }
        }
        map.end()
    }
}

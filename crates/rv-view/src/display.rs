//! The textual metric list.
//!
//! Pure projection: one row per metric, in input order. The caller decides
//! what to show when there is no data.

use rv_types::RiskMetric;

/// One rendered row of the metric list.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricRow {
    pub label: String,
    pub value: String,
}

/// Project metrics into display rows, preserving input order. Empty input
/// yields no rows.
pub fn metric_rows(metrics: &[RiskMetric]) -> Vec<MetricRow> {
    metrics
        .iter()
        .map(|m| MetricRow {
            label: m.metric.clone(),
            value: m.value.to_string(),
        })
        .collect()
}

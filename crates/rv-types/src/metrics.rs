//! Risk metric data model.
//!
//! A [`RiskDataSet`] is the unit of state held by the view: it is created
//! fresh on every fetch (or fallback substitution), owned by a single
//! view-local slot, and replaced wholesale — never mutated in place.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Metric name excluded from the chart projection.
pub const SHARPE_RATIO: &str = "Sharpe Ratio";

/// A single named risk indicator (e.g. VaR, CVaR, Sharpe Ratio).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskMetric {
    /// Non-empty, unique within a dataset.
    pub metric: String,
    /// Unitless ratio, expected ≥ 0.
    pub value: f64,
}

impl RiskMetric {
    pub fn new(metric: impl Into<String>, value: f64) -> Self {
        Self {
            metric: metric.into(),
            value,
        }
    }
}

/// Whether the current dataset came from the API or the hardcoded sample.
///
/// The fallback substitution is deliberately observable here rather than
/// silent, so the UI and tests can distinguish live data from sample data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataOrigin {
    Live,
    Fallback,
}

/// The ordered collection of risk metrics currently held by the view.
///
/// Ordering is display order: insertion order is preserved, never sorted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskDataSet {
    pub metrics: Vec<RiskMetric>,
    pub origin: DataOrigin,
    pub fetched_at: DateTime<Utc>,
}

impl RiskDataSet {
    /// A dataset built from a successful fetch.
    pub fn live(metrics: Vec<RiskMetric>) -> Self {
        Self {
            metrics,
            origin: DataOrigin::Live,
            fetched_at: Utc::now(),
        }
    }

    /// The fixed sample dataset substituted when the fetch fails.
    pub fn fallback() -> Self {
        Self {
            metrics: vec![
                RiskMetric::new("VaR", 0.05),
                RiskMetric::new("CVaR", 0.07),
                RiskMetric::new(SHARPE_RATIO, 1.2),
            ],
            origin: DataOrigin::Fallback,
            fetched_at: Utc::now(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty()
    }

    pub fn len(&self) -> usize {
        self.metrics.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RiskMetric> {
        self.metrics.iter()
    }

    /// The filtered projection consumed by the chart: every record except
    /// those named "Sharpe Ratio". The display view uses the full set.
    pub fn chart_projection(&self) -> Vec<RiskMetric> {
        self.metrics
            .iter()
            .filter(|m| m.metric != SHARPE_RATIO)
            .cloned()
            .collect()
    }
}

//! Shared data model for RiskView.
//!
//! Provides:
//! - [`RiskMetric`] / [`RiskDataSet`] — the metrics held by the view
//! - [`DataOrigin`] — whether the current data is live or the fallback sample
//! - Error taxonomy ([`RvError`], [`FetchError`])

pub mod errors;
pub mod metrics;

pub use errors::*;
pub use metrics::*;

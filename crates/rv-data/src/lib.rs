//! Data ingestion for RiskView.
//!
//! Provides:
//! - [`RiskViewConfig`] — base-URL configuration read once at startup
//! - [`RiskApiClient`] — the single fetch collaborator; on any failure it
//!   substitutes the hardcoded fallback dataset so the view always has
//!   something to render

pub mod client;
pub mod config;

pub use client::RiskApiClient;
pub use config::RiskViewConfig;

//! Client configuration.
//!
//! The base URL is resolved from the environment exactly once at startup
//! and injected into [`crate::RiskApiClient`] at construction time. Nothing
//! downstream reads the environment ad hoc, which keeps tests free to point
//! a client at a stub endpoint.

/// Environment variable holding the API base URL.
pub const API_URL_ENV: &str = "RISKVIEW_API_URL";

/// Local development default used when the variable is unset.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Configuration for the RiskView fetch collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RiskViewConfig {
    /// Base URL of the portfolio API, without a trailing slash.
    pub api_base: String,
}

impl RiskViewConfig {
    pub fn new(api_base: impl Into<String>) -> Self {
        let mut api_base = api_base.into();
        while api_base.ends_with('/') {
            api_base.pop();
        }
        Self { api_base }
    }

    /// Resolve the base URL from `RISKVIEW_API_URL`, falling back to the
    /// local development address.
    pub fn from_env() -> Self {
        let api_base =
            std::env::var(API_URL_ENV).unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        Self::new(api_base)
    }

    /// Full URL of the portfolio-risks endpoint.
    pub fn risks_url(&self) -> String {
        format!("{}/api/portfolio-risks/", self.api_base)
    }
}

impl Default for RiskViewConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

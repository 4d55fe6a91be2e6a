use thiserror::Error;

/// Convenience alias used across the RiskView crates.
pub type RvResult<T> = Result<T, RvError>;

/// Main error type for the RiskView system
#[derive(Error, Debug)]
pub enum RvError {
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Errors raised while fetching risk metrics from the remote API.
///
/// Every variant collapses into the single user-visible outcome of
/// "data fetch failed": the caller substitutes the fallback dataset and
/// carries on. The variants exist so the diagnostic log can say which
/// stage broke.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP request failed: {message}")]
    Http { message: String },

    #[error("Unexpected HTTP status: {status}")]
    Status { status: u16 },

    #[error("Failed to decode response body: {message}")]
    Decode { message: String },

    #[error("Response contained no usable metrics")]
    Empty,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_error_display_includes_detail() {
        let error = FetchError::Status { status: 503 };
        assert!(error.to_string().contains("503"));

        let error = FetchError::Http {
            message: "connection refused".to_string(),
        };
        assert!(error.to_string().contains("connection refused"));
    }

    #[test]
    fn fetch_error_converts_to_rv_error() {
        let rv_error: RvError = FetchError::Empty.into();
        match rv_error {
            RvError::Fetch(_) => (),
            _ => panic!("Expected Fetch error"),
        }
    }

    #[test]
    fn serde_error_converts_to_rv_error() {
        let json_error = serde_json::from_str::<crate::RiskMetric>("not json").unwrap_err();
        let rv_error: RvError = json_error.into();
        match rv_error {
            RvError::Serialization(_) => (),
            _ => panic!("Expected Serialization error"),
        }
    }
}

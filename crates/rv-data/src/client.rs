//! HTTP client for the portfolio-risks endpoint.
//!
//! [`RiskApiClient::load_dataset`] is the only entry point the application
//! uses: it performs the single fetch and, on any failure, logs the error
//! and substitutes [`RiskDataSet::fallback`]. The user always sees a chart;
//! the [`rv_types::DataOrigin`] flag records whether it is live data.

use serde::Deserialize;
use tracing::{info, warn};

use rv_types::{FetchError, RiskDataSet, RiskMetric, RvResult};

use crate::config::RiskViewConfig;

/// Wire shape of one record in the API response.
#[derive(Debug, Deserialize)]
struct WireMetric {
    metric: String,
    value: f64,
}

/// Fetch collaborator for the remote risk API.
pub struct RiskApiClient {
    config: RiskViewConfig,
    client: reqwest::Client,
}

impl RiskApiClient {
    pub fn new(config: RiskViewConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    pub fn config(&self) -> &RiskViewConfig {
        &self.config
    }

    /// Fetch and sanitize the metric list.
    ///
    /// Network errors, non-2xx statuses, undecodable bodies, and responses
    /// that sanitize down to nothing are all [`FetchError`]s.
    pub async fn fetch_metrics(&self) -> RvResult<Vec<RiskMetric>> {
        let url = self.config.risks_url();
        info!("Fetching risk metrics from {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Http {
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            }
            .into());
        }

        let raw: Vec<WireMetric> = response.json().await.map_err(|e| FetchError::Decode {
            message: e.to_string(),
        })?;

        let metrics = sanitize(raw);
        if metrics.is_empty() {
            return Err(FetchError::Empty.into());
        }

        info!("Retrieved {} risk metrics", metrics.len());
        Ok(metrics)
    }

    /// Fetch the dataset, substituting the fallback sample on any failure.
    ///
    /// Never fails: the error is logged and masked, per the original UI
    /// behavior, but the substitution is visible through `origin`.
    pub async fn load_dataset(&self) -> RiskDataSet {
        match self.fetch_metrics().await {
            Ok(metrics) => RiskDataSet::live(metrics),
            Err(e) => {
                warn!("Risk metric fetch failed, using sample data: {}", e);
                RiskDataSet::fallback()
            }
        }
    }
}

/// Drop records the renderer cannot use: empty names, non-finite or
/// negative values, and duplicate names (first occurrence wins).
fn sanitize(raw: Vec<WireMetric>) -> Vec<RiskMetric> {
    let mut seen: Vec<String> = Vec::new();
    let mut metrics = Vec::with_capacity(raw.len());

    for record in raw {
        if record.metric.is_empty() {
            warn!("Dropping metric with empty name");
            continue;
        }
        if !record.value.is_finite() || record.value < 0.0 {
            warn!(
                "Dropping metric '{}' with unusable value {}",
                record.metric, record.value
            );
            continue;
        }
        if seen.contains(&record.metric) {
            warn!("Dropping duplicate metric '{}'", record.metric);
            continue;
        }
        seen.push(record.metric.clone());
        metrics.push(RiskMetric::new(record.metric, record.value));
    }

    metrics
}

#[cfg(test)]
mod tests {
    use super::*;
    use rv_types::DataOrigin;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// One-shot HTTP stub: serves a single canned response, then exits.
    async fn spawn_stub(status_line: &str, body: &str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );

        tokio::spawn(async move {
            if let Ok((mut socket, _)) = listener.accept().await {
                let mut buffer = [0u8; 1024];
                let _ = socket.read(&mut buffer).await;
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            }
        });

        format!("http://{}", addr)
    }

    fn client_for(base: String) -> RiskApiClient {
        RiskApiClient::new(RiskViewConfig::new(base))
    }

    #[tokio::test]
    async fn successful_fetch_yields_live_dataset_in_served_order() {
        let base = spawn_stub(
            "200 OK",
            r#"[{"metric":"VaR","value":0.04},{"metric":"CVaR","value":0.06}]"#,
        )
        .await;

        let dataset = client_for(base).load_dataset().await;
        assert_eq!(dataset.origin, DataOrigin::Live);
        assert_eq!(
            dataset.metrics,
            vec![
                RiskMetric::new("VaR", 0.04),
                RiskMetric::new("CVaR", 0.06),
            ]
        );
    }

    #[tokio::test]
    async fn connection_failure_substitutes_fallback() {
        // Nothing listens here; the connect fails immediately.
        let dataset = client_for("http://127.0.0.1:9".to_string())
            .load_dataset()
            .await;

        assert_eq!(dataset.origin, DataOrigin::Fallback);
        assert_eq!(dataset.metrics, RiskDataSet::fallback().metrics);
    }

    #[tokio::test]
    async fn server_error_substitutes_fallback() {
        let base = spawn_stub("500 Internal Server Error", "{}").await;

        let dataset = client_for(base).load_dataset().await;
        assert_eq!(dataset.origin, DataOrigin::Fallback);
    }

    #[tokio::test]
    async fn unexpected_shape_substitutes_fallback() {
        let base = spawn_stub("200 OK", r#"{"metric":"VaR","value":0.05}"#).await;

        let dataset = client_for(base).load_dataset().await;
        assert_eq!(dataset.origin, DataOrigin::Fallback);
    }

    #[tokio::test]
    async fn fully_invalid_payload_substitutes_fallback() {
        let base = spawn_stub("200 OK", r#"[{"metric":"","value":0.05}]"#).await;

        let dataset = client_for(base).load_dataset().await;
        assert_eq!(dataset.origin, DataOrigin::Fallback);
    }

    #[tokio::test]
    async fn fetch_metrics_reports_status_errors() {
        let base = spawn_stub("404 Not Found", "[]").await;

        let err = client_for(base).fetch_metrics().await.unwrap_err();
        assert!(err.to_string().contains("404"));
    }

    #[test]
    fn sanitize_drops_invalid_and_duplicate_records() {
        let raw = vec![
            WireMetric {
                metric: "VaR".to_string(),
                value: 0.05,
            },
            WireMetric {
                metric: "".to_string(),
                value: 0.1,
            },
            WireMetric {
                metric: "CVaR".to_string(),
                value: -0.2,
            },
            WireMetric {
                metric: "VaR".to_string(),
                value: 0.09,
            },
            WireMetric {
                metric: "Sharpe Ratio".to_string(),
                value: f64::NAN,
            },
        ];

        let metrics = sanitize(raw);
        assert_eq!(metrics, vec![RiskMetric::new("VaR", 0.05)]);
    }

    #[test]
    fn sanitize_keeps_valid_records_in_order() {
        let raw = vec![
            WireMetric {
                metric: "CVaR".to_string(),
                value: 0.07,
            },
            WireMetric {
                metric: "VaR".to_string(),
                value: 0.05,
            },
        ];

        let metrics = sanitize(raw);
        let names: Vec<_> = metrics.iter().map(|m| m.metric.as_str()).collect();
        assert_eq!(names, vec!["CVaR", "VaR"]);
    }
}

//! HTTP client for the relay.

use crate::error::{CliError, Result};
use focus_domain::LogEntry;
use serde::Deserialize;
use serde_json::{json, Value};

/// Relay liveness report.
#[derive(Debug, Clone, Deserialize)]
pub struct HealthStatus {
    /// "ok" when serving
    pub status: String,
    /// Relay clock at the time of the check
    pub timestamp: String,
}

/// Client for a running relay.
#[derive(Debug, Clone)]
pub struct RelayClient {
    base_url: String,
    http: reqwest::Client,
}

impl RelayClient {
    /// Create a client for the relay at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Ok(Self {
            base_url: base_url.into(),
            http: reqwest::Client::builder().build()?,
        })
    }

    /// Relay base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Post `{ logs }` to `/analyze` and return the response body as-is.
    ///
    /// The body is kept as raw JSON so that pass-through results which do not
    /// match the result schema still reach the caller.
    pub async fn analyze(&self, logs: &[LogEntry]) -> Result<Value> {
        let response = self
            .http
            .post(self.endpoint("analyze"))
            .json(&json!({ "logs": logs }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(CliError::RelayStatus(response.status().as_u16()));
        }

        Ok(response.json().await?)
    }

    /// Query `/health`.
    pub async fn health(&self) -> Result<HealthStatus> {
        let response = self.http.get(self.endpoint("health")).send().await?;

        if !response.status().is_success() {
            return Err(CliError::RelayStatus(response.status().as_u16()));
        }

        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_join() {
        let client = RelayClient::new("http://localhost:3001/").unwrap();
        assert_eq!(client.endpoint("analyze"), "http://localhost:3001/analyze");

        let client = RelayClient::new("http://localhost:3001").unwrap();
        assert_eq!(client.endpoint("health"), "http://localhost:3001/health");
    }

    #[tokio::test]
    async fn test_unreachable_relay_is_connection_error() {
        // Reserve a port, then release it so nothing is listening
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = RelayClient::new(format!("http://{}", addr)).unwrap();
        let err = client.health().await.unwrap_err();
        assert!(matches!(err, CliError::Connection(_)));
    }
}

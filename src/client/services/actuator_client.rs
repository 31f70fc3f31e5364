use std::time::Duration;

use log::{info, warn};
use reqwest::header::ACCEPT;
use serde_json::Value;

use crate::client::models::connection::Configuration;
use crate::common::endpoints::Endpoint;
use crate::common::errors::FetchError;

/// HTTP client for the monitored backend. Cheap to clone; every clone
/// shares the same connection pool.
#[derive(Debug, Clone)]
pub struct ActuatorClient {
    http: reqwest::Client,
    timeout: Duration,
}

impl ActuatorClient {
    pub fn new(timeout: Duration) -> Self {
        Self { http: reqwest::Client::new(), timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Issues one GET for the endpoint. Fails before touching the network
    /// when there is no configuration.
    pub async fn fetch(&self, config: Option<&Configuration>, endpoint: Endpoint) -> Result<Value, FetchError> {
        let config = config.ok_or(FetchError::ConfigurationMissing)?;
        self.get_json(&config.resolve(endpoint.path())).await
    }

    pub async fn get_json(&self, url: &str) -> Result<Value, FetchError> {
        info!("Fetching {}", url);
        let response = self
            .http
            .get(url)
            .header(ACCEPT, "application/json")
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| {
                warn!("Request to {} failed: {}", url, e);
                FetchError::from_transport(e, url)
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<Value>(&body)
                .ok()
                .and_then(|v| v.get("message").and_then(Value::as_str).map(str::to_owned));
            warn!("{} answered {}", url, status);
            return Err(FetchError::Server {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
                message,
            });
        }

        let body = response.text().await.map_err(|e| FetchError::from_transport(e, url))?;
        // Non-JSON bodies (Prometheus exposition) are shown verbatim.
        Ok(serde_json::from_str(&body).unwrap_or(Value::String(body)))
    }
}

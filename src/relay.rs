//! Same-origin relay to the private backend.
//!
//! The page cannot reach the backend directly (it lives in a private subnet), so
//! `/api/hello` on this service forwards the request to the configured backend.
//! Every backend-side failure, whether a non-2xx status, a network error or a
//! body that is not JSON, is normalized to `502 {"error": "..."}`.

use std::time::Duration;

use async_trait::async_trait;
use http::StatusCode;
use serde_json::{json, Value};
use tracing::instrument;

use crate::config::{BackendConfig, ConfigError};
use crate::ui::probe::{ProbeResponse, ProbeTransport, TransportError};

/// Error body returned to the page for any backend failure.
pub const RELAY_ERROR_MESSAGE: &str = "Failed to connect to backend";

#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("invalid backend configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("backend request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("backend responded with {0}")]
    Status(StatusCode),
}

/// HTTP client bound to the backend liveness endpoint.
#[derive(Clone, Debug)]
pub struct Relay {
    client: reqwest::Client,
    hello_url: reqwest::Url,
}

impl Relay {
    pub fn new(config: &BackendConfig) -> Result<Self, RelayError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            hello_url: config.hello_url()?,
        })
    }

    pub fn hello_url(&self) -> &str {
        self.hello_url.as_str()
    }

    /// Fetch the backend's liveness body.
    #[instrument(name = "relay::forward", skip(self), fields(url = %self.hello_url))]
    pub async fn forward(&self) -> Result<Value, RelayError> {
        let response = self
            .client
            .get(self.hello_url.clone())
            .header(http::header::CACHE_CONTROL, "no-store")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RelayError::Status(status));
        }

        let body = response.json::<Value>().await?;
        tracing::debug!(%status, "Backend responded");
        Ok(body)
    }

    /// Status and JSON body to hand back to the page.
    pub async fn exchange(&self) -> (StatusCode, Value) {
        match self.forward().await {
            Ok(body) => (StatusCode::OK, body),
            Err(e) => {
                tracing::error!(error = %e, url = %self.hello_url, "Backend fetch error");
                (
                    StatusCode::BAD_GATEWAY,
                    json!({ "error": RELAY_ERROR_MESSAGE }),
                )
            }
        }
    }
}

/// Server-side probes go through the relay in-process, seeing exactly what
/// `/api/hello` would answer.
#[async_trait]
impl ProbeTransport for Relay {
    async fn fetch(&self) -> Result<ProbeResponse, TransportError> {
        let (status, body) = self.exchange().await;
        let body = serde_json::to_vec(&body).map_err(|e| TransportError(e.to_string()))?;
        Ok(ProbeResponse::new(status, body))
    }
}

/// Transport for the static export, where no relay route exists.
#[derive(Debug, Clone, Copy)]
pub struct StaticExport;

#[async_trait]
impl ProbeTransport for StaticExport {
    async fn fetch(&self) -> Result<ProbeResponse, TransportError> {
        Ok(ProbeResponse::new(StatusCode::NOT_FOUND, Vec::new()))
    }
}

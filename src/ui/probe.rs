//! Backend connectivity probe.
//!
//! One outbound request per start, tracked as `Idle -> Loading -> Succeeded | Failed`.
//! The `Loading` variant doubles as the in-flight guard: a start while loading is
//! ignored, so at most one request is ever outstanding. Every failure is folded
//! into the configured canned message; the raw cause only goes to the log.

use async_trait::async_trait;
use http::StatusCode;
use serde::{Deserialize, Serialize};

/// Body returned by the backend liveness endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbeResult {
    pub message: String,
    pub ip: String,
    pub status: String,
}

/// Current probe state. Serializes as `{"state": "...", "detail": ...}` for templates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "detail", rename_all = "snake_case")]
pub enum ProbeState {
    #[default]
    Idle,
    Loading,
    Succeeded(ProbeResult),
    Failed(String),
}

impl ProbeState {
    pub fn is_loading(&self) -> bool {
        matches!(self, ProbeState::Loading)
    }
}

/// Raw HTTP-shaped answer from a transport.
#[derive(Debug, Clone)]
pub struct ProbeResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

impl ProbeResponse {
    pub fn new(status: StatusCode, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Network-level failure reported by a transport.
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct TransportError(pub String);

/// Something that can carry the probe request to the relay.
#[async_trait]
pub trait ProbeTransport: Send + Sync {
    /// Perform exactly one request. No retries.
    async fn fetch(&self) -> Result<ProbeResponse, TransportError>;
}

/// Why a settled probe ended up `Failed`. Logged, never shown.
#[derive(Debug, thiserror::Error)]
enum ProbeFailure {
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),
    #[error("relay answered {0}")]
    Status(StatusCode),
    #[error("malformed response body: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Single-use ticket for the request issued by [`ConnectivityProbe::begin`].
#[derive(Debug)]
#[must_use = "an in-flight probe has to be settled"]
pub struct InFlight {
    generation: u64,
}

#[derive(Debug, Clone)]
pub struct ConnectivityProbe {
    state: ProbeState,
    failure_message: String,
    generation: u64,
}

impl ConnectivityProbe {
    pub fn new(failure_message: impl Into<String>) -> Self {
        Self {
            state: ProbeState::Idle,
            failure_message: failure_message.into(),
            generation: 0,
        }
    }

    pub fn state(&self) -> &ProbeState {
        &self.state
    }

    pub fn failure_message(&self) -> &str {
        &self.failure_message
    }

    /// Enter `Loading` and hand out the ticket for the request about to be issued.
    ///
    /// Returns `None` while a request is already outstanding.
    pub fn begin(&mut self) -> Option<InFlight> {
        if self.state.is_loading() {
            tracing::debug!("Probe already in flight, ignoring start");
            return None;
        }

        self.generation += 1;
        self.state = ProbeState::Loading;
        Some(InFlight {
            generation: self.generation,
        })
    }

    /// Apply the outcome of the request identified by `ticket`.
    pub fn settle(&mut self, ticket: InFlight, outcome: Result<ProbeResponse, TransportError>) {
        if !self.state.is_loading() || ticket.generation != self.generation {
            debug_assert!(false, "settle called with a ticket this probe did not issue");
            tracing::warn!(
                ticket = ticket.generation,
                current = self.generation,
                "Ignoring stale probe outcome"
            );
            return;
        }

        self.state = match interpret(outcome) {
            Ok(result) => {
                tracing::info!(ip = %result.ip, status = %result.status, "Backend probe succeeded");
                ProbeState::Succeeded(result)
            }
            Err(cause) => {
                tracing::warn!(error = %cause, "Backend probe failed");
                ProbeState::Failed(self.failure_message.clone())
            }
        };
    }

    /// Run one complete probe through `transport`.
    ///
    /// A no-op when a request is already outstanding.
    pub async fn start_probe<T>(&mut self, transport: &T) -> &ProbeState
    where
        T: ProbeTransport + ?Sized,
    {
        if let Some(ticket) = self.begin() {
            let outcome = transport.fetch().await;
            self.settle(ticket, outcome);
        }
        &self.state
    }
}

fn interpret(outcome: Result<ProbeResponse, TransportError>) -> Result<ProbeResult, ProbeFailure> {
    let response = outcome?;
    if !response.status.is_success() {
        return Err(ProbeFailure::Status(response.status));
    }
    Ok(serde_json::from_slice(&response.body)?)
}

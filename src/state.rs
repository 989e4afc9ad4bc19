//! Shared application state for request handlers.

use std::sync::Arc;
use tera::Tera;

use crate::config::AppConfig;
use crate::relay::Relay;

/// Shared application state, cloneable across handlers via Arc-wrapped fields.
///
/// Holds only read-only data and the relay's HTTP client. Page state (probe,
/// snippet focus, lightbox) is built fresh for every request.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub tera: Arc<Tera>,
    pub relay: Relay,
}

impl AppState {
    pub fn new(config: AppConfig, tera: Tera, relay: Relay) -> Self {
        Self {
            config: Arc::new(config),
            tera: Arc::new(tera),
            relay,
        }
    }

    /// Canned message for a failed probe in the configured deployment mode.
    pub fn probe_failure_message(&self) -> &str {
        self.config.probe.failure_for(self.config.deploy.source)
    }
}

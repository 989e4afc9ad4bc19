//! Configuration loading and constants.
//!
//! Loads application configuration from TOML files, applies environment
//! overrides, and defines constants for HTTP cache headers, default paths and
//! logging. `AppConfig` is the root configuration struct containing all settings.

use const_format::formatcp;
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::path::Path;

// =============================================================================
// HTTP Response Cache Control
// =============================================================================
// All values are in seconds.

/// Page renders depend on query state and on a live probe; keep them short.
pub const HTTP_CACHE_HOME_MAX_AGE: u32 = 0;

/// Static assets (CSS, JS, screenshots)
pub const HTTP_CACHE_STATIC_MAX_AGE: u32 = 86400;

/// Error responses - short TTL to allow quick recovery
pub const HTTP_CACHE_ERROR_MAX_AGE: u32 = 5;

pub const CACHE_CONTROL_HOME: &str =
    formatcp!("private, max-age={}, must-revalidate", HTTP_CACHE_HOME_MAX_AGE);

pub const CACHE_CONTROL_STATIC: &str =
    formatcp!("public, max-age={}, immutable", HTTP_CACHE_STATIC_MAX_AGE);

pub const CACHE_CONTROL_ERROR: &str = formatcp!("public, max-age={}", HTTP_CACHE_ERROR_MAX_AGE);

/// The relay must never be served from a cache: every probe is a fresh round trip.
pub const CACHE_CONTROL_RELAY: &str = "no-store";

// =============================================================================
// Backend Relay
// =============================================================================

/// Backend address used when neither the config file nor the environment sets one
pub const DEFAULT_BACKEND_URL: &str = "http://10.0.2.20:8000";

/// Path of the liveness endpoint on the backend (and of the relay on this service)
pub const BACKEND_HELLO_PATH: &str = "/api/hello";

/// Transport timeout for relay requests
pub const DEFAULT_BACKEND_TIMEOUT_SECS: u64 = 10;

/// Environment variable overriding `backend.base_url`
pub const ENV_BACKEND_URL: &str = "BACKEND_URL";

/// Environment variable overriding `deploy.source`
pub const ENV_DEPLOY_SOURCE: &str = "DEPLOY_SOURCE";

// =============================================================================
// Default Paths and Strings
// =============================================================================

/// Default configuration file path
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Glob pattern for template files
pub const TEMPLATE_GLOB: &str = "templates/**/*";

/// Directory for static files
pub const STATIC_DIR: &str = "static";

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "vpcdemo=debug,tower_http=debug";

/// Default log format (text or json)
pub const DEFAULT_LOG_FORMAT: &str = "text";

/// Canned probe failure shown when the page is served by this service
pub const DEFAULT_SERVER_FAILURE_MESSAGE: &str =
    "Could not reach backend. Is the private instance running?";

/// Canned probe failure shown by the static export, which has no relay at all
pub const DEFAULT_STATIC_FAILURE_MESSAGE: &str =
    "This copy is a static GitHub Pages export, so there is no private backend behind it. \
     Deploy the stack to AWS and the backend will answer.";

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration
    pub http: HttpServerConfig,
    /// Backend the relay forwards to
    #[serde(default)]
    pub backend: BackendConfig,
    /// Deployment mode
    #[serde(default)]
    pub deploy: DeployConfig,
    /// Canned probe failure messages
    #[serde(default)]
    pub probe: ProbeMessages,
    #[serde(default)]
    pub ui: UiConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HttpServerConfig {
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub tls: TlsConfig,
}

/// TLS mode for the HTTP listener
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TlsMode {
    /// Plain HTTP (the usual setup behind a load balancer)
    #[default]
    None,
    /// User-provided certificate and key files
    Manual,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TlsConfig {
    #[serde(default)]
    pub mode: TlsMode,
    pub cert_path: Option<String>,
    pub key_path: Option<String>,
}

/// Where the relay forwards probe requests
#[derive(Debug, Clone, Deserialize)]
pub struct BackendConfig {
    #[serde(default = "BackendConfig::default_base_url")]
    pub base_url: String,
    #[serde(default = "BackendConfig::default_timeout")]
    pub timeout_seconds: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: Self::default_base_url(),
            timeout_seconds: Self::default_timeout(),
        }
    }
}

impl BackendConfig {
    fn default_base_url() -> String {
        DEFAULT_BACKEND_URL.to_string()
    }

    fn default_timeout() -> u64 {
        DEFAULT_BACKEND_TIMEOUT_SECS
    }

    /// `base_url` parsed; must be an absolute http(s) URL with a host.
    pub fn url(&self) -> Result<Url, ConfigError> {
        let invalid = |reason: String| {
            ConfigError::Validation(format!(
                "backend.base_url \"{}\" is not a valid backend URL: {}",
                self.base_url, reason
            ))
        };

        let url = Url::parse(self.base_url.trim()).map_err(|e| invalid(e.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme \"{}\"", url.scheme())));
        }
        if url.host_str().is_none() {
            return Err(invalid("missing host".to_string()));
        }
        Ok(url)
    }

    /// Full URL of the backend liveness endpoint. A path prefix on
    /// `base_url` is kept.
    pub fn hello_url(&self) -> Result<Url, ConfigError> {
        let mut base = self.url()?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        base.join(BACKEND_HELLO_PATH.trim_start_matches('/'))
            .map_err(|e| ConfigError::Validation(format!("backend hello URL: {}", e)))
    }
}

/// How this copy of the page is deployed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeploySource {
    /// Served by this process, relay available
    #[default]
    Server,
    /// Static export: no server routes, so no relay
    GithubPages,
}

impl DeploySource {
    /// Whether the `/api/hello` relay route exists in this mode
    pub fn serves_relay(self) -> bool {
        matches!(self, DeploySource::Server)
    }

    fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "server" => Some(Self::Server),
            "github-pages" => Some(Self::GithubPages),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeployConfig {
    #[serde(default)]
    pub source: DeploySource,
}

/// The two canned failure messages, keyed by deployment source.
#[derive(Debug, Clone, Deserialize)]
pub struct ProbeMessages {
    #[serde(default = "ProbeMessages::default_server")]
    pub server_failure: String,
    #[serde(default = "ProbeMessages::default_static")]
    pub static_failure: String,
}

impl Default for ProbeMessages {
    fn default() -> Self {
        Self {
            server_failure: Self::default_server(),
            static_failure: Self::default_static(),
        }
    }
}

impl ProbeMessages {
    fn default_server() -> String {
        DEFAULT_SERVER_FAILURE_MESSAGE.to_string()
    }

    fn default_static() -> String {
        DEFAULT_STATIC_FAILURE_MESSAGE.to_string()
    }

    /// Message surfaced by a failed probe in the given deployment mode
    pub fn failure_for(&self, source: DeploySource) -> &str {
        match source {
            DeploySource::Server => &self.server_failure,
            DeploySource::GithubPages => &self.static_failure,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UiConfig {
    /// Site title shown in the header and page title
    #[serde(default = "UiConfig::default_site_name")]
    pub site_name: String,
    /// Link target of the "View Repository" button, hidden when unset
    pub repository_url: Option<String>,
    /// Version string, populated at runtime
    #[serde(skip_deserializing, default = "UiConfig::default_version")]
    pub version: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            site_name: Self::default_site_name(),
            repository_url: None,
            version: Self::default_version(),
        }
    }
}

impl UiConfig {
    fn default_site_name() -> String {
        "VPC Architecture Demo".to_string()
    }

    fn default_version() -> String {
        env!("CARGO_PKG_VERSION").to_string()
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log format: "text" (human-readable, default) or "json" (structured)
    #[serde(default = "LoggingConfig::default_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: DEFAULT_LOG_FORMAT.to_string(),
        }
    }
}

impl LoggingConfig {
    fn default_format() -> String {
        DEFAULT_LOG_FORMAT.to_string()
    }

    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }
}

impl AppConfig {
    /// Load from a TOML file and apply process environment overrides.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let mut config = Self::parse(&contents)?;
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Parse and validate TOML contents without touching the environment.
    pub fn parse(contents: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply overrides from an environment lookup.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_BACKEND_URL).filter(|v| !v.trim().is_empty()) {
            self.backend.base_url = url;
        }
        if let Some(raw) = lookup(ENV_DEPLOY_SOURCE) {
            self.deploy.source = DeploySource::parse(&raw).ok_or_else(|| {
                ConfigError::Validation(format!(
                    "{} must be \"server\" or \"github-pages\", got \"{}\"",
                    ENV_DEPLOY_SOURCE, raw
                ))
            })?;
        }
        self.validate()
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.http.tls.mode == TlsMode::Manual
            && (self.http.tls.cert_path.is_none() || self.http.tls.key_path.is_none())
        {
            return Err(ConfigError::Validation(
                "http.tls.mode = \"manual\" requires cert_path and key_path".to_string(),
            ));
        }

        self.backend.hello_url()?;

        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Configuration error: {0}")]
    Validation(String),
}

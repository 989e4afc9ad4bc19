//! vpcdemo: demonstration page for a two-tier VPC deployment.
//!
//! This is the application entry point. It initializes tracing, loads configuration
//! from TOML (plus environment overrides), builds the backend relay and the Tera
//! templates, sets up the Axum router and starts the HTTP server.

mod config;
mod content;
mod error;
mod http;
mod middleware;
mod relay;
mod routes;
mod state;
mod templates;
mod ui;

#[cfg(test)]
mod testing;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use config::{AppConfig, DEFAULT_CONFIG_PATH, DEFAULT_LOG_FILTER};
use relay::Relay;
use routes::create_router;
use state::AppState;
use templates::init_templates;

/// vpcdemo: VPC architecture demo with a live backend probe
#[derive(Parser, Debug)]
#[command(name = "vpcdemo", version, about)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    /// Log level filter (e.g., "vpcdemo=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Configuration comes first so the log format can be honored
    let config = AppConfig::load(&args.config)?;

    // Initialize tracing with priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    let registry =
        tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::new(&log_filter));
    if config.logging.is_json() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::info!(path = %args.config, "Loaded configuration");

    let tera = init_templates()?;
    tracing::info!("Initialized templates");

    let relay = Relay::new(&config.backend)?;
    tracing::info!(
        backend = %relay.hello_url(),
        deploy = ?config.deploy.source,
        relay = config.deploy.source.serves_relay(),
        "Backend relay configured"
    );

    let state = AppState::new(config.clone(), tera, relay);
    let app = create_router(state);

    http::start_server(app, &config).await?;

    Ok(())
}

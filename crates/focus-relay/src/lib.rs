//! Focus Analyzer Relay
//!
//! HTTP relay between activity recorders and the Gemini API.
//! Exposes `POST /analyze` and `GET /health`.

#![warn(missing_docs)]

pub mod config;
pub mod handlers;

use config::RelayConfig;
use focus_analyzer::Analyzer;
use focus_llm::{GeminiProvider, LlmError};
use handlers::{create_router, AppState};
use tokio::net::TcpListener;
use tracing::{info, warn};

/// Relay error
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Provider could not be initialized
    #[error("Provider error: {0}")]
    Provider(#[from] LlmError),

    /// Server binding error
    #[error("Failed to bind server: {0}")]
    Bind(#[from] std::io::Error),

    /// Server error
    #[error("Server error: {0}")]
    Server(String),
}

/// Build the application router backed by the Gemini provider
pub fn build_app(config: &RelayConfig) -> Result<axum::Router, RelayError> {
    let provider = GeminiProvider::from_config(config.gemini_config())?;
    let analyzer = Analyzer::new(provider, config.analyzer_config());
    Ok(create_router(AppState::new(analyzer)))
}

/// Start the Relay HTTP server
///
/// Builds the provider and pipeline from configuration and serves until the
/// process is stopped.
pub async fn start_server(config: RelayConfig) -> Result<(), RelayError> {
    info!("Starting Focus Analyzer Relay");
    info!("Bind address: {}", config.bind_addr());
    info!("Gemini model: {}", config.gemini_model);
    info!(
        "Gemini API key loaded: {}",
        if config.has_api_key() { "yes" } else { "NO" }
    );
    if !config.has_api_key() && !config.demo_mode {
        warn!("No API key configured; every analysis will fall back");
    }
    if config.demo_mode {
        info!("Demo mode enabled: remote calls are bypassed");
    }

    let app = build_app(&config)?;

    let listener = TcpListener::bind(&config.bind_addr()).await?;
    info!("Relay listening on http://{}", config.bind_addr());

    axum::serve(listener, app)
        .await
        .map_err(|e| RelayError::Server(e.to_string()))?;

    Ok(())
}

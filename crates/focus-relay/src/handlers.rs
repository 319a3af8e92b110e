//! HTTP request handlers for the Relay service.
//!
//! Implements the analysis and health check endpoints using axum. The
//! analysis endpoint answers 200 with a schema-shaped body for every input.

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, DefaultBodyLimit, State},
    response::Json,
    routing::{get, post},
    Router as AxumRouter,
};
use chrono::{SecondsFormat, Utc};
use focus_analyzer::{fallback, AnalysisOutcome, Analyzer};
use focus_domain::AnalysisProvider;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::{error, info, warn};

/// Largest accepted request body
pub const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Shared application state
pub struct AppState<P>
where
    P: AnalysisProvider,
{
    /// Analysis pipeline; read-only after startup
    pub analyzer: Arc<Analyzer<P>>,
}

impl<P> AppState<P>
where
    P: AnalysisProvider,
{
    /// Wrap an analyzer for sharing across requests
    pub fn new(analyzer: Analyzer<P>) -> Self {
        Self {
            analyzer: Arc::new(analyzer),
        }
    }
}

impl<P> Clone for AppState<P>
where
    P: AnalysisProvider,
{
    fn clone(&self) -> Self {
        Self {
            analyzer: Arc::clone(&self.analyzer),
        }
    }
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthCheckResponse {
    /// Always "ok" while the process is serving
    pub status: String,
    /// Current time, RFC 3339 UTC with milliseconds
    pub timestamp: String,
}

/// POST /analyze - Analyze an activity log
///
/// The body may be a bare array of entries or `{ "logs": [...] }`. Unreadable
/// or non-JSON bodies are treated as "no data". The pipeline runs in its own
/// task so that a panic anywhere inside it becomes the internal-error
/// fallback instead of a dropped connection.
async fn analyze<P>(
    State(state): State<AppState<P>>,
    body: Result<Bytes, BytesRejection>,
) -> Json<AnalysisOutcome>
where
    P: AnalysisProvider + 'static,
{
    info!("POST /analyze");

    let payload = match body {
        Ok(bytes) => parse_payload(&bytes),
        Err(rejection) => {
            warn!("Request body rejected: {}", rejection);
            Value::Null
        }
    };

    let analyzer = Arc::clone(&state.analyzer);
    let outcome = match tokio::spawn(async move { analyzer.analyze_payload(&payload).await }).await
    {
        Ok(outcome) => outcome,
        Err(e) => {
            error!("Analysis task failed: {}", e);
            fallback::internal_error().into()
        }
    };

    if outcome.is_fallback() {
        warn!("Responding with fallback analysis");
    }

    Json(outcome)
}

fn parse_payload(bytes: &[u8]) -> Value {
    if bytes.is_empty() {
        return Value::Null;
    }
    serde_json::from_slice(bytes).unwrap_or_else(|e| {
        warn!("Request body is not valid JSON: {}", e);
        Value::Null
    })
}

/// GET /health - Liveness check
async fn health_check() -> Json<HealthCheckResponse> {
    Json(HealthCheckResponse {
        status: "ok".to_string(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}

/// Create the axum router with all routes
pub fn create_router<P>(state: AppState<P>) -> AxumRouter
where
    P: AnalysisProvider + 'static,
{
    AxumRouter::new()
        .route("/analyze", post(analyze::<P>))
        .route("/health", get(health_check))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

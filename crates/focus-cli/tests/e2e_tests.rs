//! End-to-end tests: CLI client against a live relay router

use focus_analyzer::{Analyzer, AnalyzerConfig};
use focus_cli::output::{ui_url_for, ANALYSIS_PARAM};
use focus_cli::sample::sample_logs;
use focus_cli::tracker::{record_visit, VisitOutcome};
use focus_cli::{CliError, JsonFileStore, LogStore, RelayClient};
use focus_domain::AnalysisResult;
use focus_llm::{LlmError, MockProvider};
use focus_relay::handlers::{create_router, AppState};
use serde_json::{json, Value};
use tempfile::tempdir;

const MODEL_OUTPUT: &str = r#"Analysis follows:
{"periods": [{"startTime": "2025-01-17T14:00:00Z", "endTime": "2025-01-17T14:04:00Z",
  "type": "fragmented", "duration_minutes": 4, "primary_domains": ["github.com", "stackoverflow.com"],
  "explanation": "Switching while debugging"}],
 "switching_loops": [{"domains": ["github.com", "stackoverflow.com"], "occurrences": 2,
  "likely_cause": "Looking up errors"}],
 "overall_assessment": "A fragmented start, then focus.",
 "confidence_level": "medium"}"#;

/// Serve a relay router on an ephemeral port and return its base URL
async fn spawn_relay(provider: MockProvider) -> String {
    let app = create_router(AppState::new(Analyzer::new(
        provider,
        AnalyzerConfig::default(),
    )));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

#[tokio::test]
async fn test_sample_analysis_round_trip() {
    let provider = MockProvider::new(MODEL_OUTPUT);
    let client = RelayClient::new(spawn_relay(provider.clone()).await).unwrap();

    let body = client.analyze(&sample_logs()).await.unwrap();
    let result: AnalysisResult = serde_json::from_value(body.clone()).unwrap();

    assert!(!result.is_fallback());
    assert_eq!(result.switching_loops[0].occurrences, 2);
    assert!(body.get("is_fallback").is_none());

    // The model sees normalized domains, never full URLs
    let prompt = provider.last_prompt().unwrap();
    assert!(prompt.contains("notion.so"));
    assert!(!prompt.contains("questions/12345"));
}

#[tokio::test]
async fn test_tracked_visits_are_analyzed() {
    let dir = tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("state.json"));

    // Nothing is recorded until tracking is switched on
    let outcome = record_visit(&store, "https://github.com/user/project", "t0").unwrap();
    assert_eq!(outcome, VisitOutcome::TrackingDisabled);

    store.set_tracking(true).unwrap();
    record_visit(&store, "https://github.com/user/project", "t1").unwrap();
    record_visit(&store, "chrome://newtab", "t2").unwrap();
    record_visit(&store, "https://x.com/p", "t3").unwrap();

    let logs = store.logs().unwrap();
    assert_eq!(logs.len(), 2);

    let provider = MockProvider::new(MODEL_OUTPUT);
    let client = RelayClient::new(spawn_relay(provider.clone()).await).unwrap();
    client.analyze(&logs).await.unwrap();

    let prompt = provider.last_prompt().unwrap();
    assert!(prompt.contains("\"x.com\""));
    assert_eq!(provider.call_count(), 1);
}

#[tokio::test]
async fn test_relay_failure_arrives_as_fallback() {
    let client = RelayClient::new(
        spawn_relay(MockProvider::failing(LlmError::HttpStatus(500))).await,
    )
    .unwrap();

    let body = client.analyze(&sample_logs()).await.unwrap();
    assert_eq!(body["is_fallback"], true);
    assert_eq!(body["confidence_level"], "low");
    assert!(body["overall_assessment"]
        .as_str()
        .unwrap()
        .contains("HTTP 500"));
}

#[tokio::test]
async fn test_empty_log_gets_no_data_fallback() {
    let provider = MockProvider::new(MODEL_OUTPUT);
    let client = RelayClient::new(spawn_relay(provider.clone()).await).unwrap();

    let body = client.analyze(&[]).await.unwrap();
    assert_eq!(
        body["overall_assessment"],
        "No valid activity data was provided for analysis."
    );
    assert_eq!(provider.call_count(), 0);
}

#[tokio::test]
async fn test_health() {
    let client = RelayClient::new(spawn_relay(MockProvider::default()).await).unwrap();

    let health = client.health().await.unwrap();
    assert_eq!(health.status, "ok");
}

#[tokio::test]
async fn test_non_relay_server_is_status_error() {
    // Any server without the relay routes
    let app = axum::Router::new();
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let client = RelayClient::new(format!("http://{}", addr)).unwrap();
    let err = client.analyze(&sample_logs()).await.unwrap_err();
    assert!(matches!(err, CliError::RelayStatus(404)));
}

#[tokio::test]
async fn test_ui_link_carries_relay_body() {
    let client = RelayClient::new(spawn_relay(MockProvider::new(MODEL_OUTPUT)).await).unwrap();
    let body = client.analyze(&sample_logs()).await.unwrap();

    let link = ui_url_for("http://localhost:5173", &body).unwrap();
    let parsed = url::Url::parse(&link).unwrap();
    let decoded: Value = parsed
        .query_pairs()
        .find(|(k, _)| k == ANALYSIS_PARAM)
        .map(|(_, v)| serde_json::from_str(&v).unwrap())
        .unwrap();

    assert_eq!(decoded, body);
    assert_eq!(decoded["confidence_level"], json!("medium"));
}

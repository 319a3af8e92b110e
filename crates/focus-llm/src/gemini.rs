//! Gemini Provider Implementation
//!
//! Calls Google's Generative Language REST API (`models/<model>:generateContent`)
//! with a single text part and returns the first candidate's text.
//!
//! # Behavior
//!
//! - One attempt per call, no retry
//! - Timeout is the transport default unless configured
//! - Every failure is mapped to an [`LlmError`] variant whose
//!   `fallback_reason` names the failing stage
//!
//! # Examples
//!
//! ```no_run
//! use focus_llm::GeminiProvider;
//!
//! let provider = GeminiProvider::new("my-api-key", "gemini-pro").unwrap();
//! // `generate` is async; drive it from a Tokio runtime
//! ```

use crate::LlmError;
use focus_domain::AnalysisProvider;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, error};

/// Default Generative Language API base URL
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default model name
pub const DEFAULT_MODEL: &str = "gemini-pro";

/// Connection settings for [`GeminiProvider`]
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// API key sent as the `key` query parameter
    pub api_key: String,
    /// Model name (e.g. "gemini-pro")
    pub model: String,
    /// API base URL without trailing slash
    pub base_url: String,
    /// Optional request timeout; `None` keeps the transport default
    pub timeout: Option<Duration>,
}

impl GeminiConfig {
    /// Settings for the public endpoint with the given key and model
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: model.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
        }
    }

    /// Override the base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set a request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Gemini API provider
pub struct GeminiProvider {
    config: GeminiConfig,
    client: reqwest::Client,
}

#[derive(Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
}

#[derive(Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

impl GeminiProvider {
    /// Create a provider for the public endpoint
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::Other`] if the HTTP client cannot be built.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Result<Self, LlmError> {
        Self::from_config(GeminiConfig::new(api_key, model))
    }

    /// Create a provider from explicit settings
    pub fn from_config(config: GeminiConfig) -> Result<Self, LlmError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| LlmError::Other(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    /// The configured model name
    pub fn model(&self) -> &str {
        &self.config.model
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }

    /// Generate text using the Gemini API
    ///
    /// # Errors
    ///
    /// - [`LlmError::Communication`] when the request cannot be sent
    /// - [`LlmError::HttpStatus`] for any non-success status
    /// - [`LlmError::InvalidResponse`] when the body is not the expected JSON
    /// - [`LlmError::EmptyResponse`] when there is no candidate or its text is blank
    pub async fn generate_text(&self, prompt: &str) -> Result<String, LlmError> {
        let body = GenerateContentRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: prompt }],
            }],
        };

        debug!(
            "Sending {} prompt chars to model {}",
            prompt.len(),
            self.config.model
        );

        // The key travels in the query string, so strip URLs from error text.
        let response = self
            .client
            .post(self.endpoint())
            .query(&[("key", self.config.api_key.as_str())])
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                let e = e.without_url();
                error!("Gemini request failed: {}", e);
                LlmError::Communication(format!("Request failed: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            error!("Gemini HTTP error: {}", status);
            return Err(LlmError::HttpStatus(status.as_u16()));
        }

        let decoded: Value = response.json().await.map_err(|e| {
            let e = e.without_url();
            error!("Gemini response could not be decoded: {}", e);
            LlmError::InvalidResponse(format!("Failed to parse response: {}", e))
        })?;

        extract_candidate_text(&decoded)
    }
}

/// Walk `candidates[0].content.parts[0].text`
///
/// Any missing, `null` or non-string step along the path counts as an empty
/// answer, as does text that is only whitespace.
fn extract_candidate_text(response: &Value) -> Result<String, LlmError> {
    let text = response
        .get("candidates")
        .and_then(|candidates| candidates.get(0))
        .and_then(|candidate| candidate.get("content"))
        .and_then(|content| content.get("parts"))
        .and_then(|parts| parts.get(0))
        .and_then(|part| part.get("text"))
        .and_then(Value::as_str)
        .filter(|text| !text.trim().is_empty())
        .ok_or_else(|| {
            error!("Gemini returned no usable candidate text");
            LlmError::EmptyResponse("no candidate text".to_string())
        })?;

    Ok(text.to_string())
}

impl AnalysisProvider for GeminiProvider {
    type Error = LlmError;

    async fn generate(&self, prompt: &str) -> Result<String, Self::Error> {
        self.generate_text(prompt).await
    }
}

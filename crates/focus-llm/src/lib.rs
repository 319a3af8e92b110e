//! Focus Analyzer LLM Provider Layer
//!
//! Implementations of the `AnalysisProvider` trait from `focus-domain`.
//!
//! # Providers
//!
//! - `MockProvider`: Deterministic mock for testing
//! - `GeminiProvider`: Google Gemini `generateContent` REST integration
//!
//! # Examples
//!
//! ```
//! use focus_llm::MockProvider;
//! use focus_domain::AnalysisProvider;
//!
//! # async fn example() {
//! let provider = MockProvider::new("Hello from LLM!");
//! let result = provider.generate("test prompt").await.unwrap();
//! assert_eq!(result, "Hello from LLM!");
//! # }
//! ```

#![warn(missing_docs)]

pub mod gemini;

use focus_domain::{AnalysisProvider, ProviderFailure};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use thiserror::Error;

pub use gemini::{GeminiConfig, GeminiProvider};

/// Errors that can occur during LLM operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LlmError {
    /// Network or transport failure before a status was received
    #[error("Communication error: {0}")]
    Communication(String),

    /// The endpoint answered with a non-success status
    #[error("HTTP {0}")]
    HttpStatus(u16),

    /// The response body could not be decoded
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// The response decoded but carried no usable text
    #[error("Empty response: {0}")]
    EmptyResponse(String),

    /// Provider could not be constructed
    #[error("LLM error: {0}")]
    Other(String),
}

impl ProviderFailure for LlmError {
    fn fallback_reason(&self) -> String {
        match self {
            LlmError::HttpStatus(status) => format!("HTTP {}", status),
            LlmError::EmptyResponse(_) => "Empty Gemini response".to_string(),
            LlmError::Communication(_) | LlmError::InvalidResponse(_) | LlmError::Other(_) => {
                "Gemini failure".to_string()
            }
        }
    }
}

/// Mock LLM provider for deterministic testing
///
/// Returns a pre-configured answer (or error) without any network calls and
/// remembers the last prompt it was given.
///
/// # Examples
///
/// ```
/// use focus_llm::{LlmError, MockProvider};
/// use focus_domain::AnalysisProvider;
///
/// # async fn example() {
/// let provider = MockProvider::failing(LlmError::HttpStatus(503));
/// assert!(provider.generate("any prompt").await.is_err());
/// assert_eq!(provider.call_count(), 1);
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct MockProvider {
    response: Result<String, LlmError>,
    call_count: Arc<AtomicUsize>,
    last_prompt: Arc<Mutex<Option<String>>>,
}

impl MockProvider {
    /// Create a provider that answers every prompt with `response`
    pub fn new(response: impl Into<String>) -> Self {
        Self::with_result(Ok(response.into()))
    }

    /// Create a provider that fails every call with `error`
    pub fn failing(error: LlmError) -> Self {
        Self::with_result(Err(error))
    }

    fn with_result(response: Result<String, LlmError>) -> Self {
        Self {
            response,
            call_count: Arc::new(AtomicUsize::new(0)),
            last_prompt: Arc::new(Mutex::new(None)),
        }
    }

    /// Get the number of times generate was called
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    /// Get the most recent prompt, if any
    pub fn last_prompt(&self) -> Option<String> {
        self.last_prompt
            .lock()
            .ok()
            .and_then(|prompt| prompt.clone())
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new("Default mock response")
    }
}

impl AnalysisProvider for MockProvider {
    type Error = LlmError;

    async fn generate(&self, prompt: &str) -> Result<String, Self::Error> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut last) = self.last_prompt.lock() {
            *last = Some(prompt.to_string());
        }
        self.response.clone()
    }
}

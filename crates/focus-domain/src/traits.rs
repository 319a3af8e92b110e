//! Trait definitions for external interactions
//!
//! These traits define the boundary between the analysis pipeline and the
//! remote text-generation service. Implementations live in `focus-llm`.

use std::future::Future;

/// A provider failure that can be explained to the end user
///
/// The reason is interpolated into a fallback assessment, so it must be short
/// and must not contain credentials or raw response bodies.
pub trait ProviderFailure: std::error::Error + Send + Sync + 'static {
    /// Short human-readable reason, e.g. `"HTTP 500"`
    fn fallback_reason(&self) -> String;
}

/// Trait for generating an analysis from a prompt
///
/// Implemented by the infrastructure layer (focus-llm). A single call is a
/// single attempt: implementations do not retry.
pub trait AnalysisProvider: Send + Sync {
    /// Error type for provider operations
    type Error: ProviderFailure;

    /// Send the prompt and return the model's raw text answer
    fn generate(&self, prompt: &str) -> impl Future<Output = Result<String, Self::Error>> + Send;
}

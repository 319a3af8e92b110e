//! Focus Analyzer Pipeline
//!
//! Turns an activity log into a structured analysis using an LLM, with a
//! guaranteed well-formed result on every path.
//!
//! # Architecture
//!
//! ```text
//! payload → normalize → prompt → LLM → extract JSON → validate → AnalysisResult
//!                                  ↘ any failure → fallback ↗
//! ```
//!
//! # Key Features
//!
//! - **Lenient extraction**: tolerates prose around the model's JSON object
//! - **Schema validation**: wrong-shaped model output falls back instead of
//!   leaking through (configurable)
//! - **Deterministic fallbacks**: each failure stage has a fixed reason string
//! - **Demo mode**: static analysis without any remote call
//!
//! # Example Usage
//!
//! ```no_run
//! use focus_analyzer::{Analyzer, AnalyzerConfig};
//! use focus_llm::MockProvider;
//! use serde_json::json;
//!
//! # async fn example() {
//! let llm = MockProvider::new(r#"{"periods": [], "switching_loops": [],
//!     "overall_assessment": "ok", "confidence_level": "high"}"#);
//! let analyzer = Analyzer::new(llm, AnalyzerConfig::default());
//!
//! let payload = json!({"logs": [{"timestamp": "2025-01-17T14:00:00Z", "url": "https://github.com"}]});
//! let outcome = analyzer.analyze_payload(&payload).await;
//! assert!(!outcome.is_fallback());
//! # }
//! ```

#![warn(missing_docs)]

mod analyzer;
mod config;
pub mod demo;
mod error;
pub mod fallback;
pub mod parser;
mod prompt;
mod types;
pub mod validate;


pub use analyzer::Analyzer;
pub use config::AnalyzerConfig;
pub use error::{AnalyzerError, INVALID_SCHEMA_REASON, UNPARSEABLE_REASON};
pub use prompt::PromptBuilder;
pub use types::AnalysisOutcome;

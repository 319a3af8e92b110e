//! Focus Analyzer Domain Layer
//!
//! This crate contains the data model shared by every other Focus Analyzer
//! crate and the pure functions that operate on it. It performs no I/O.
//!
//! ## Key Concepts
//!
//! - **ActivityRecord**: One normalized, timestamped domain visit
//! - **AnalysisResult**: The canonical response schema returned by the relay
//! - **Period**: A span of activity classified as focused or fragmented
//! - **SwitchingLoop**: A repeated alternation between a small set of domains
//!
//! ## Architecture
//!
//! - Pure data and pure functions only
//! - Infrastructure implementations (HTTP, storage) live in other crates
//! - Trait definitions for all external interactions

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod activity;
pub mod analysis;
pub mod domain;
pub mod normalize;
pub mod traits;

// Re-exports for convenience
pub use activity::{ActivityRecord, LogEntry};
pub use analysis::{AnalysisResult, ConfidenceLevel, Period, PeriodKind, SwitchingLoop};
pub use domain::{extract_domain, UNKNOWN_DOMAIN};
pub use normalize::{normalize_entries, resolve_log_sequence};
pub use traits::{AnalysisProvider, ProviderFailure};

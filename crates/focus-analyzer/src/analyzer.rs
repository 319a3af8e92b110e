//! Core Analyzer implementation

use crate::config::AnalyzerConfig;
use crate::demo::demo_analysis;
use crate::error::AnalyzerError;
use crate::fallback;
use crate::parser::extract_json_object;
use crate::prompt::PromptBuilder;
use crate::types::AnalysisOutcome;
use crate::validate::validate_analysis;
use focus_domain::{
    normalize_entries, resolve_log_sequence, ActivityRecord, AnalysisProvider, ProviderFailure,
};
use serde_json::Value;
use tracing::{debug, info, warn};

/// The Analyzer turns an activity log into an [`AnalysisOutcome`]
///
/// Every public entry point is infallible: failures at any stage are folded
/// into a fallback result.
pub struct Analyzer<P>
where
    P: AnalysisProvider,
{
    provider: P,
    config: AnalyzerConfig,
}

impl<P> Analyzer<P>
where
    P: AnalysisProvider,
{
    /// Create a new Analyzer
    pub fn new(provider: P, config: AnalyzerConfig) -> Self {
        Self { provider, config }
    }

    /// The active configuration
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// The underlying provider
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Analyze a request payload
    ///
    /// Accepts a bare array of log entries or `{ "logs": [...] }`. Anything
    /// else, including an empty array, yields the no-data fallback without
    /// contacting the provider.
    pub async fn analyze_payload(&self, payload: &Value) -> AnalysisOutcome {
        let Some(entries) = resolve_log_sequence(payload) else {
            warn!("No valid logs received");
            return fallback::no_data().into();
        };

        let records = normalize_entries(entries);
        self.analyze_records(&records).await
    }

    /// Analyze already-normalized records
    pub async fn analyze_records(&self, records: &[ActivityRecord]) -> AnalysisOutcome {
        if records.is_empty() {
            warn!("No valid logs received");
            return fallback::no_data().into();
        }

        info!("Analyzing {} activity records", records.len());

        if self.config.demo_mode {
            info!("Demo mode: returning static analysis");
            return demo_analysis(records).into();
        }

        match self.run(records).await {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!("Returning fallback analysis: {}", e);
                match e.fallback_reason() {
                    Some(reason) => fallback::unavailable(&reason).into(),
                    None => fallback::internal_error().into(),
                }
            }
        }
    }

    async fn run(&self, records: &[ActivityRecord]) -> Result<AnalysisOutcome, AnalyzerError> {
        let prompt = PromptBuilder::new(records).build()?;
        debug!("Prompt length: {} chars", prompt.len());

        let raw = self
            .provider
            .generate(&prompt)
            .await
            .map_err(|e| AnalyzerError::Provider(e.fallback_reason()))?;
        debug!("LLM response length: {} chars", raw.len());

        let value = extract_json_object(&raw).ok_or(AnalyzerError::Unparseable)?;

        if !self.config.strict_schema {
            return Ok(AnalysisOutcome::Passthrough(value));
        }

        let result = validate_analysis(value)?;
        info!(
            "Analysis complete: {} periods, {} switching loops, confidence {}",
            result.periods.len(),
            result.switching_loops.len(),
            result.confidence_level
        );

        Ok(result.into())
    }
}

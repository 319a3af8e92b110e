//! LLM prompt engineering for activity analysis

use focus_domain::ActivityRecord;

/// Builds the analysis prompt sent to the LLM
pub struct PromptBuilder<'a> {
    records: &'a [ActivityRecord],
}

impl<'a> PromptBuilder<'a> {
    /// Create a new prompt builder over normalized records
    pub fn new(records: &'a [ActivityRecord]) -> Self {
        Self { records }
    }

    /// Build the complete analysis prompt
    ///
    /// The log is embedded as pretty-printed JSON between the instructions and
    /// the output schema.
    pub fn build(&self) -> Result<String, serde_json::Error> {
        let logs = serde_json::to_string_pretty(self.records)?;

        let mut prompt = String::with_capacity(
            ANALYSIS_INSTRUCTIONS.len() + OUTPUT_FORMAT_REMINDER.len() + logs.len() + 16,
        );
        prompt.push_str(ANALYSIS_INSTRUCTIONS);
        prompt.push_str("\n\nLogs:\n");
        prompt.push_str(&logs);
        prompt.push_str("\n\n");
        prompt.push_str(OUTPUT_FORMAT_REMINDER);

        Ok(prompt)
    }
}

const ANALYSIS_INSTRUCTIONS: &str = r#"You are a behavioral analysis engine for browser activity.
You receive a chronological list of tab activations, each with an ISO-8601 timestamp and the active domain.

Rules:
- Use probabilistic language only ("likely", "may indicate")
- No judgment, no diagnosis
- A "focus" period is sustained attention on one or two domains
- A "fragmented" period is rapid switching across domains
- A switching loop is a repeated alternation between the same small set of domains
- Return VALID JSON ONLY"#;

const OUTPUT_FORMAT_REMINDER: &str = r#"Return this JSON:
{
  "periods": [
    {
      "startTime": "ISO-8601 timestamp",
      "endTime": "ISO-8601 timestamp",
      "type": "focus | fragmented",
      "duration_minutes": 0,
      "primary_domains": ["domain"],
      "explanation": ""
    }
  ],
  "switching_loops": [
    {
      "domains": ["domain", "domain"],
      "occurrences": 1,
      "likely_cause": ""
    }
  ],
  "overall_assessment": "",
  "confidence_level": "low | medium | high"
}"#;

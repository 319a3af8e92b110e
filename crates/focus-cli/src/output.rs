//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use focus_domain::{AnalysisResult, ConfidenceLevel, LogEntry, PeriodKind};
use serde_json::Value;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};
use url::Url;

/// Query parameter the rendering UI reads the result from.
pub const ANALYSIS_PARAM: &str = "analysis";

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a relay response.
    ///
    /// Bodies that do not match the result schema (pass-through mode) are
    /// printed as JSON with a warning.
    pub fn format_analysis(&self, body: &Value) -> Result<String> {
        if self.format == OutputFormat::Json {
            return Ok(serde_json::to_string_pretty(body)?);
        }

        match serde_json::from_value::<AnalysisResult>(body.clone()) {
            Ok(result) => Ok(self.format_result_table(&result)),
            Err(_) => Ok(format!(
                "{}\n{}",
                self.warning("Response does not match the analysis schema"),
                serde_json::to_string_pretty(body)?
            )),
        }
    }

    /// Format a typed analysis as tables.
    fn format_result_table(&self, result: &AnalysisResult) -> String {
        let mut out = Vec::new();

        if result.is_fallback() {
            out.push(self.warning("Fallback result: the analysis could not be completed"));
        }

        out.push(format!(
            "{} {}",
            self.colorize("Confidence:", "cyan"),
            self.confidence(result.confidence_level)
        ));
        out.push(result.overall_assessment.clone());
        out.push(String::new());

        if result.periods.is_empty() {
            out.push(self.info("No periods identified."));
        } else {
            let mut builder = Builder::default();
            builder.push_record(["Start", "End", "Type", "Minutes", "Domains", "Explanation"]);
            for period in &result.periods {
                builder.push_record(vec![
                    period.start_time.clone(),
                    period.end_time.clone(),
                    self.period_kind(period.kind),
                    format!("{:.0}", period.duration_minutes),
                    period.primary_domains.join(", "),
                    period.explanation.clone(),
                ]);
            }
            out.push(render(builder));
        }

        if result.switching_loops.is_empty() {
            out.push(self.info("No switching loops detected."));
        } else {
            let mut builder = Builder::default();
            builder.push_record(["Loop", "Occurrences", "Likely cause"]);
            for switching in &result.switching_loops {
                builder.push_record(vec![
                    switching.domains.join(" ↔ "),
                    switching.occurrences.to_string(),
                    switching.likely_cause.clone(),
                ]);
            }
            out.push(render(builder));
        }

        out.join("\n")
    }

    /// Format recorded log entries.
    pub fn format_logs(&self, logs: &[LogEntry]) -> Result<String> {
        if self.format == OutputFormat::Json {
            return Ok(serde_json::to_string_pretty(logs)?);
        }

        if logs.is_empty() {
            return Ok(self.colorize("No activities recorded.", "yellow"));
        }

        let mut builder = Builder::default();
        builder.push_record(["#", "Timestamp", "Domain", "URL"]);
        for (i, entry) in logs.iter().enumerate() {
            builder.push_record(vec![
                (i + 1).to_string(),
                entry.timestamp.clone(),
                entry.domain.clone().unwrap_or_default(),
                entry.url.clone().unwrap_or_default(),
            ]);
        }

        Ok(render(builder))
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Format tracking status.
    pub fn tracking_status(&self, enabled: bool, count: usize) -> String {
        let status = if enabled {
            self.success("Tracking active")
        } else {
            self.info("Tracking disabled")
        };
        format!("{}\n{} activities recorded", status, count)
    }

    fn confidence(&self, level: ConfidenceLevel) -> String {
        let color = match level {
            ConfidenceLevel::High => "green",
            ConfidenceLevel::Medium => "yellow",
            ConfidenceLevel::Low => "red",
        };
        self.colorize(level.as_str(), color)
    }

    fn period_kind(&self, kind: PeriodKind) -> String {
        let color = match kind {
            PeriodKind::Focus => "green",
            PeriodKind::Fragmented => "magenta",
        };
        self.colorize(kind.as_str(), color)
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            "magenta" => text.magenta().to_string(),
            _ => text.to_string(),
        }
    }
}

fn render(builder: Builder) -> String {
    let mut table = builder.build();
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));
    table.to_string()
}

/// Build the rendering UI link carrying `body` in the `analysis` parameter.
pub fn ui_url_for(ui_url: &str, body: &Value) -> Result<String> {
    let encoded = serde_json::to_string(body)?;
    let url = Url::parse_with_params(ui_url, &[(ANALYSIS_PARAM, encoded)])?;
    Ok(url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn analysis() -> Value {
        json!({
            "periods": [{
                "startTime": "2025-01-17T14:15:00Z",
                "endTime": "2025-01-17T14:30:00Z",
                "type": "focus",
                "duration_minutes": 15.0,
                "primary_domains": ["notion.so"],
                "explanation": "Sustained writing"
            }],
            "switching_loops": [{
                "domains": ["github.com", "stackoverflow.com"],
                "occurrences": 2,
                "likely_cause": "Debugging"
            }],
            "overall_assessment": "Mostly focused",
            "confidence_level": "medium"
        })
    }

    #[test]
    fn test_table_format() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_analysis(&analysis()).unwrap();
        assert!(output.contains("Confidence: medium"));
        assert!(output.contains("notion.so"));
        assert!(output.contains("Occurrences"));
        assert!(output.contains("github.com ↔ stackoverflow.com"));
        assert!(!output.contains("Fallback"));
    }

    #[test]
    fn test_fallback_notice() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let body = json!({
            "periods": [],
            "switching_loops": [],
            "overall_assessment": "Analysis temporarily unavailable (HTTP 500).",
            "confidence_level": "low",
            "is_fallback": true
        });
        let output = formatter.format_analysis(&body).unwrap();
        assert!(output.contains("⚠ Fallback result"));
        assert!(output.contains("No periods identified."));
        assert!(output.contains("No switching loops detected."));
    }

    #[test]
    fn test_json_format_is_verbatim() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_analysis(&analysis()).unwrap();
        let reparsed: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(reparsed, analysis());
    }

    #[test]
    fn test_off_schema_body() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_analysis(&json!({"a": 1})).unwrap();
        assert!(output.contains("does not match"));
        assert!(output.contains("\"a\": 1"));
    }

    #[test]
    fn test_empty_logs() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_logs(&[]).unwrap();
        assert!(output.contains("No activities recorded"));
    }

    #[test]
    fn test_logs_table() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let logs = vec![LogEntry::visit("t1", "https://x.com/p", "x.com")];
        let output = formatter.format_logs(&logs).unwrap();
        assert!(output.contains("Timestamp"));
        assert!(output.contains("https://x.com/p"));
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        assert_eq!(formatter.success("test"), "✓ test");
    }

    #[test]
    fn test_ui_url_round_trips_result() {
        let link = ui_url_for("http://localhost:5173", &analysis()).unwrap();
        assert!(link.starts_with("http://localhost:5173/?analysis="));

        let parsed = Url::parse(&link).unwrap();
        let (key, value) = parsed.query_pairs().next().unwrap();
        assert_eq!(key, ANALYSIS_PARAM);
        assert_eq!(serde_json::from_str::<Value>(&value).unwrap(), analysis());
    }

    #[test]
    fn test_ui_url_rejects_garbage_base() {
        assert!(ui_url_for("not a url", &analysis()).is_err());
    }
}

//! Configuration for the Analyzer

use serde::{Deserialize, Serialize};

/// Configuration for the Analyzer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Validate extracted model output against the result schema and fall back
    /// on mismatch. When off, the extracted JSON is returned verbatim.
    pub strict_schema: bool,

    /// Skip the remote call and answer with the static demo analysis
    pub demo_mode: bool,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            strict_schema: true,
            demo_mode: false,
        }
    }
}

impl AnalyzerConfig {
    /// Preset that passes extracted output through without validation
    pub fn passthrough() -> Self {
        Self {
            strict_schema: false,
            demo_mode: false,
        }
    }

    /// Preset for presentations: no remote calls at all
    pub fn demo() -> Self {
        Self {
            strict_schema: true,
            demo_mode: true,
        }
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

//! Configuration file parsing for the Relay.
//!
//! Loads settings from an optional TOML file, then applies environment
//! overrides (`PORT`, `GEMINI_API_KEY`, `GEMINI_MODEL`, `FOCUS_DEMO_MODE`).

use focus_analyzer::AnalyzerConfig;
use focus_llm::gemini::{GeminiConfig, DEFAULT_BASE_URL, DEFAULT_MODEL};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// Relay configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse config TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// A value is present but unusable
    #[error("Invalid configuration value for {field}: {value}")]
    InvalidValue {
        /// Offending field or variable
        field: String,
        /// Raw value
        value: String,
    },
}

/// Relay configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RelayConfig {
    /// Bind address (e.g., "127.0.0.1")
    pub bind_address: String,

    /// Bind port (default: 3001)
    pub bind_port: u16,

    /// Gemini API key; an empty key is allowed and makes every call fall back
    pub gemini_api_key: String,

    /// Gemini API base URL
    pub gemini_base_url: String,

    /// Gemini model name
    pub gemini_model: String,

    /// Optional outbound request timeout in seconds
    pub request_timeout_secs: Option<u64>,

    /// Answer with the static demo analysis instead of calling Gemini
    pub demo_mode: bool,

    /// Validate model output against the result schema
    pub strict_schema: bool,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1".to_string(),
            bind_port: 3001,
            gemini_api_key: String::new(),
            gemini_base_url: DEFAULT_BASE_URL.to_string(),
            gemini_model: DEFAULT_MODEL.to_string(),
            request_timeout_secs: None,
            demo_mode: false,
            strict_schema: true,
        }
    }
}

impl RelayConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Parse configuration from a TOML string
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Apply overrides from the process environment
    pub fn with_env_overrides(self) -> Result<Self, ConfigError> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable lookup
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(port) = lookup("PORT") {
            self.bind_port = port.trim().parse().map_err(|_| ConfigError::InvalidValue {
                field: "PORT".to_string(),
                value: port.clone(),
            })?;
        }
        if let Some(key) = lookup("GEMINI_API_KEY") {
            self.gemini_api_key = key;
        }
        if let Some(model) = lookup("GEMINI_MODEL") {
            self.gemini_model = model;
        }
        if let Some(flag) = lookup("FOCUS_DEMO_MODE") {
            self.demo_mode = parse_bool_flag(&flag).ok_or_else(|| ConfigError::InvalidValue {
                field: "FOCUS_DEMO_MODE".to_string(),
                value: flag.clone(),
            })?;
        }
        Ok(self)
    }

    /// Get the full bind address (address:port)
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.bind_port)
    }

    /// Whether an API key is configured
    pub fn has_api_key(&self) -> bool {
        !self.gemini_api_key.trim().is_empty()
    }

    /// Provider settings derived from this configuration
    pub fn gemini_config(&self) -> GeminiConfig {
        let config = GeminiConfig::new(self.gemini_api_key.clone(), self.gemini_model.clone())
            .with_base_url(self.gemini_base_url.clone());
        match self.request_timeout_secs {
            Some(secs) => config.with_timeout(Duration::from_secs(secs)),
            None => config,
        }
    }

    /// Pipeline settings derived from this configuration
    pub fn analyzer_config(&self) -> AnalyzerConfig {
        AnalyzerConfig {
            strict_schema: self.strict_schema,
            demo_mode: self.demo_mode,
        }
    }
}

fn parse_bool_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

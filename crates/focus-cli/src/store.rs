//! Persistent tracking state.
//!
//! Holds `{ trackingEnabled, logs }` the same way a browser extension keeps it
//! in local storage. Every read goes to the backing store; nothing is cached.

use crate::error::Result;
use focus_domain::LogEntry;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Everything the tracker persists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredState {
    /// Whether visits are being recorded
    #[serde(default)]
    pub tracking_enabled: bool,

    /// Recorded visits in insertion order
    #[serde(default)]
    pub logs: Vec<LogEntry>,
}

/// Key-value style storage for [`StoredState`].
pub trait LogStore {
    /// Read the current state.
    fn load(&self) -> Result<StoredState>;

    /// Replace the stored state.
    fn save(&self, state: &StoredState) -> Result<()>;

    /// Read the tracking flag.
    fn tracking_enabled(&self) -> Result<bool> {
        Ok(self.load()?.tracking_enabled)
    }

    /// Persist the tracking flag, leaving logs untouched.
    fn set_tracking(&self, enabled: bool) -> Result<()> {
        let mut state = self.load()?;
        state.tracking_enabled = enabled;
        self.save(&state)
    }

    /// Append one entry to the log.
    fn append(&self, entry: LogEntry) -> Result<()> {
        let mut state = self.load()?;
        state.logs.push(entry);
        self.save(&state)
    }

    /// All recorded entries.
    fn logs(&self) -> Result<Vec<LogEntry>> {
        Ok(self.load()?.logs)
    }

    /// Drop every recorded entry, returning how many were removed.
    fn clear_logs(&self) -> Result<usize> {
        let mut state = self.load()?;
        let removed = state.logs.len();
        state.logs.clear();
        self.save(&state)?;
        Ok(removed)
    }
}

/// A [`LogStore`] backed by a single JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Use the file at `path`; it is created on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The default store (`~/.focus-analyzer/state.json`).
    pub fn default_location() -> Result<Self> {
        Ok(Self::new(crate::config::app_dir()?.join("state.json")))
    }

    /// Backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LogStore for JsonFileStore {
    fn load(&self) -> Result<StoredState> {
        if !self.path.exists() {
            return Ok(StoredState::default());
        }
        let contents = fs::read_to_string(&self.path)?;
        if contents.trim().is_empty() {
            return Ok(StoredState::default());
        }
        Ok(serde_json::from_str(&contents)?)
    }

    fn save(&self, state: &StoredState) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        // Write beside the target, then rename over it
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_string_pretty(state)?)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

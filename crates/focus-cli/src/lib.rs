//! Focus Analyzer CLI library.
//!
//! Records browsing activity into a local store, sends it to the relay for
//! analysis, and renders the result in the terminal or as a link to the web UI.

pub mod cli;
pub mod client;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod sample;
pub mod store;
pub mod tracker;

pub use cli::{Cli, Command};
pub use client::RelayClient;
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
pub use store::{JsonFileStore, LogStore, StoredState};

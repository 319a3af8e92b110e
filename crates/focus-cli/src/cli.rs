//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};

/// Focus Analyzer CLI - Record browsing activity and analyze your focus.
#[derive(Debug, Parser)]
#[command(name = "focus")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "FOCUS_CONFIG")]
    pub config: Option<String>,

    /// Tracking state file path
    #[arg(short, long, global = true, env = "FOCUS_STORE")]
    pub store: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Turn activity tracking on or off
    Track(TrackArgs),

    /// Record a page visit
    Visit(VisitArgs),

    /// Inspect or clear recorded activity
    Logs(LogsArgs),

    /// Send recorded activity to the relay for analysis
    Analyze(AnalyzeArgs),

    /// Check that the relay is up
    Health(HealthArgs),
}

/// Arguments for the track command.
#[derive(Debug, Parser)]
pub struct TrackArgs {
    #[command(subcommand)]
    pub action: TrackAction,
}

/// Tracking actions.
#[derive(Debug, Subcommand)]
pub enum TrackAction {
    /// Start recording visits
    Start,
    /// Stop recording visits
    Stop,
    /// Show tracking state and log size
    Status,
}

/// Arguments for the visit command.
#[derive(Debug, Parser)]
pub struct VisitArgs {
    /// Full URL of the visited page
    pub url: String,

    /// ISO-8601 timestamp (defaults to now)
    #[arg(short, long)]
    pub timestamp: Option<String>,
}

/// Arguments for the logs command.
#[derive(Debug, Parser)]
pub struct LogsArgs {
    #[command(subcommand)]
    pub action: LogsAction,
}

/// Log actions.
#[derive(Debug, Subcommand)]
pub enum LogsAction {
    /// List recorded visits
    Show {
        /// Only show the most recent entries
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Print the number of recorded visits
    Count,
    /// Delete every recorded visit
    Clear {
        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Arguments for the analyze command.
#[derive(Debug, Parser)]
pub struct AnalyzeArgs {
    /// Analyze the built-in sample log instead of recorded activity
    #[arg(long)]
    pub sample: bool,

    /// Print a link to the rendering UI instead of the result
    #[arg(long)]
    pub ui_url: bool,

    /// Relay URL (overrides the configuration file)
    #[arg(short, long, env = "FOCUS_RELAY_URL")]
    pub relay: Option<String>,
}

/// Arguments for the health command.
#[derive(Debug, Parser)]
pub struct HealthArgs {
    /// Relay URL (overrides the configuration file)
    #[arg(short, long, env = "FOCUS_RELAY_URL")]
    pub relay: Option<String>,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
        }
    }
}

//! Command-line argument parsing.

use clap::Parser;
use std::path::PathBuf;

/// Landing gear control sequence simulator.
#[derive(Parser, Debug, Clone)]
#[command(name = "gearsim")]
#[command(about = "Runs a deploy-then-retract landing gear simulation")]
#[command(version)]
pub struct Cli {
    /// JSON configuration file; defaults are used if it does not exist.
    #[arg(long, default_value = gearsim::config::DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Override the configured log level (trace, debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Print the scenario report as JSON on stdout when done.
    #[arg(long)]
    pub report: bool,
}

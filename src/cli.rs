use std::path::PathBuf;

use clap::Parser;

/// Session-scoped roster TUI. Users, their to-do lists, and the current
/// selection live in memory and vanish when the session ends.
#[derive(Parser)]
#[command(name = "roster", version, about = "Per-user task lists in the terminal")]
pub struct Cli {
    /// Directory for the session log file (defaults to ~/.roster).
    #[arg(long)]
    pub log_dir: Option<PathBuf>,

    /// Log level: trace, debug, info, warn or error.
    #[arg(long)]
    pub log_level: Option<String>,
}

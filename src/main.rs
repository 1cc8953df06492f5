//! # Roster - per-user task lists in the terminal
//!
//! A small terminal application for managing a roster of users and, per user,
//! a list of to-do items with completion state.
//!
//! ## Key Features
//!
//! - **Per-User Task Lists**: add users, select one, and work that user's
//!   to-do list (add, toggle, edit, delete)
//! - **Selection-Driven View**: the tasks pane and the completion summary are
//!   derived from the current selection on every frame
//! - **Light/Dark Themes**: toggle the whole interface between two palettes
//!   with a single key
//! - **Session-Scoped State**: everything lives in memory and vanishes when
//!   the session ends; nothing is written to disk except a diagnostic log
//!
//! ## Quick Start
//!
//! ```bash
//! # Launch the interface
//! roster
//!
//! # Keep the session log somewhere specific
//! roster --log-dir /tmp/roster-logs --log-level debug
//! ```
//!
//! ## Keys
//!
//! `Tab` switches between the Users and Tasks panes. `a` adds a user or task,
//! `Enter`/`Space` selects a user or toggles a task, `e` edits and `d` deletes
//! the task under the cursor, `x` clears the selection, `t` toggles the theme,
//! `h` shows help and `q` quits.
//!
//! Empty or whitespace-only submissions are ignored without comment.

use std::path::PathBuf;

use clap::Parser;

pub mod cli;
pub mod logging;
pub mod store;
pub mod theme;
pub mod user;
pub mod tui {
    pub mod app;
    pub mod enums;
    pub mod input;
    pub mod run;
    pub mod utils;
}

use cli::Cli;

fn main() {
    let cli = Cli::parse();

    // Determine the log directory
    let log_dir = cli.log_dir.unwrap_or_else(|| {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        PathBuf::from(home).join(".roster")
    });
    let log_level = cli
        .log_level
        .unwrap_or_else(|| logging::default_log_level().to_string());

    // The log is diagnostics only; a failed init must not block the session.
    let _logger = match logging::init_logging(&log_level, &log_dir) {
        Ok(handle) => Some(handle),
        Err(err) => {
            eprintln!("warning: logging disabled: {err}");
            None
        }
    };

    log::info!(
        "session start version={} log_level={}",
        env!("CARGO_PKG_VERSION"),
        log_level
    );

    if let Err(err) = tui::run::run_tui() {
        eprintln!("Error running TUI: {}", err);
        std::process::exit(1);
    }

    log::info!("session end");
}

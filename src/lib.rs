//! worklog library root.
//! Exposes the CLI parser, the high-level run() function and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod storage;
pub mod ui;
pub mod utils;

use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::{Session, Termination};
use crate::errors::AppResult;
use crate::storage::ActivityLog;
use crate::ui::Console;
use clap::Parser;
use std::io;

/// Entry point used by main.rs
pub fn run() -> AppResult<Termination> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config once
    let cfg = Config::load()?;

    // 3️⃣ command line override of the log file
    let log_file = cli.file.as_deref().unwrap_or(&cfg.log_file);

    // 4️⃣ run the interactive session on the terminal
    let stdin = io::stdin();
    let console = Console::new(stdin.lock(), io::stdout());
    let mut session = Session::new(utils::expand_tilde(log_file), console);
    if cfg.activity_log {
        session = session.with_activity_log(ActivityLog::new(Config::activity_log_file()));
    }

    session.run()
}

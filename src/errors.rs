//! Unified application error type.
//! All modules (storage, core, ui, config) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Standard input was closed while a prompt was waiting for an answer.
    #[error("Input closed")]
    InputClosed,

    // ---------------------------
    // Storage
    // ---------------------------
    #[error("Log file not found: {}", .0.display())]
    StorageMissing(PathBuf),

    #[error("Unable to write log file {}: {reason}", path.display())]
    StorageUnwritable { path: PathBuf, reason: String },

    #[error("Log file error at line {line}: {reason}")]
    MalformedRecord { line: u64, reason: String },

    // ---------------------------
    // Parsing errors (user input)
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time spent: {0}")]
    InvalidTimeSpent(String),

    #[error("Invalid choice: {0}")]
    InvalidChoice(String),

    #[error("Invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type AppResult<T> = Result<T, AppError>;

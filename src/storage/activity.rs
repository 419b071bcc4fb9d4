use crate::errors::AppResult;
use chrono::Local;
use csv::WriterBuilder;
use std::fs::{self, OpenOptions};
use std::path::PathBuf;

/// Append-only internal log of what the session did (load, create, new, save).
#[derive(Debug, Clone)]
pub struct ActivityLog {
    path: PathBuf,
}

impl ActivityLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Write an internal log line: `date, operation, target, message`.
    pub fn ttlog(&self, operation: &str, target: &str, message: &str) -> AppResult<()> {
        // Timestamp locale, formattato in ISO 8601
        let now = Local::now().to_rfc3339();

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        let mut wtr = WriterBuilder::new().has_headers(false).from_writer(file);
        wtr.write_record([now.as_str(), operation, target, message])?;
        wtr.flush()?;

        Ok(())
    }
}

//! Rendering of log entries for the console.

use crate::models::LogEntry;
use crate::utils::mins2readable;

/// `Date: … | Task Name: … | Time Spent: … | Notes: …` on a single line.
pub fn entry_line(entry: &LogEntry) -> String {
    format!(
        "Date: {} | Task Name: {} | Time Spent: {} min ({}) | Notes: {}",
        entry.date_str(),
        entry.task_name,
        entry.time_spent,
        mins2readable(entry.time_spent),
        entry.notes
    )
}

/// List-view variant, prefixed with the positional index.
pub fn indexed_line(index: usize, entry: &LogEntry) -> String {
    format!("{} {}", index, entry_line(entry))
}

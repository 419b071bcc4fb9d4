use crate::errors::{AppError, AppResult};
use crate::utils::date::{format_date, parse_date};
use chrono::NaiveDate;

/// Number of fields of a stored record: Date, Task Name, Time Spent, Notes.
pub const FIELD_COUNT: usize = 4;

/// One recorded task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub date: NaiveDate,      // ⇔ "Date" (TEXT "YYYY-MM-DD")
    pub task_name: String,    // ⇔ "Task Name"
    pub time_spent: u32,      // ⇔ "Time Spent" (minutes, bare integer)
    pub notes: String,        // ⇔ "Notes"
}

impl LogEntry {
    pub fn new(
        date: NaiveDate,
        task_name: impl Into<String>,
        time_spent: u32,
        notes: impl Into<String>,
    ) -> Self {
        Self {
            date,
            task_name: task_name.into(),
            time_spent,
            notes: notes.into(),
        }
    }

    pub fn date_str(&self) -> String {
        format_date(&self.date)
    }

    /// Convert a stored record into an entry.
    ///
    /// All four fields are copied; Date and Time Spent are also type-converted.
    /// `line` is only used to build the error.
    pub fn from_fields(fields: &[&str], line: u64) -> AppResult<Self> {
        if fields.len() != FIELD_COUNT {
            return Err(AppError::MalformedRecord {
                line,
                reason: format!("expected {} fields, found {}", FIELD_COUNT, fields.len()),
            });
        }

        let date = parse_date(fields[0]).map_err(|e| AppError::MalformedRecord {
            line,
            reason: e.to_string(),
        })?;

        let time_spent = parse_time_spent(fields[2]).map_err(|e| AppError::MalformedRecord {
            line,
            reason: e.to_string(),
        })?;

        Ok(Self {
            date,
            task_name: fields[1].to_string(),
            time_spent,
            notes: fields[3].to_string(),
        })
    }

    /// Fields in storage order.
    pub fn to_fields(&self) -> [String; FIELD_COUNT] {
        [
            self.date_str(),
            self.task_name.clone(),
            self.time_spent.to_string(),
            self.notes.clone(),
        ]
    }
}

/// Parse a minutes value typed by the user or read from the log file.
pub fn parse_time_spent(s: &str) -> AppResult<u32> {
    s.trim()
        .parse::<u32>()
        .map_err(|_| AppError::InvalidTimeSpent(s.to_string()))
}

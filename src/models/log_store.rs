use super::log_entry::LogEntry;
use crate::core::search::distinct_dates;
use chrono::NaiveDate;

/// A stored line that could not be turned into a `LogEntry`.
///
/// It is kept out of the entries but written back verbatim, in its original
/// place, on save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedRecord {
    pub line: u64,
    /// Number of entries that preceded this record in the file.
    pub position: usize,
    /// Raw field bytes; they need not be valid UTF-8.
    pub fields: Vec<Vec<u8>>,
    pub reason: String,
}

/// The full ordered set of entries of a session. Insertion order is display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogStore {
    entries: Vec<LogEntry>,
    rejected: Vec<RejectedRecord>,
}

impl LogStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: Vec<LogEntry>) -> Self {
        Self {
            entries,
            rejected: Vec::new(),
        }
    }

    pub fn push(&mut self, entry: LogEntry) {
        self.entries.push(entry);
    }

    pub(crate) fn push_rejected(&mut self, record: RejectedRecord) {
        self.rejected.push(record);
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn rejected(&self) -> &[RejectedRecord] {
        &self.rejected
    }

    pub fn iter(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Distinct dates with at least one entry, ascending.
    pub fn dates(&self) -> Vec<NaiveDate> {
        distinct_dates(&self.entries)
    }
}

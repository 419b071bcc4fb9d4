//! Queries over the entries of a log store.

use crate::models::LogEntry;
use chrono::NaiveDate;
use regex::Regex;
use std::collections::BTreeSet;

#[derive(Debug, Clone)]
pub enum Query {
    /// Entries recorded on this date.
    Date(NaiveDate),
    /// Entries whose time spent equals this many minutes.
    TimeSpent(u32),
    /// Entries whose task name or notes contain this text (case-sensitive).
    Exact(String),
    /// Entries whose task name or notes match this expression anywhere.
    Pattern(Regex),
}

impl Query {
    pub fn matches(&self, entry: &LogEntry) -> bool {
        match self {
            Query::Date(d) => entry.date == *d,
            Query::TimeSpent(mins) => entry.time_spent == *mins,
            Query::Exact(text) => {
                entry.task_name.contains(text.as_str()) || entry.notes.contains(text.as_str())
            }
            Query::Pattern(re) => re.is_match(&entry.task_name) || re.is_match(&entry.notes),
        }
    }
}

/// Matching entries, in store order.
pub fn search<'a>(entries: &'a [LogEntry], query: &Query) -> Vec<&'a LogEntry> {
    entries.iter().filter(|e| query.matches(e)).collect()
}

/// Distinct dates present in `entries`, ascending.
pub fn distinct_dates(entries: &[LogEntry]) -> Vec<NaiveDate> {
    entries
        .iter()
        .map(|e| e.date)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

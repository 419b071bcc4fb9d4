pub mod log_entry;
pub mod log_store;

pub use log_entry::LogEntry;
pub use log_store::{LogStore, RejectedRecord};

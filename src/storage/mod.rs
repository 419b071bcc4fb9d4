pub mod activity;
pub mod csv_store;

pub use activity::ActivityLog;

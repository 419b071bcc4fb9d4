pub mod search;
pub mod session;

pub use session::{Session, Termination};

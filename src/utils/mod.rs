pub mod date;
pub mod formatting;
pub mod path;

pub use formatting::mins2readable;
pub use path::expand_tilde;

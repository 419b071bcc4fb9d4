//! Formatting utilities used for CLI output.

/// Human readable duration shown next to the raw minutes, e.g. `01h 30m`.
pub fn mins2readable(mins: u32) -> String {
    format!("{:02}h {:02}m", mins / 60, mins % 60)
}

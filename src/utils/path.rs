//! Path utilities: expand ~ in user supplied paths.

use std::path::PathBuf;

/// `~/notes/log.csv` → `$HOME/notes/log.csv`; anything else is taken as is.
pub fn expand_tilde(path: &str) -> PathBuf {
    let path = path.trim();
    if let Some(rest) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    PathBuf::from(path)
}

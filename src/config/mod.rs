use crate::errors::{AppError, AppResult};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Log file used when nothing else is configured.
pub const DEFAULT_LOG_FILE: &str = "work_log.csv";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default = "default_log_file")]
    pub log_file: String,
    #[serde(default = "default_activity_log")]
    pub activity_log: bool,
}

fn default_log_file() -> String {
    DEFAULT_LOG_FILE.to_string()
}
fn default_activity_log() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_file: default_log_file(),
            activity_log: default_activity_log(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("worklog")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".worklog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("worklog.conf")
    }

    /// Return the full path of the internal activity log
    pub fn activity_log_file() -> PathBuf {
        Self::config_dir().join("worklog.log")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?;
        Self::parse(&content).map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Parse a YAML document; missing fields take their defaults.
    pub fn from_yaml(content: &str) -> AppResult<Self> {
        Self::parse(content).map_err(|e| AppError::Config(e.to_string()))
    }

    fn parse(content: &str) -> Result<Self, serde_yaml::Error> {
        // an empty document is not a mapping
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }
}

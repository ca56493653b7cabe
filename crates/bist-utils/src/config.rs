//! Configuration management utilities

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const DEFAULT_LOG_FILTER: &str = "info";
const DEFAULT_LOG_FILE: &str = "bist-tui.log";

/// Logging configuration shared by binaries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// `EnvFilter` directive used when `RUST_LOG` is not set
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
    /// File receiving log lines; the terminal itself belongs to the UI
    pub log_file: PathBuf,
}

fn default_log_filter() -> String {
    DEFAULT_LOG_FILTER.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_LOG_FILE)
    }
}

impl Config {
    /// Log to `log_file` with the default `info` filter
    pub fn new(log_file: impl Into<PathBuf>) -> Self {
        Self {
            log_filter: default_log_filter(),
            log_file: log_file.into(),
        }
    }

    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }
}

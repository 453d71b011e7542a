//! Persistence and logging configuration types.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Where and for how long group layouts are remembered.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistenceConfig {
    /// Cache entry holding every group's saved state.
    pub cache_key: String,
    /// Cache entry lifetime in seconds (valid range: 60-7776000).
    pub ttl_secs: u64,
    /// File backing the TTL cache. Defaults to the platform cache dir.
    pub cache_path: Option<PathBuf>,
    /// Directory for per-group JSON state files.
    pub group_state_dir: Option<PathBuf>,
}

impl Default for PersistenceConfig {
    fn default() -> Self {
        Self {
            cache_key: "window_groups".into(),
            ttl_secs: 7 * 24 * 60 * 60,
            cache_path: None,
            group_state_dir: None,
        }
    }
}

/// Log level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}

impl LoggingConfig {
    /// `EnvFilter` directive for the casement crates.
    pub fn directive(&self) -> String {
        format!("casement={}", self.level.as_str())
    }
}

// =============================================================================
// Tests
// =============================================================================

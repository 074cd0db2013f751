//! Configuration management

use crate::error::{ChipsError, Result};
use crate::infrastructure::ChipLayout;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "chips.toml";

/// Verbosity of the stderr log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Directive understood by `tracing_subscriber::EnvFilter`
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "error" => Ok(LogLevel::Error),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            "trace" => Ok(LogLevel::Trace),
            _ => Err(format!("Invalid log level: {}", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub log_level: LogLevel,
    pub layout: ChipLayout,
}

impl Config {
    /// Load config from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ChipsError::ConfigNotFound(path.to_path_buf())
            } else {
                ChipsError::Io(e)
            }
        })?;

        toml::from_str(&contents).map_err(|e| {
            ChipsError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })
    }

    /// Resolve the config to use.
    ///
    /// An explicit path wins, then `CHIPS_CONFIG`, then `chips.toml` in `dir`.
    /// Only the last one may be absent, in which case defaults apply.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from_file(path);
        }

        if let Ok(path) = std::env::var("CHIPS_CONFIG") {
            return Self::load_from_file(&PathBuf::from(path));
        }

        let local = dir.join(DEFAULT_CONFIG_FILE);
        if local.is_file() {
            return Self::load_from_file(&local);
        }

        Ok(Config::default())
    }

    /// Log level after applying the `CHIPS_LOG` environment override
    pub fn effective_log_level(&self) -> Result<LogLevel> {
        match std::env::var("CHIPS_LOG") {
            Ok(level) => LogLevel::from_str(&level).map_err(ChipsError::Config),
            Err(_) => Ok(self.log_level),
        }
    }
}

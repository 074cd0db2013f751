//! Error types for chips

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for chips
#[derive(Debug, Error)]
pub enum ChipsError {
    #[error("Tag index {index} out of range (list has {len} tags)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Script error on line {line}: {message}")]
    Script { line: usize, message: String },

    #[error("Config file not found: {0}")]
    ConfigNotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ChipsError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            ChipsError::Script { .. } => 2,
            ChipsError::IndexOutOfRange { .. } => 3,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            ChipsError::Script { line, message } => {
                format!(
                    "Script error on line {}: {}\n\n\
                    Valid commands:\n\
                    • load <raw>, type <text>, blur\n\
                    • rename <index> <text>, delete <index>\n\
                    • mark <tag,tag,...>, key <backspace|delete>\n\
                    • press <middle|primary|secondary> <x> <y>, release <x> <y>\n\
                    • show",
                    line, message
                )
            }
            ChipsError::IndexOutOfRange { index, len } => {
                format!(
                    "Tag index {} out of range (list has {} tags)\n\n\
                    Suggestions:\n\
                    • Indexes start at 0\n\
                    • Use 'show' to print the current tags",
                    index, len
                )
            }
            ChipsError::ConfigNotFound(path) => {
                format!(
                    "Config file not found: {}\n\n\
                    Suggestions:\n\
                    • Check the path passed to --config\n\
                    • Unset CHIPS_CONFIG to fall back to chips.toml or defaults",
                    path.display()
                )
            }
            ChipsError::Config(msg) => {
                if msg.contains("Invalid log level") {
                    format!(
                        "{}\n\n\
                        Valid levels: error, warn, info, debug, trace\n\
                        Example: chips --log-level debug split 'a,b'",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using ChipsError
pub type Result<T> = std::result::Result<T, ChipsError>;

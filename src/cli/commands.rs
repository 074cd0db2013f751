//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "chips")]
#[command(about = "Comma-separated tag list tokenizer and editor", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (default: $CHIPS_CONFIG, then ./chips.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL")]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Split a tag string and print one tag per line
    Split {
        /// Raw tag string (read from stdin when omitted)
        #[arg(value_name = "RAW")]
        raw: Option<String>,

        /// Drop empty tags from the output
        #[arg(long)]
        drop_empty: bool,
    },

    /// Join tags into the canonical string
    Join {
        #[arg(value_name = "TAG", required = true)]
        tags: Vec<String>,
    },

    /// Run an editing script against a tag string
    Session {
        /// Initial canonical value
        #[arg(long, default_value = "")]
        value: String,

        /// Script file (read from stdin when omitted)
        #[arg(long, value_name = "PATH")]
        script: Option<PathBuf>,

        /// Write the final canonical value to this file
        #[arg(long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
}

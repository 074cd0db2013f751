//! CLI layer - Command-line interface

pub mod commands;
pub mod output;
pub mod script;

pub use commands::{Cli, Commands};
pub use output::{format_snapshot, format_tag_list};
pub use script::{parse_script, ScriptCommand};

//! Infrastructure layer - Configuration, geometry and logging

pub mod config;
pub mod layout;
pub mod logging;

pub use config::{Config, LogLevel};
pub use layout::ChipLayout;
pub use logging::init_logging;

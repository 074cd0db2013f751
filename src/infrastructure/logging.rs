//! Structured logging to stderr.
//!
//! stdout carries tag output and session snapshots, so logs never go there.

use crate::infrastructure::LogLevel;
use tracing::trace;
use tracing_subscriber::EnvFilter;

fn filter_for(level: LogLevel) -> EnvFilter {
    EnvFilter::new(level.as_filter_str())
}

/// Install the global subscriber.
///
/// A second call is ignored; the first subscriber wins.
pub fn init_logging(level: LogLevel) {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter_for(level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        trace!("global subscriber already installed, keeping it");
    }
}

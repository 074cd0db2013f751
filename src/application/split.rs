//! Split use case

use crate::domain::tags::{drop_empty, tokenize};
use tracing::debug;

#[derive(Debug, Clone, Copy, Default)]
pub struct SplitOptions {
    /// Remove empty tags produced by `", ,"` style input
    pub drop_empty: bool,
}

/// Split a canonical string into its tags
pub fn split(raw: &str, options: SplitOptions) -> Vec<String> {
    let mut tags = tokenize(raw);
    if options.drop_empty {
        tags = drop_empty(tags);
    }

    debug!(tags = tags.len(), drop_empty = options.drop_empty, "split input");
    tags
}

//! Tag system

pub mod editor;
pub mod pending;
pub mod tokenizer;

// Re-export main types
pub use editor::{CommitLog, CommitSink, EditorWarning, TagListEditor};
pub use pending::{PendingAction, PendingState};
pub use tokenizer::{drop_empty, join, tokenize};

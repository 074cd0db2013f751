//! Application layer - Use cases and orchestration

pub mod session;
pub mod split;

pub use session::{InputEvent, Key, Session, Snapshot};
pub use split::{split, SplitOptions};

//! chips - Comma-separated tag list tokenizer and editor
//!
//! Turns a free-form delimited string into an ordered list of tags, honoring
//! quoted segments, and keeps that list consistent with insert, rename and
//! delete edits before serializing it back to the canonical string.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::ChipsError;

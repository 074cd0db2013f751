//! Pending input buffer classification

use regex::Regex;
use std::sync::OnceLock;

/// A closed double-quoted segment followed by a delimiter: `"a, b",`
fn quote_complete_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r#"".+","#).unwrap())
}

fn quote_open_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r#"".+"#).unwrap())
}

fn quote_closed_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r#"".+""#).unwrap())
}

/// Where the text typed so far stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingState {
    /// Nothing typed
    Idle,
    /// Plain text, committed on blur
    Buffering,
    /// An opening `"` without its closing partner
    QuoteOpenUnclosed,
    /// A balanced quoted segment waiting for the `,` that commits it
    QuoteClosedPendingComma,
}

impl PendingState {
    pub fn classify(text: &str) -> Self {
        if text.is_empty() {
            PendingState::Idle
        } else if has_unclosed_quote(text) {
            PendingState::QuoteOpenUnclosed
        } else if text.contains('"') && quote_closed_regex().is_match(text) {
            PendingState::QuoteClosedPendingComma
        } else {
            PendingState::Buffering
        }
    }
}

/// What typing a new buffer value should do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingAction {
    /// Commit this text as a new tag and clear the buffer
    Commit(String),
    /// Clear the buffer without committing
    Discard,
    /// Keep the text in the buffer
    Buffer,
}

impl PendingAction {
    /// Decide what to do with the full buffer text after a keystroke
    pub fn for_input(text: &str) -> Self {
        if text.contains('"') {
            if is_quote_complete(text) {
                PendingAction::Commit(strip_trailing_delimiter(text).to_string())
            } else {
                PendingAction::Buffer
            }
        } else if text.contains(',') {
            if text.chars().count() > 1 {
                let stripped: String = text.chars().filter(|&c| c != ',').collect();
                if stripped.is_empty() {
                    PendingAction::Discard
                } else {
                    PendingAction::Commit(stripped)
                }
            } else {
                PendingAction::Discard
            }
        } else {
            PendingAction::Buffer
        }
    }
}

/// True when the text contains a closed quoted segment followed by a comma
pub fn is_quote_complete(text: &str) -> bool {
    quote_complete_regex().is_match(text)
}

/// True when a `"` opens a segment that is never closed
pub fn has_unclosed_quote(text: &str) -> bool {
    quote_open_regex().is_match(text) && !quote_closed_regex().is_match(text)
}

/// Drop a single trailing comma
pub fn strip_trailing_delimiter(text: &str) -> &str {
    text.strip_suffix(',').unwrap_or(text)
}

//! Tag list edit engine
//!
//! [`TagListEditor`] keeps an ordered tag list in step with the canonical
//! comma-joined string owned by its caller. Every mutation produces the next
//! canonical string and hands it to a [`CommitSink`]; the editor then treats
//! that string as the new external value, so the list is re-derived from it
//! whenever its length changes, the same way an external overwrite would be.

use super::pending::{has_unclosed_quote, PendingAction, PendingState};
use super::tokenizer::{join, tokenize};
use crate::error::{ChipsError, Result};
use std::collections::BTreeSet;
use std::fmt;
use tracing::{debug, trace, warn};

/// Receiver of every canonical string the editor commits
pub trait CommitSink {
    fn commit(&mut self, canonical: &str);
}

impl<F> CommitSink for F
where
    F: FnMut(&str),
{
    fn commit(&mut self, canonical: &str) {
        self(canonical)
    }
}

/// Sink that records every commit in order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommitLog {
    pub commits: Vec<String>,
}

impl CommitLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recent canonical string, if anything was committed
    pub fn last(&self) -> Option<&str> {
        self.commits.last().map(String::as_str)
    }
}

impl CommitSink for CommitLog {
    fn commit(&mut self, canonical: &str) {
        self.commits.push(canonical.to_string());
    }
}

/// Non-fatal conditions shown to the user next to the pending input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorWarning {
    /// The pending text opens a `"` that is never closed
    UnclosedQuote,
}

impl EditorWarning {
    pub fn message(&self) -> &'static str {
        match self {
            EditorWarning::UnclosedQuote => "close the quotes on both sides",
        }
    }
}

impl fmt::Display for EditorWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Ordered tag list plus the pending input buffer
#[derive(Debug)]
pub struct TagListEditor<S: CommitSink> {
    value: String,
    tags: Vec<String>,
    pending: String,
    marked: BTreeSet<String>,
    warning: Option<EditorWarning>,
    sink: S,
}

impl<S: CommitSink> TagListEditor<S> {
    /// Create an editor for an initial canonical value
    pub fn new(value: &str, sink: S) -> Self {
        let mut editor = TagListEditor {
            value: value.to_string(),
            tags: Vec::new(),
            pending: String::new(),
            marked: BTreeSet::new(),
            warning: None,
            sink,
        };
        editor.load_from_external(value);
        editor
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Current canonical string
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn pending(&self) -> &str {
        &self.pending
    }

    pub fn pending_state(&self) -> PendingState {
        PendingState::classify(&self.pending)
    }

    pub fn marked(&self) -> &BTreeSet<String> {
        &self.marked
    }

    /// Whether a chip with this text is highlighted for removal
    pub fn is_marked(&self, tag: &str) -> bool {
        self.marked.contains(tag)
    }

    pub fn warning(&self) -> Option<EditorWarning> {
        self.warning
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Replace the tag list with the tokenized `raw`, ignoring empty input
    pub fn load_from_external(&mut self, raw: &str) {
        if raw.is_empty() {
            return;
        }
        self.tags = tokenize(raw);
        debug!(tags = self.tags.len(), "loaded tags from external value");
    }

    /// Accept a new external value.
    ///
    /// The tag list is only re-derived when the value's length changed, so an
    /// echo of an in-progress edit does not clobber it.
    pub fn sync_external(&mut self, raw: &str) {
        let changed = raw.chars().count() != self.value.chars().count();
        self.value = raw.to_string();
        if changed {
            self.load_from_external(raw);
        } else {
            trace!("external value length unchanged, keeping tag list");
        }
    }

    /// Replace the tag at `index`; whitespace is stripped and an empty result
    /// deletes the tag instead.
    pub fn rename_at(&mut self, index: usize, new_text: &str) -> Result<()> {
        self.check_index(index)?;

        let renamed: String = new_text.chars().filter(|c| !c.is_whitespace()).collect();
        if renamed.is_empty() {
            return self.delete_at(index);
        }

        debug!(index, from = %self.tags[index], to = %renamed, "renaming tag");
        self.tags[index] = renamed;
        self.emit(join(&self.tags));
        Ok(())
    }

    pub fn delete_at(&mut self, index: usize) -> Result<()> {
        self.check_index(index)?;

        let removed = self.tags.remove(index);
        debug!(index, tag = %removed, "deleted tag");
        self.emit(join(&self.tags));
        Ok(())
    }

    /// Replace the set of tag values highlighted for removal
    pub fn mark_for_removal<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.marked = values.into_iter().collect();
        debug!(marked = self.marked.len(), "marked tags for removal");
    }

    /// Remove the first occurrence of every marked value.
    ///
    /// Each marked value is consumed once, so later duplicates survive.
    pub fn commit_removal(&mut self) {
        let mut marked = std::mem::take(&mut self.marked);
        let before = self.tags.len();
        self.tags.retain(|tag| !marked.remove(tag));
        debug!(removed = before - self.tags.len(), "committed marked removal");
        self.emit(join(&self.tags));
    }

    /// Handle the full pending buffer text after a keystroke
    pub fn type_into_pending(&mut self, text: &str) {
        match PendingAction::for_input(text) {
            PendingAction::Commit(tag) => {
                self.append(&tag);
                self.pending.clear();
            }
            PendingAction::Discard => self.pending.clear(),
            PendingAction::Buffer => self.pending = text.to_string(),
        }

        if self.pending_state() != PendingState::QuoteOpenUnclosed {
            self.warning = None;
        }
    }

    /// Commit `text` as a new tag unless it leaves a quote open
    pub fn commit_pending(&mut self, text: &str) {
        if has_unclosed_quote(text) {
            warn!(pending = %text, "pending tag has an unclosed quote");
            self.warning = Some(EditorWarning::UnclosedQuote);
            return;
        }

        if !text.is_empty() {
            self.append(text);
        }
        self.pending.clear();
        self.warning = None;
    }

    /// Commit whatever is in the pending buffer, as on focus loss
    pub fn blur_pending(&mut self) {
        let text = self.pending.clone();
        self.commit_pending(&text);
    }

    fn append(&mut self, text: &str) {
        let next = if self.value.is_empty() {
            text.to_string()
        } else {
            format!("{},{}", self.value, text)
        };
        debug!(tag = %text, "appending pending tag");
        self.emit(next);
    }

    fn emit(&mut self, next: String) {
        self.sink.commit(&next);
        self.sync_external(&next);
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.tags.len() {
            return Err(ChipsError::IndexOutOfRange {
                index,
                len: self.tags.len(),
            });
        }
        Ok(())
    }
}

//! Interactive editing session
//!
//! Owns everything the tag input needs between events: the editor, the
//! in-progress drag and the chip geometry used to resolve it.

use crate::domain::selection::hit_test;
use crate::domain::tags::{CommitLog, EditorWarning, TagListEditor};
use crate::domain::{DragSelection, Point, PointerButton};
use crate::error::Result;
use crate::infrastructure::ChipLayout;
use std::str::FromStr;
use tracing::{debug, trace};

/// Keys the session reacts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    Backspace,
    Delete,
    Other(String),
}

impl FromStr for Key {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let name = s.trim();
        if name.is_empty() {
            return Err("Missing key name".to_string());
        }

        Ok(match name.to_lowercase().as_str() {
            "backspace" => Key::Backspace,
            "delete" | "del" => Key::Delete,
            _ => Key::Other(name.to_string()),
        })
    }
}

/// Discrete input delivered by the display layer
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// The external value was overwritten
    Load(String),
    /// The pending input now holds this text
    Type(String),
    /// The pending input lost focus
    Blur,
    Rename { index: usize, text: String },
    Delete(usize),
    /// Replace the removal selection directly
    Mark(Vec<String>),
    PointerDown { button: PointerButton, point: Point },
    PointerUp { point: Point },
    KeyDown(Key),
}

/// Everything the display layer needs to render the input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub value: String,
    pub tags: Vec<String>,
    pub pending: String,
    pub marked: Vec<String>,
    pub warning: Option<EditorWarning>,
}

pub struct Session {
    editor: TagListEditor<CommitLog>,
    drag: DragSelection,
    layout: ChipLayout,
}

impl Session {
    pub fn new(value: &str, layout: ChipLayout) -> Self {
        Session {
            editor: TagListEditor::new(value, CommitLog::new()),
            drag: DragSelection::new(),
            layout,
        }
    }

    pub fn editor(&self) -> &TagListEditor<CommitLog> {
        &self.editor
    }

    /// Canonical strings committed so far, oldest first
    pub fn commits(&self) -> &[String] {
        &self.editor.sink().commits
    }

    pub fn handle(&mut self, event: InputEvent) -> Result<()> {
        trace!(?event, "handling input event");

        match event {
            InputEvent::Load(raw) => self.editor.sync_external(&raw),
            InputEvent::Type(text) => self.editor.type_into_pending(&text),
            InputEvent::Blur => self.editor.blur_pending(),
            InputEvent::Rename { index, text } => self.editor.rename_at(index, &text)?,
            InputEvent::Delete(index) => self.editor.delete_at(index)?,
            InputEvent::Mark(values) => self.editor.mark_for_removal(values),
            InputEvent::PointerDown { button, point } => self.drag.press(button, point),
            InputEvent::PointerUp { point } => self.finish_drag(point),
            InputEvent::KeyDown(Key::Backspace | Key::Delete) => self.editor.commit_removal(),
            InputEvent::KeyDown(Key::Other(name)) => trace!(key = %name, "ignoring key"),
        }

        Ok(())
    }

    fn finish_drag(&mut self, point: Point) {
        let Some(area) = self.drag.release(point) else {
            return;
        };

        let chips = self.layout.arrange(self.editor.tags());
        let selected = hit_test(chips, &area);
        debug!(selected = selected.len(), "drag selection finished");
        self.editor.mark_for_removal(selected);
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            value: self.editor.value().to_string(),
            tags: self.editor.tags().to_vec(),
            pending: self.editor.pending().to_string(),
            marked: self.editor.marked().iter().cloned().collect(),
            warning: self.editor.warning(),
        }
    }
}

//! Domain layer - Tag parsing, editing and selection logic

pub mod selection;
pub mod tags;

pub use selection::{DragSelection, Point, PointerButton, Rect};
pub use tags::{TagListEditor, tokenize};

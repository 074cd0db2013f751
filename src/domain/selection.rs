//! Rectangle drag selection over laid-out chips

use std::collections::BTreeSet;
use std::str::FromStr;

/// A position in screen coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }
}

/// Axis-aligned box, `left <= right` and `top <= bottom`
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Rect {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Build a normalized rectangle from two opposite corners in any order
    pub fn from_corners(a: Point, b: Point) -> Self {
        Rect {
            left: a.x.min(b.x),
            top: a.y.min(b.y),
            right: a.x.max(b.x),
            bottom: a.y.max(b.y),
        }
    }
}

/// Pointer buttons as reported by the platform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Middle,
    Secondary,
}

impl FromStr for PointerButton {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "primary" | "left" => Ok(PointerButton::Primary),
            "middle" => Ok(PointerButton::Middle),
            "secondary" | "right" => Ok(PointerButton::Secondary),
            _ => Err(format!(
                "Invalid pointer button: {}. Valid buttons: primary, middle, secondary",
                s
            )),
        }
    }
}

/// Anchor of an in-progress selection drag.
///
/// Only the middle button starts a drag, leaving primary clicks to the chip
/// inputs themselves.
#[derive(Debug, Clone, Default)]
pub struct DragSelection {
    anchor: Option<Point>,
}

impl DragSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.anchor.is_some()
    }

    pub fn press(&mut self, button: PointerButton, point: Point) {
        if button == PointerButton::Middle {
            self.anchor = Some(point);
        }
    }

    /// Finish the drag, returning the swept area
    pub fn release(&mut self, point: Point) -> Option<Rect> {
        self.anchor
            .take()
            .map(|anchor| Rect::from_corners(anchor, point))
    }
}

/// True when a vertical edge of `chip` lies strictly inside `area`
/// horizontally and a horizontal edge lies strictly inside it vertically.
pub fn intersects(chip: &Rect, area: &Rect) -> bool {
    let inside_x = |x: f64| x > area.left && x < area.right;
    let inside_y = |y: f64| y > area.top && y < area.bottom;

    (inside_x(chip.left) || inside_x(chip.right)) && (inside_y(chip.top) || inside_y(chip.bottom))
}

/// Values of every chip whose box intersects `area`
pub fn hit_test<'a, I>(chips: I, area: &Rect) -> BTreeSet<String>
where
    I: IntoIterator<Item = (&'a str, Rect)>,
{
    chips
        .into_iter()
        .filter(|(_, rect)| intersects(rect, area))
        .map(|(value, _)| value.to_string())
        .collect()
}

//! Single-row chip geometry used for drag selection

use crate::domain::Rect;
use serde::Deserialize;

/// Places chips left to right on one row
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ChipLayout {
    pub origin_x: f64,
    pub origin_y: f64,
    /// Width of one character of chip text
    pub char_width: f64,
    /// Horizontal padding on each side of the text
    pub padding: f64,
    pub height: f64,
    /// Space between neighbouring chips
    pub gap: f64,
}

impl Default for ChipLayout {
    fn default() -> Self {
        ChipLayout {
            origin_x: 0.0,
            origin_y: 0.0,
            char_width: 8.0,
            padding: 6.0,
            height: 24.0,
            gap: 4.0,
        }
    }
}

impl ChipLayout {
    /// Width of the chip showing `tag`
    pub fn chip_width(&self, tag: &str) -> f64 {
        tag.chars().count() as f64 * self.char_width + 2.0 * self.padding
    }

    /// Bounding box of every chip, in tag order
    pub fn arrange<'a>(&self, tags: &'a [String]) -> Vec<(&'a str, Rect)> {
        let mut x = self.origin_x;
        let mut placed = Vec::with_capacity(tags.len());

        for tag in tags {
            let width = self.chip_width(tag);
            placed.push((
                tag.as_str(),
                Rect::new(x, self.origin_y, x + width, self.origin_y + self.height),
            ));
            x += width + self.gap;
        }

        placed
    }
}

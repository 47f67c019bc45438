//! Metrics-only monospace label.

use unicode_width::UnicodeWidthStr;

use super::{LabelOptions, TextLabel};
use crate::node::VisualNode;
use crate::types::{BoundingBox, Rgb};

/// Fixed glyph metrics for a monospaced font.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonoFont {
    pub glyph_width: u32,
    pub glyph_height: u32,
}

impl MonoFont {
    /// One pixel per character cell, the natural font for terminal backends
    /// where the pixel grid and the cell grid coincide.
    pub const CELL: Self = Self::new(1, 1);

    pub const fn new(glyph_width: u32, glyph_height: u32) -> Self {
        Self {
            glyph_width,
            glyph_height,
        }
    }
}

/// A [`TextLabel`] that models monospaced glyph metrics without rasterizing
/// anything.
///
/// It stores the text and style attributes a real label would consume and
/// computes the bounding box a monospaced renderer would produce:
///
/// - content width: widest line in display cells ([`unicode-width`] rules)
///   × glyph width × scale;
/// - content height: first line contributes the glyph height, every further
///   line contributes `round(glyph height × line_spacing)`, all × scale;
/// - padding is added around the scaled content; empty text is an empty
///   content box.
///
/// [`unicode-width`]: https://crates.io/crates/unicode-width
#[derive(Debug, Clone)]
pub struct MonoLabel {
    text: String,
    font: MonoFont,
    color: Rgb,
    background_color: Rgb,
    options: LabelOptions,
    anchor_point: (f32, f32),
    anchored_position: (i32, i32),
}

impl MonoLabel {
    pub fn font(&self) -> MonoFont {
        self.font
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    pub fn background_color(&self) -> Rgb {
        self.background_color
    }

    pub fn options(&self) -> LabelOptions {
        self.options
    }

    /// Top-left pixel of the bounding box once the anchor point is pinned to
    /// the anchored position.
    pub fn origin(&self) -> (i32, i32) {
        let bounds = self.bounding_box();
        let (anchor_x, anchor_y) = self.anchor_point;
        let (pos_x, pos_y) = self.anchored_position;
        (
            pos_x - (anchor_x * bounds.width as f32).round() as i32,
            pos_y - (anchor_y * bounds.height as f32).round() as i32,
        )
    }

    fn content_size(&self) -> (u32, u32) {
        if self.text.is_empty() {
            return (0, 0);
        }

        let widest = self
            .text
            .split('\n')
            .map(|line| line.width() as u32)
            .max()
            .unwrap_or(0);
        let line_count = self.text.split('\n').count() as u32;
        let line_height =
            (self.font.glyph_height as f32 * self.options.line_spacing).round() as u32;

        let width = widest * self.font.glyph_width * self.options.scale;
        let height =
            (self.font.glyph_height + (line_count - 1) * line_height) * self.options.scale;
        (width, height)
    }
}

impl VisualNode for MonoLabel {
    fn bounding_box(&self) -> BoundingBox {
        let (content_width, content_height) = self.content_size();
        let padding = self.options.padding;
        BoundingBox::from_size(
            content_width + padding.horizontal_total(),
            content_height + padding.vertical_total(),
        )
    }
}

impl TextLabel for MonoLabel {
    type Font = MonoFont;
    type Options = LabelOptions;

    fn create(
        font: MonoFont,
        text: &str,
        color: Rgb,
        background_color: Rgb,
        options: LabelOptions,
    ) -> Self {
        Self {
            text: text.to_string(),
            font,
            color,
            background_color,
            options,
            anchor_point: (0.0, 0.0),
            anchored_position: (0, 0),
        }
    }

    fn text(&self) -> &str {
        &self.text
    }

    fn set_text(&mut self, text: &str) {
        self.text.clear();
        self.text.push_str(text);
    }

    fn anchor_point(&self) -> (f32, f32) {
        self.anchor_point
    }

    fn set_anchor_point(&mut self, anchor_point: (f32, f32)) {
        self.anchor_point = anchor_point;
    }

    fn anchored_position(&self) -> (i32, i32) {
        self.anchored_position
    }

    fn set_anchored_position(&mut self, position: (i32, i32)) {
        self.anchored_position = position;
    }
}

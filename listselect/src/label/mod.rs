//! The text-label primitive the widget renders through.
//!
//! The real label (glyph rasterization, display memory) belongs to the host
//! environment; this module only defines the capability the widget consumes,
//! plus a metrics-only monospace implementation for tests and demos.

mod mono;

pub use mono::{MonoFont, MonoLabel};

use crate::node::VisualNode;
use crate::types::{Edges, Rgb};

/// A text-rendering node: turns a string plus font/color/style configuration
/// into positioned output and reports its pixel bounding box.
///
/// The widget constructs exactly one label, rewrites its text on every
/// mutation, and forwards geometry queries to it. Backend-specific styling
/// that the widget does not interpret travels through [`TextLabel::Options`].
///
/// # Example
///
/// ```ignore
/// struct FramebufferLabel { /* backend handle, texture, ... */ }
///
/// impl TextLabel for FramebufferLabel {
///     type Font = FontHandle;
///     type Options = FramebufferLabelOptions;
///     // ...
/// }
/// ```
pub trait TextLabel: VisualNode {
    /// Glyph source accepted by this label implementation.
    type Font;

    /// Pass-through style options this label accepts at construction.
    type Options: Default;

    /// Construct the label with an initial text content.
    fn create(
        font: Self::Font,
        text: &str,
        color: Rgb,
        background_color: Rgb,
        options: Self::Options,
    ) -> Self;

    /// Current text content.
    fn text(&self) -> &str;

    /// Replace the text content in one step; the bounding box reported by
    /// [`VisualNode::bounding_box`] reflects the new text afterwards.
    fn set_text(&mut self, text: &str);

    /// Relative-origin fraction within the bounding box (`(0.0, 0.0)` is the
    /// top-left corner, `(1.0, 1.0)` the bottom-right).
    fn anchor_point(&self) -> (f32, f32);

    fn set_anchor_point(&mut self, anchor_point: (f32, f32));

    /// Absolute pixel coordinate the anchor point is pinned to.
    fn anchored_position(&self) -> (i32, i32);

    fn set_anchored_position(&mut self, position: (i32, i32));
}

/// Construction-time style options shared by raster-style labels.
///
/// Models the options the widget forwards without interpreting: an integer
/// pixel multiplier, a line-height factor, and padding around the text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelOptions {
    /// Integer pixel multiplier applied to glyph metrics.
    pub scale: u32,
    /// Line height as a factor of the glyph height, rounded to whole pixels.
    pub line_spacing: f32,
    /// Pixel padding added around the text content, not scaled.
    pub padding: Edges,
}

impl Default for LabelOptions {
    fn default() -> Self {
        Self {
            scale: 1,
            line_spacing: 1.0,
            padding: Edges::default(),
        }
    }
}

impl LabelOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scale(mut self, scale: u32) -> Self {
        self.scale = scale;
        self
    }

    pub fn line_spacing(mut self, line_spacing: f32) -> Self {
        self.line_spacing = line_spacing;
        self
    }

    pub fn padding(mut self, padding: Edges) -> Self {
        self.padding = padding;
        self
    }
}

//! Container-capability seam between widgets and the host composition graph.
//!
//! The host owns the scene: it positions containers and walks their children
//! to draw them. Widgets take part by implementing these traits rather than
//! inheriting from a framework node type, so nothing here ties a widget to a
//! particular display backend.

use crate::types::BoundingBox;

/// Capability every visual node exposes to the host composition graph.
pub trait VisualNode {
    /// Pixel bounds of the rendered content, in the node's local coordinates.
    ///
    /// For text-backed nodes this depends on rendered glyph metrics and is
    /// only meaningful after at least one render.
    fn bounding_box(&self) -> BoundingBox;
}

/// A positioned container of visual nodes.
pub trait Group: VisualNode {
    /// The container's pixel offset within its parent.
    fn position(&self) -> (i32, i32);

    /// Move the container within its parent.
    fn set_position(&mut self, x: i32, y: i32);

    /// Number of direct children.
    fn child_count(&self) -> usize;

    /// Visit each direct child in draw order.
    fn for_each_child(&self, f: &mut dyn FnMut(&dyn VisualNode));
}

mod color;
mod geometry;

pub use color::Rgb;
pub use geometry::{BoundingBox, Edges};

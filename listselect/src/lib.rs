//! A selection-list widget built on a single text label.
//!
//! [`ListSelect`] keeps an ordered list of items and a movable cursor, and
//! renders the whole list into one owned [`TextLabel`]: the selected row is
//! prefixed with the cursor marker, every other row with a space. The widget
//! has no geometry of its own: width, height, bounding box, and anchoring
//! are forwarded to the label, which sizes itself from the rendered text.
//!
//! The label backend is pluggable through the [`TextLabel`] trait;
//! [`MonoLabel`] is the built-in fixed-cell backend used by the examples and
//! tests.
//!
//! ```
//! use listselect::{ListSelect, MonoFont, MonoLabel, TextLabel};
//!
//! let mut list: ListSelect<MonoLabel> =
//!     ListSelect::new(MonoFont::CELL, ["First", "Second", "Third", "Fourth"]);
//! assert_eq!(list.label().text(), ">First\n Second\n Third\n Fourth");
//!
//! list.move_selection_down();
//! assert_eq!(list.selected_item(), Ok("Second"));
//! ```

pub mod error;
pub mod label;
pub mod list_select;
pub mod node;
pub mod types;

pub use error::{Error, Result};
pub use label::{LabelOptions, MonoFont, MonoLabel, TextLabel};
pub use list_select::{ListSelect, ListSelectBuilder};
pub use node::{Group, VisualNode};
pub use types::{BoundingBox, Edges, Rgb};

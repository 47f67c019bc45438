//! Selection-list widget: an ordered text list with a movable cursor marker,
//! rendered through one owned label.

use crate::error::{Error, Result};
use crate::label::TextLabel;
use crate::node::{Group, VisualNode};
use crate::types::{BoundingBox, Rgb};

/// Compose the label text for the current list state.
///
/// The row at `selected_index` is prefixed with the cursor marker, every
/// other row with a single space so rows stay aligned; rows are joined with
/// `'\n'` and the last row carries no trailing break. An out-of-range index
/// marks no row at all; the error for a bad index belongs to the accessors,
/// not to rendering.
fn render_text(items: &[String], selected_index: usize, cursor_char: &str) -> String {
    let mut full = String::new();
    for (i, item) in items.iter().enumerate() {
        if i == selected_index {
            full.push_str(cursor_char);
        } else {
            full.push(' ');
        }
        full.push_str(item);

        if i != items.len() - 1 {
            full.push('\n');
        }
    }
    full
}

/// A text list with a movable selection cursor.
///
/// The widget owns exactly one [`TextLabel`] and derives the label's entire
/// text content from three fields: the item list, the selected index, and the
/// cursor marker. Every mutation re-renders in full; there is no diffing and
/// no partially updated state a host could observe. Geometry is the label's
/// business: the widget forwards bounding box, anchor point, and anchored
/// position instead of tracking its own, so geometry always matches the
/// rendered text.
///
/// Selection indices are deliberately unchecked on the way in (construction
/// and [`set_selected_index`] store whatever they are given) and checked at
/// the point of use: [`selected_item`] reports [`Error::OutOfRange`] for an
/// index that addresses no item. [`try_set_selected_index`] is the validating
/// alternative.
///
/// [`set_selected_index`]: ListSelect::set_selected_index
/// [`selected_item`]: ListSelect::selected_item
/// [`try_set_selected_index`]: ListSelect::try_set_selected_index
#[derive(Debug)]
pub struct ListSelect<L: TextLabel> {
    items: Vec<String>,
    selected_index: usize,
    cursor_char: String,
    label: L,
    x: i32,
    y: i32,
}

impl<L: TextLabel> ListSelect<L> {
    /// Build a widget with default styling over the given items.
    pub fn new(font: L::Font, items: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self::builder(font).items(items).build()
    }

    /// Start building a widget.
    ///
    /// # Example
    ///
    /// ```
    /// use listselect::{ListSelect, MonoFont, MonoLabel, TextLabel};
    ///
    /// let list = ListSelect::<MonoLabel>::builder(MonoFont::CELL)
    ///     .items(["First", "Second", "Third", "Fourth"])
    ///     .cursor_char(">")
    ///     .build();
    /// assert_eq!(list.label().text(), ">First\n Second\n Third\n Fourth");
    /// ```
    pub fn builder(font: L::Font) -> ListSelectBuilder<L> {
        ListSelectBuilder::new(font)
    }

    /// Recompute the label text from the current list state and assign it in
    /// one step.
    fn refresh_label(&mut self) {
        let text = render_text(&self.items, self.selected_index, &self.cursor_char);
        log::trace!(
            "[ListSelect::refresh_label] {} item(s), selected {}",
            self.items.len(),
            self.selected_index
        );
        self.label.set_text(&text);
    }

    /// Move the cursor one row down; a no-op at or beyond the last row
    /// (no wrap).
    pub fn move_selection_down(&mut self) {
        if self.selected_index < self.items.len().saturating_sub(1) {
            self.selected_index += 1;
            log::debug!(
                "[ListSelect::move_selection_down] selected {}",
                self.selected_index
            );
            self.refresh_label();
        }
    }

    /// Move the cursor one row up; a no-op at row 0 (no wrap).
    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
            log::debug!(
                "[ListSelect::move_selection_up] selected {}",
                self.selected_index
            );
            self.refresh_label();
        }
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    /// Store `index` verbatim, even out of range, and re-render.
    ///
    /// Bounds are the caller's responsibility here; an out-of-range index
    /// renders every row without a cursor and makes [`selected_item`] fail
    /// until a valid index is stored. Use [`try_set_selected_index`] to
    /// validate instead.
    ///
    /// [`selected_item`]: ListSelect::selected_item
    /// [`try_set_selected_index`]: ListSelect::try_set_selected_index
    pub fn set_selected_index(&mut self, index: usize) {
        self.selected_index = index;
        log::debug!("[ListSelect::set_selected_index] selected {index}");
        self.refresh_label();
    }

    /// Validating counterpart of [`set_selected_index`]: rejects an index
    /// that addresses no item and leaves the widget untouched. Never clamps.
    ///
    /// [`set_selected_index`]: ListSelect::set_selected_index
    pub fn try_set_selected_index(&mut self, index: usize) -> Result<()> {
        if index >= self.items.len() {
            return Err(Error::OutOfRange {
                index,
                len: self.items.len(),
            });
        }
        self.selected_index = index;
        log::debug!("[ListSelect::try_set_selected_index] selected {index}");
        self.refresh_label();
        Ok(())
    }

    /// The item under the cursor.
    ///
    /// Fails with [`Error::OutOfRange`] when the selected index addresses no
    /// item: the list is empty, or an out-of-range index was stored through
    /// the unchecked paths.
    pub fn selected_item(&self) -> Result<&str> {
        self.items
            .get(self.selected_index)
            .map(String::as_str)
            .ok_or(Error::OutOfRange {
                index: self.selected_index,
                len: self.items.len(),
            })
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Replace the item list wholesale and re-render.
    ///
    /// The selected index is left as it is, even if the new list makes it out
    /// of range; validation stays at the point of use.
    pub fn set_items(&mut self, items: impl IntoIterator<Item = impl Into<String>>) {
        self.items = items.into_iter().map(Into::into).collect();
        log::debug!("[ListSelect::set_items] {} item(s)", self.items.len());
        self.refresh_label();
    }

    pub fn cursor_char(&self) -> &str {
        &self.cursor_char
    }

    /// Replace the cursor marker and re-render. A multi-character marker is
    /// used verbatim; unselected rows still get a single space.
    pub fn set_cursor_char(&mut self, cursor_char: impl Into<String>) {
        self.cursor_char = cursor_char.into();
        log::debug!("[ListSelect::set_cursor_char] cursor {:?}", self.cursor_char);
        self.refresh_label();
    }

    /// Read-only access to the owned label, for hosts that draw it.
    ///
    /// The label's text is entirely derived from the widget state; there is
    /// deliberately no mutable access.
    pub fn label(&self) -> &L {
        &self.label
    }

    /// Widget width in pixels, from the label's bounding box.
    pub fn width(&self) -> u32 {
        self.label.bounding_box().width
    }

    /// Widget height in pixels, from the label's bounding box.
    pub fn height(&self) -> u32 {
        self.label.bounding_box().height
    }

    pub fn anchor_point(&self) -> (f32, f32) {
        self.label.anchor_point()
    }

    pub fn set_anchor_point(&mut self, anchor_point: (f32, f32)) {
        self.label.set_anchor_point(anchor_point);
    }

    pub fn anchored_position(&self) -> (i32, i32) {
        self.label.anchored_position()
    }

    pub fn set_anchored_position(&mut self, position: (i32, i32)) {
        self.label.set_anchored_position(position);
    }

    /// Always fails with [`Error::Unsupported`]: the label primitive does not
    /// support arbitrary sizing, so neither does the widget.
    pub fn resize(&mut self, _new_width: u32, _new_height: u32) -> Result<()> {
        Err(Error::Unsupported("resize"))
    }
}

impl<L: TextLabel> VisualNode for ListSelect<L> {
    fn bounding_box(&self) -> BoundingBox {
        self.label.bounding_box()
    }
}

impl<L: TextLabel> Group for ListSelect<L> {
    fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    fn set_position(&mut self, x: i32, y: i32) {
        self.x = x;
        self.y = y;
    }

    fn child_count(&self) -> usize {
        1
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn VisualNode)) {
        f(&self.label);
    }
}

/// Builder for [`ListSelect`].
///
/// Defaults match the widget's construction contract: empty items, position
/// `(0, 0)`, white on black, selected index 0, cursor `">"`, default label
/// options. The initial selected index is accepted as given, without
/// validation against the item count.
pub struct ListSelectBuilder<L: TextLabel> {
    font: L::Font,
    items: Vec<String>,
    x: i32,
    y: i32,
    color: Rgb,
    background_color: Rgb,
    selected_index: usize,
    cursor_char: String,
    label_options: L::Options,
}

impl<L: TextLabel> ListSelectBuilder<L> {
    pub fn new(font: L::Font) -> Self {
        Self {
            font,
            items: Vec::new(),
            x: 0,
            y: 0,
            color: Rgb::WHITE,
            background_color: Rgb::BLACK,
            selected_index: 0,
            cursor_char: ">".to_string(),
            label_options: L::Options::default(),
        }
    }

    pub fn items(mut self, items: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.items = items.into_iter().map(Into::into).collect();
        self
    }

    /// Pixel offset of the widget within its parent (the [`Group`] position,
    /// distinct from the label's anchored position).
    pub fn position(mut self, x: i32, y: i32) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    pub fn color(mut self, color: Rgb) -> Self {
        self.color = color;
        self
    }

    pub fn background_color(mut self, background_color: Rgb) -> Self {
        self.background_color = background_color;
        self
    }

    pub fn selected_index(mut self, selected_index: usize) -> Self {
        self.selected_index = selected_index;
        self
    }

    pub fn cursor_char(mut self, cursor_char: impl Into<String>) -> Self {
        self.cursor_char = cursor_char.into();
        self
    }

    /// Backend-specific label options, forwarded to [`TextLabel::create`]
    /// without interpretation.
    pub fn label_options(mut self, label_options: L::Options) -> Self {
        self.label_options = label_options;
        self
    }

    /// Create the label, anchor it at the local origin, and perform the
    /// first full render.
    pub fn build(self) -> ListSelect<L> {
        let mut label = L::create(
            self.font,
            "",
            self.color,
            self.background_color,
            self.label_options,
        );
        label.set_anchor_point((0.0, 0.0));
        label.set_anchored_position((0, 0));

        let mut widget = ListSelect {
            items: self.items,
            selected_index: self.selected_index,
            cursor_char: self.cursor_char,
            label,
            x: self.x,
            y: self.y,
        };
        widget.refresh_label();
        widget
    }
}

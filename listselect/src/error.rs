//! Error types

/// Errors surfaced by the selection-list widget.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The operation is a permanent capability limitation, not a transient
    /// failure. `resize` always fails this way: the label primitive does not
    /// support arbitrary sizing, and the widget inherits that restriction.
    #[error("unsupported operation `{0}`: the text label dictates widget geometry")]
    Unsupported(&'static str),

    /// The selected index does not address an item, either because the list
    /// is empty or because a caller stored an out-of-range value through the
    /// unchecked setter.
    #[error("selected index {index} is out of range for {len} item(s)")]
    OutOfRange {
        /// The offending index.
        index: usize,
        /// Number of items in the list at the time of the access.
        len: usize,
    },
}

impl Error {
    /// Returns `true` if this is the unsupported-operation kind.
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::Unsupported(_))
    }

    /// Returns `true` if this is the out-of-range kind.
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::OutOfRange { .. })
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

//! Error types for todo list operations.

use thiserror::Error;

/// Result alias for fallible list operations.
pub type Result<T> = std::result::Result<T, TodoError>;

/// Errors raised by [`crate::TodoList`] and [`crate::Item`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TodoError {
    /// A dynamically-typed value could not be turned into an item.
    #[error("can only add todo items, found {found}")]
    TypeMismatch {
        /// Short description of the offending value.
        found: &'static str,
    },

    /// The index does not address an occupied slot.
    #[error("invalid index: {index} (list has {len} items)")]
    InvalidIndex {
        /// Requested index.
        index: usize,
        /// Length of the list at the time of the call.
        len: usize,
    },
}

impl TodoError {
    pub(crate) const fn type_mismatch(found: &'static str) -> Self {
        Self::TypeMismatch { found }
    }

    pub(crate) const fn invalid_index(index: usize, len: usize) -> Self {
        Self::InvalidIndex { index, len }
    }
}

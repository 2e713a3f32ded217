//! In-memory todo lists: titled items with a done flag, kept in insertion order.

/// Error types.
pub mod error;
/// Single todo items.
pub mod item;
/// Ordered item collections.
pub mod list;

pub use error::{Result, TodoError};
pub use item::{Item, ItemRecord};
pub use list::TodoList;

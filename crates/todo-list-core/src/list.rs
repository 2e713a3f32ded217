use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Result, TodoError};
use crate::item::Item;

/// Ordered collection of [`Item`]s under a title.
///
/// Structural changes (adding, removing) need `&mut self`. Marking items only
/// needs `&self` because the done flag lives behind the shared item handle.
#[derive(Debug, Serialize, Deserialize)]
pub struct TodoList {
    title: String,
    #[serde(default)]
    items: Vec<Item>,
}

impl TodoList {
    /// Create an empty list.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            items: Vec::new(),
        }
    }

    /// Create a list pre-populated with `items` in iteration order.
    #[must_use]
    pub fn with_items(title: impl Into<String>, items: impl IntoIterator<Item = Item>) -> Self {
        let mut list = Self::new(title);
        list.extend(items);
        list
    }

    /// Title given at construction.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Append an item.
    pub fn add(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Append an item described by an untyped JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`TodoError::TypeMismatch`] when the value is not a title string
    /// or an object carrying a string `title`.
    pub fn add_value(&mut self, value: &Value) -> Result<()> {
        let item = Item::try_from(value)?;
        self.add(item);
        Ok(())
    }

    /// Number of items.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true when the list holds no items.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// First item, if any.
    #[must_use]
    pub fn first(&self) -> Option<Item> {
        self.items.first().cloned()
    }

    /// Last item, if any.
    #[must_use]
    pub fn last(&self) -> Option<Item> {
        self.items.last().cloned()
    }

    /// Item at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`TodoError::InvalidIndex`] when `index >= len()`.
    pub fn item_at(&self, index: usize) -> Result<Item> {
        self.slot(index).cloned()
    }

    /// Mark the item at `index` done.
    ///
    /// # Errors
    ///
    /// Returns [`TodoError::InvalidIndex`] when `index >= len()`.
    pub fn mark_done_at(&self, index: usize) -> Result<()> {
        self.slot(index).map(Item::mark_done)
    }

    /// Mark the item at `index` not done.
    ///
    /// # Errors
    ///
    /// Returns [`TodoError::InvalidIndex`] when `index >= len()`.
    pub fn mark_undone_at(&self, index: usize) -> Result<()> {
        self.slot(index).map(Item::mark_undone)
    }

    /// Returns true when every item is done. An empty list is done.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.items.iter().all(Item::is_done)
    }

    /// Remove and return the first item, shifting the rest down.
    pub fn remove_first(&mut self) -> Option<Item> {
        if self.items.is_empty() {
            return None;
        }
        Some(self.items.remove(0))
    }

    /// Remove and return the last item.
    pub fn remove_last(&mut self) -> Option<Item> {
        self.items.pop()
    }

    /// Remove and return the item at `index`, shifting later items down.
    ///
    /// # Errors
    ///
    /// Returns [`TodoError::InvalidIndex`] when `index >= len()`.
    pub fn remove_at(&mut self, index: usize) -> Result<Item> {
        self.check_index(index)?;
        Ok(self.items.remove(index))
    }

    /// Header line followed by one rendered line per item.
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Call `visitor` on every item in list order.
    pub fn for_each<F>(&self, mut visitor: F)
    where
        F: FnMut(&Item),
    {
        for item in &self.items {
            visitor(item);
        }
    }

    /// Items accepted by `predicate`, in list order, in a fresh vector.
    pub fn filter<P>(&self, mut predicate: P) -> Vec<Item>
    where
        P: FnMut(&Item) -> bool,
    {
        let mut selected = Vec::new();
        self.for_each(|item| {
            if predicate(item) {
                selected.push(item.clone());
            }
        });
        selected
    }

    /// First item whose title equals `title` exactly.
    #[must_use]
    pub fn find_by_title(&self, title: &str) -> Option<Item> {
        self.filter(|item| item.title() == title).into_iter().next()
    }

    /// Items that are done.
    #[must_use]
    pub fn all_done(&self) -> Vec<Item> {
        self.filter(Item::is_done)
    }

    /// Items that are not done.
    #[must_use]
    pub fn all_not_done(&self) -> Vec<Item> {
        self.filter(|item| !item.is_done())
    }

    /// Mark the first item titled `title` done. Returns whether one was found.
    #[must_use]
    pub fn mark_done_by_title(&self, title: &str) -> bool {
        self.find_by_title(title).map(|item| item.mark_done()).is_some()
    }

    /// Mark every item done.
    pub fn mark_all_done(&self) {
        self.for_each(Item::mark_done);
    }

    /// Mark every item not done.
    pub fn mark_all_undone(&self) {
        self.for_each(Item::mark_undone);
    }

    /// Shallow copy: a new vector holding handles to the same items.
    #[must_use]
    pub fn to_vec(&self) -> Vec<Item> {
        self.items.clone()
    }

    /// Borrowing iterator in list order.
    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }

    const fn check_index(&self, index: usize) -> Result<()> {
        if index < self.items.len() {
            Ok(())
        } else {
            Err(TodoError::invalid_index(index, self.items.len()))
        }
    }

    fn slot(&self, index: usize) -> Result<&Item> {
        self.check_index(index)?;
        Ok(&self.items[index])
    }
}

impl fmt::Display for TodoList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "---- {} ----", self.title)?;
        for (idx, item) in self.items.iter().enumerate() {
            if idx > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{item}")?;
        }
        Ok(())
    }
}

impl Extend<Item> for TodoList {
    fn extend<I: IntoIterator<Item = Item>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<'a> IntoIterator for &'a TodoList {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

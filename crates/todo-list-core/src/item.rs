use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::TodoError;

/// A single task: an immutable title and a done flag.
///
/// `Item` is a handle. Cloning it yields another handle to the same task, so
/// marking a clone done is observed by every list or vector holding it.
#[derive(Clone, Serialize, Deserialize)]
#[serde(from = "ItemRecord", into = "ItemRecord")]
pub struct Item(Rc<ItemInner>);

struct ItemInner {
    title: String,
    done: Cell<bool>,
}

impl Item {
    /// Marker rendered for completed items.
    pub const DONE_MARKER: char = 'X';
    /// Marker rendered for pending items.
    pub const UNDONE_MARKER: char = ' ';

    /// Create a pending item. Any title is accepted, including an empty one.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self(Rc::new(ItemInner {
            title: title.into(),
            done: Cell::new(false),
        }))
    }

    /// Title given at construction.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.0.title
    }

    /// Whether the item is done.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.0.done.get()
    }

    /// Mark the item done.
    pub fn mark_done(&self) {
        self.0.done.set(true);
    }

    /// Mark the item not done.
    pub fn mark_undone(&self) {
        self.0.done.set(false);
    }

    /// Render as `[X] title` or `[ ] title`.
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Returns true when both handles refer to the same task.
    #[must_use]
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Rc::ptr_eq(&a.0, &b.0)
    }

    fn marker(&self) -> char {
        if self.is_done() {
            Self::DONE_MARKER
        } else {
            Self::UNDONE_MARKER
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.marker(), self.title())
    }
}

impl fmt::Debug for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Item")
            .field("title", &self.title())
            .field("done", &self.is_done())
            .finish()
    }
}

/// Owned, plain-data form of an [`Item`] used for serialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRecord {
    /// Item title.
    pub title: String,
    /// Completion flag.
    #[serde(default)]
    pub done: bool,
}

impl From<ItemRecord> for Item {
    fn from(record: ItemRecord) -> Self {
        let item = Self::new(record.title);
        if record.done {
            item.mark_done();
        }
        item
    }
}

impl From<Item> for ItemRecord {
    fn from(item: Item) -> Self {
        Self {
            title: item.title().to_owned(),
            done: item.is_done(),
        }
    }
}

/// Accepts a bare string title or an object `{ "title": .., "done": .. }`.
impl TryFrom<&Value> for Item {
    type Error = TodoError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(title) => Ok(Self::new(title.as_str())),
            Value::Object(fields) => {
                let Some(Value::String(title)) = fields.get("title") else {
                    return Err(TodoError::type_mismatch("object without a string title"));
                };
                let done = match fields.get("done") {
                    None | Some(Value::Null) => false,
                    Some(Value::Bool(done)) => *done,
                    Some(_) => {
                        return Err(TodoError::type_mismatch("object with a non-boolean done flag"));
                    }
                };
                Ok(ItemRecord {
                    title: title.clone(),
                    done,
                }
                .into())
            }
            Value::Null => Err(TodoError::type_mismatch("null")),
            Value::Bool(_) => Err(TodoError::type_mismatch("boolean")),
            Value::Number(_) => Err(TodoError::type_mismatch("number")),
            Value::Array(_) => Err(TodoError::type_mismatch("array")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn new_item_starts_pending() {
        let item = Item::new("Buy milk");
        assert_eq!(item.title(), "Buy milk");
        assert!(!item.is_done());
    }

    #[test]
    fn empty_title_is_accepted() {
        let item = Item::new("");
        assert_eq!(item.title(), "");
        assert_eq!(item.render(), "[ ] ");
    }

    #[test]
    fn render_reflects_done_flag() {
        let item = Item::new("Buy milk");
        assert_eq!(item.render(), "[ ] Buy milk");
        item.mark_done();
        assert_eq!(item.render(), "[X] Buy milk");
        item.mark_undone();
        assert_eq!(item.to_string(), "[ ] Buy milk");
    }

    #[test]
    fn marking_is_idempotent() {
        let item = Item::new("Clean room");
        item.mark_done();
        item.mark_done();
        assert!(item.is_done());
        item.mark_undone();
        item.mark_undone();
        assert!(!item.is_done());
    }

    #[test]
    fn clones_share_state() {
        let item = Item::new("Go to the gym");
        let handle = item.clone();
        handle.mark_done();
        assert!(item.is_done());
        assert!(Item::ptr_eq(&item, &handle));
        assert!(!Item::ptr_eq(&item, &Item::new("Go to the gym")));
    }

    #[test]
    fn try_from_accepts_titles_and_records() {
        let plain = Item::try_from(&json!("Feed the cats"))
            .unwrap_or_else(|err| panic!("string must convert: {err}"));
        assert_eq!(plain.render(), "[ ] Feed the cats");

        let record = Item::try_from(&json!({ "title": "Go shopping", "done": true }))
            .unwrap_or_else(|err| panic!("record must convert: {err}"));
        assert_eq!(record.render(), "[X] Go shopping");

        let without_flag = Item::try_from(&json!({ "title": "Study" }))
            .unwrap_or_else(|err| panic!("record without flag must convert: {err}"));
        assert!(!without_flag.is_done());
    }

    #[test]
    fn try_from_rejects_non_items() {
        for value in [
            json!(null),
            json!(3),
            json!(true),
            json!(["Buy milk"]),
            json!({ "name": "Buy milk" }),
            json!({ "title": 7 }),
            json!({ "title": "Buy milk", "done": "yes" }),
        ] {
            let err = Item::try_from(&value)
                .err()
                .unwrap_or_else(|| panic!("{value} must be rejected"));
            assert!(matches!(err, TodoError::TypeMismatch { .. }), "{value}: {err}");
        }
    }

    #[test]
    fn serde_uses_plain_records() {
        let item = Item::new("Buy milk");
        item.mark_done();
        let encoded = serde_json::to_value(&item)
            .unwrap_or_else(|err| panic!("item must serialize: {err}"));
        assert_eq!(encoded, json!({ "title": "Buy milk", "done": true }));

        let decoded: Item = serde_json::from_value(json!({ "title": "Clean room" }))
            .unwrap_or_else(|err| panic!("item must deserialize: {err}"));
        assert_eq!(decoded.render(), "[ ] Clean room");
    }
}

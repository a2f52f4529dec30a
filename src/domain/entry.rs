//! To-do entry model.
//!
//! An [`Entry`] is one item of the list. The list itself is plain
//! `Vec<Entry>`: insertion order is creation order and is never re-sorted.

use serde::{Deserialize, Serialize};

/// One to-do item.
///
/// The serialized form is the JSON object `{"id": .., "text": .., "done": ..}`,
/// which is also the layout found in the durable slot.
///
/// `id` is expected to be unique within a list, but nothing enforces it; the
/// reducer only ever compares ids when updating or deleting.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Entry {
    pub id: String,
    pub text: String,
    pub done: bool,
}

impl Entry {
    /// Creates an entry with the given id and label.
    ///
    /// The label is accepted as-is; empty or whitespace-only text is valid.
    ///
    /// # Examples
    ///
    /// ```
    /// use todostate::Entry;
    ///
    /// let entry = Entry::new("todo-1", "buy milk");
    /// assert_eq!(entry.text, "buy milk");
    /// assert!(!entry.done);
    /// ```
    #[must_use]
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            done: false,
        }
    }

    /// Returns a copy of the entry with `done` set.
    #[must_use]
    pub fn with_done(mut self, done: bool) -> Self {
        self.done = done;
        self
    }
}

//! The durable slot holding the serialized to-do list.

use crate::domain::error::Result;
use crate::domain::Entry;
use crate::storage::backend::Storage;

/// Key under which the list is stored unless configured otherwise.
pub const DEFAULT_KEY: &str = "todos";

/// A storage backend bound to the single key holding the entry list.
///
/// The value is a JSON array of entries, e.g.
/// `[{"id":"todo-1","text":"buy milk","done":false}]`.
#[derive(Debug)]
pub struct TodoSlot<S> {
    storage: S,
    key: String,
}

impl<S: Storage> TodoSlot<S> {
    /// Binds `storage` to the default `"todos"` key.
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, DEFAULT_KEY)
    }

    pub fn with_key(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Reads the persisted list. `Ok(None)` means the slot was never written.
    ///
    /// # Errors
    ///
    /// Returns [`crate::TodoError::Parse`] if the slot holds anything other than
    /// a JSON array of entries, or the backend's error if it cannot be read.
    pub fn load(&self) -> Result<Option<Vec<Entry>>> {
        let Some(raw) = self.storage.get_item(&self.key)? else {
            tracing::debug!(key = %self.key, "slot is empty");
            return Ok(None);
        };

        let entries: Vec<Entry> = serde_json::from_str(&raw)?;
        tracing::debug!(key = %self.key, count = entries.len(), "slot loaded");
        Ok(Some(entries))
    }

    /// Replaces the persisted list.
    ///
    /// # Errors
    ///
    /// Returns the backend's error if the write fails.
    pub fn save(&mut self, entries: &[Entry]) -> Result<()> {
        let raw = serde_json::to_string(entries)?;
        self.storage.set_item(&self.key, &raw)?;
        tracing::debug!(key = %self.key, count = entries.len(), "slot saved");
        Ok(())
    }

    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }
}

//! Storage backend abstraction.
//!
//! This module defines the [`Storage`] trait, a string key-value store shaped
//! after browser local storage. The reducer never talks to a backend directly;
//! it goes through a [`crate::storage::TodoSlot`] bound to one key.

use crate::domain::error::Result;

/// Abstraction over durable key-value backends.
///
/// # Implementations
///
/// - [`crate::storage::MemoryStorage`]: in-process map, used by tests and
///   short-lived hosts
/// - [`crate::storage::FileStorage`]: JSON file with atomic writes
///
/// # Examples
///
/// ```
/// use todostate::storage::{MemoryStorage, Storage};
///
/// let mut storage = MemoryStorage::new();
/// storage.set_item("todos", "[]")?;
/// assert_eq!(storage.get_item("todos")?.as_deref(), Some("[]"));
/// # Ok::<(), todostate::TodoError>(())
/// ```
pub trait Storage {
    /// Returns the value stored under `key`, or `Ok(None)` if the key is unset.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn set_item(&mut self, key: &str, value: &str) -> Result<()>;

    /// Removes `key`. Removing an unset key is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn remove_item(&mut self, key: &str) -> Result<()>;
}

impl<S: Storage + ?Sized> Storage for Box<S> {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set_item(key, value)
    }

    fn remove_item(&mut self, key: &str) -> Result<()> {
        (**self).remove_item(key)
    }
}

//! In-memory storage backend.

use crate::domain::error::Result;
use crate::storage::backend::Storage;
use std::collections::HashMap;

/// Key-value storage held entirely in memory.
///
/// Nothing survives the process; this is the fake substituted for a durable
/// backend in tests.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    items: HashMap<String, String>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a storage pre-populated with one key.
    #[must_use]
    pub fn with_item(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut items = HashMap::new();
        items.insert(key.into(), value.into());
        Self { items }
    }
}

impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        tracing::trace!(key = %key, bytes = value.len(), "memory set_item");
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<()> {
        self.items.remove(key);
        Ok(())
    }
}

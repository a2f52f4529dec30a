//! JSON file-based storage backend.
//!
//! This module provides a durable, human-readable key-value store using JSON
//! serialization. It uses atomic file writes (write-to-temp + rename) so a
//! crash never leaves a half-written file behind.
//!
//! # Performance Characteristics
//!
//! - **Read**: O(1) - the whole file is loaded into memory once on open
//! - **Write**: O(n) - every mutation rewrites the entire file
//! - **Best for**: a handful of keys with small values, which is what a
//!   single to-do slot amounts to

use crate::domain::error::{Result, TodoError};
use crate::storage::backend::Storage;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Current on-disk format version.
const FORMAT_VERSION: u32 = 1;

/// JSON storage container format.
///
/// Values are kept as the exact strings callers stored, so the to-do slot's
/// value is still a JSON array serialized as a string.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StorageData {
    version: u32,

    #[serde(default)]
    items: BTreeMap<String, String>,
}

impl Default for StorageData {
    fn default() -> Self {
        Self {
            version: FORMAT_VERSION,
            items: BTreeMap::new(),
        }
    }
}

/// JSON file storage backend.
///
/// The entire key space is kept in memory and persisted on every mutation.
///
/// # File Format
///
/// ```json
/// {
///   "version": 1,
///   "items": {
///     "todos": "[{\"id\":\"todo-1\",\"text\":\"buy milk\",\"done\":false}]"
///   }
/// }
/// ```
#[derive(Debug)]
pub struct FileStorage {
    /// Path to the JSON file on disk.
    file_path: PathBuf,

    /// In-memory copy, loaded on creation.
    data: StorageData,

    /// Tracks if data has been modified since last save.
    dirty: bool,
}

impl FileStorage {
    /// Creates or opens a file storage backend.
    ///
    /// If the file exists its contents are loaded; otherwise the storage starts
    /// empty and the file is only created on the first write. Parent
    /// directories are created automatically.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Parent directory creation fails
    /// - File exists but contains invalid JSON
    /// - File permissions prevent reading
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use todostate::storage::FileStorage;
    ///
    /// let storage = FileStorage::new("/tmp/todostate/storage.json")?;
    /// # Ok::<(), todostate::TodoError>(())
    /// ```
    pub fn new(file_path: impl Into<PathBuf>) -> Result<Self> {
        let file_path = file_path.into();
        tracing::debug!(path = ?file_path, "initializing file storage");

        if let Some(parent) = file_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let data = if file_path.exists() {
            Self::load_from_file(&file_path)?
        } else {
            tracing::debug!("initializing new empty storage");
            StorageData::default()
        };

        tracing::debug!(keys = data.items.len(), "storage initialized");

        Ok(Self {
            file_path,
            data,
            dirty: false,
        })
    }

    fn load_from_file(path: &Path) -> Result<StorageData> {
        let contents = std::fs::read_to_string(path)?;
        let data: StorageData = serde_json::from_str(&contents)
            .map_err(|e| TodoError::Storage(format!("failed to parse storage file: {e}")))?;

        if data.version != FORMAT_VERSION {
            return Err(TodoError::Storage(format!(
                "unsupported storage format version {}",
                data.version
            )));
        }

        tracing::debug!(version = data.version, keys = data.items.len(), "loaded storage data");
        Ok(data)
    }

    /// Saves storage data to disk using write-to-temp + rename.
    fn save_to_file(&mut self) -> Result<()> {
        if !self.dirty {
            tracing::trace!("skipping save, no changes");
            return Ok(());
        }

        let json = serde_json::to_string_pretty(&self.data)
            .map_err(|e| TodoError::Storage(format!("failed to serialize storage: {e}")))?;

        let tmp_path = self.file_path.with_extension("tmp");

        tracing::trace!(tmp_path = ?tmp_path, "writing to temporary file");
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, &self.file_path)?;

        self.dirty = false;
        tracing::debug!(path = ?self.file_path, "storage saved");
        Ok(())
    }

    /// Persists a mutation of `key`, restoring `previous` if the write fails.
    ///
    /// A failed write leaves memory and disk both holding the old value, so
    /// nothing the caller was told failed can surface later.
    fn commit(&mut self, key: &str, previous: Option<String>) -> Result<()> {
        self.dirty = true;
        if let Err(e) = self.save_to_file() {
            tracing::warn!(key = %key, error = %e, "write failed, rolling back");
            match previous {
                Some(value) => self.data.items.insert(key.to_string(), value),
                None => self.data.items.remove(key),
            };
            self.dirty = false;
            return Err(e);
        }
        Ok(())
    }
}

impl Storage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.data.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        let _span = tracing::debug_span!("file_set_item", key = %key, bytes = value.len()).entered();

        let previous = self.data.items.insert(key.to_string(), value.to_string());
        self.commit(key, previous)
    }

    fn remove_item(&mut self, key: &str) -> Result<()> {
        let _span = tracing::debug_span!("file_remove_item", key = %key).entered();

        match self.data.items.remove(key) {
            Some(previous) => self.commit(key, Some(previous)),
            None => Ok(()),
        }
    }
}

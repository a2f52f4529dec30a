//! Todostate: a small synchronous state container for a to-do list.
//!
//! Todostate provides:
//! - A closed action vocabulary (create, update, delete) with typed payloads
//! - A reducer computing the next list and persisting it to a durable slot
//! - A dispatcher adapting UI callbacks into submitted actions
//! - Pluggable storage (in-memory, JSON file) behind a key-value trait
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Host (main.rs CLI, or any UI layer)                │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - Action vocabulary                                │
//! │  - Dispatcher → Reducer → Store                     │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Storage Layer (storage/)                           │
//! │  - Key-value backend trait                          │
//! │  - Memory / JSON file backends                      │
//! │  - "todos" slot codec                               │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain, Infrastructure & Observability             │
//! │  - Entry model, id generation, errors (domain/)     │
//! │  - Data directory paths (infrastructure/)           │
//! │  - tracing subscriber setup (observability/)        │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Actions, reducer, dispatcher and store
//! - [`domain`]: Core domain types (Entry, ids, errors)
//! - [`infrastructure`]: Platform paths
//! - [`storage`]: Durable slot and its backends
//! - [`observability`]: Logging setup
//!
//! # Configuration
//!
//! ```toml
//! # ~/.config/todostate/config.toml
//! data_dir = "~/.local/share/todostate"
//! storage_key = "todos"
//! delete_match = "exact"
//! id_strategy = "uuid"
//! trace_level = "debug"
//! log_file = true
//! ```
//!
//! # Example
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use todostate::storage::{MemoryStorage, TodoSlot};
//! use todostate::{ActionDispatcher, TodoReducer, TodoStore};
//!
//! let store = TodoStore::open(TodoReducer::new(TodoSlot::new(MemoryStorage::new())))?;
//! let store = Rc::new(RefCell::new(store));
//!
//! let host = Rc::clone(&store);
//! let dispatcher = ActionDispatcher::new(move |action| {
//!     if let Err(e) = host.borrow_mut().dispatch(&action) {
//!         tracing::error!(error = %e, "dispatch failed");
//!     }
//! });
//!
//! let entry = dispatcher.create_todo("buy milk");
//! dispatcher.update_todo(&entry.id, true, "buy milk");
//! assert!(store.borrow().entries()[0].done);
//! # Ok::<(), todostate::TodoError>(())
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod storage;

pub use app::{
    transform, Action, ActionDispatcher, ActionRecord, MatchPolicy, SubmitMap, TodoReducer,
    TodoStore, Verb,
};
pub use domain::{Entry, IdGenerator, IdStrategy, Result, SequentialIds, TodoError};

use domain::id::sequential_suffix;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use storage::{FileStorage, TodoSlot, DEFAULT_KEY};

/// Runtime configuration.
///
/// Every field has a default, so an empty TOML file or an empty map yields
/// [`Config::default`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding the storage and log files.
    ///
    /// `~` is expanded. Default: the platform data directory + `todostate`.
    pub data_dir: Option<PathBuf>,

    /// Key of the durable slot. Default: `"todos"`
    pub storage_key: String,

    /// How delete actions match ids. Default: `substring`
    pub delete_match: MatchPolicy,

    /// How new entry ids are generated. Default: `uuid`
    pub id_strategy: IdStrategy,

    /// Tracing filter, e.g. `debug` or `todostate=trace`. Default: `"info"`
    pub trace_level: Option<String>,

    /// Log to `todostate.log` in the data directory instead of stderr.
    pub log_file: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: None,
            storage_key: DEFAULT_KEY.to_string(),
            delete_match: MatchPolicy::default(),
            id_strategy: IdStrategy::default(),
            trace_level: None,
            log_file: false,
        }
    }
}

impl Config {
    /// Parses configuration from a flat string map, e.g. host-supplied options.
    ///
    /// # Parsing Rules
    ///
    /// - `data_dir`: path, ignored if empty
    /// - `storage_key`: string, ignored if empty
    /// - `delete_match`: `substring` | `exact` (falls back to `substring`)
    /// - `id_strategy`: `uuid` | `sequential` | `timestamp` (falls back to `uuid`)
    /// - `trace_level`: string
    /// - `log_file`: `true` | `false` (falls back to `false`)
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use todostate::{Config, MatchPolicy};
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("delete_match".to_string(), "exact".to_string());
    /// map.insert("storage_key".to_string(), "".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.delete_match, MatchPolicy::Exact);
    /// assert_eq!(config.storage_key, "todos");
    /// ```
    #[must_use]
    pub fn from_map(map: &BTreeMap<String, String>) -> Self {
        let non_empty = |key: &str| {
            map.get(key)
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
        };

        Self {
            data_dir: non_empty("data_dir").map(PathBuf::from),
            storage_key: non_empty("storage_key")
                .map_or_else(|| DEFAULT_KEY.to_string(), String::from),
            delete_match: non_empty("delete_match")
                .and_then(MatchPolicy::from_name)
                .unwrap_or_default(),
            id_strategy: non_empty("id_strategy")
                .and_then(IdStrategy::from_name)
                .unwrap_or_default(),
            trace_level: non_empty("trace_level").map(String::from),
            log_file: non_empty("log_file")
                .and_then(|s| s.parse::<bool>().ok())
                .unwrap_or(false),
        }
    }

    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`TodoError::Config`] for malformed TOML or values of the wrong type.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| TodoError::Config(e.to_string()))
    }

    /// Reads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`TodoError::Io`] if the file cannot be read and
    /// [`TodoError::Config`] if it does not parse.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = ?path, "loading config file");
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Resolved data directory.
    #[must_use]
    pub fn data_dir(&self) -> PathBuf {
        infrastructure::get_data_dir(self.data_dir.as_deref())
    }

    /// Path of the storage file inside the data directory.
    #[must_use]
    pub fn storage_path(&self) -> PathBuf {
        self.data_dir().join(infrastructure::STORAGE_FILE_NAME)
    }

    /// Builds the configured id generator.
    ///
    /// A sequential generator is seeded past the highest `todo-<n>` id in
    /// `existing`, so restored lists do not get duplicate ids.
    #[must_use]
    pub fn id_generator(&self, existing: &[Entry]) -> Box<dyn IdGenerator> {
        let start = existing
            .iter()
            .filter_map(|entry| sequential_suffix(&entry.id))
            .max()
            .map_or(1, |max| max.saturating_add(1));
        self.id_strategy.generator(start)
    }
}

/// Opens the file-backed store described by `config`.
///
/// # Errors
///
/// Fails if the storage file cannot be opened or the persisted list is
/// malformed.
///
/// # Example
///
/// ```no_run
/// use todostate::{initialize, Config};
///
/// let store = initialize(&Config::default())?;
/// println!("{} entries", store.entries().len());
/// # Ok::<(), todostate::TodoError>(())
/// ```
pub fn initialize(config: &Config) -> Result<TodoStore<FileStorage>> {
    tracing::debug!(storage = ?config.storage_path(), key = %config.storage_key, "initializing store");

    let storage = FileStorage::new(config.storage_path())?;
    let slot = TodoSlot::with_key(storage, config.storage_key.clone());
    TodoStore::open(TodoReducer::with_policy(slot, config.delete_match))
}

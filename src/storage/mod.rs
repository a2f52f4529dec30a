//! Storage layer for the persisted to-do list.
//!
//! The list survives restarts through a single "durable slot": one key in a
//! string key-value store whose value is the JSON-serialized entry array. The
//! backend is injected, so tests run against an in-memory fake while hosts use
//! a file.
//!
//! # Modules
//!
//! - `backend`: Storage trait abstraction for backend implementations
//! - `json`: JSON file-based storage implementation
//! - `memory`: In-memory storage implementation
//! - `slot`: The key-bound entry list codec used by the reducer

pub mod backend;
pub mod json;
pub mod memory;
pub mod slot;

pub use backend::Storage;
pub use json::FileStorage;
pub use memory::MemoryStorage;
pub use slot::{TodoSlot, DEFAULT_KEY};

//! Domain layer for the to-do state container.
//!
//! This module contains the core domain types, independent of how the state is
//! stored or which host drives it.
//!
//! # Organization
//!
//! - [`entry`]: The to-do entry model
//! - [`error`]: Error types and result aliases
//! - [`id`]: Entry id generation strategies
//!
//! # Examples
//!
//! ```
//! use todostate::domain::{Entry, IdGenerator, SequentialIds};
//!
//! let ids = SequentialIds::default();
//! let entry = Entry::new(ids.next_id(), "buy milk");
//! assert_eq!(entry.id, "todo-1");
//! ```

pub mod entry;
pub mod error;
pub mod id;

pub use entry::Entry;
pub use error::{Result, TodoError};
pub use id::{IdGenerator, IdStrategy, SequentialIds, TimestampIds, UuidIds};

//! Entry identifier generation.
//!
//! New entries get their id from an [`IdGenerator`] injected into the
//! dispatcher. Three strategies are provided:
//!
//! - [`UuidIds`]: `todo-<uuid v4>` (default)
//! - [`SequentialIds`]: `todo-1`, `todo-2`, ...
//! - [`TimestampIds`]: `todo-<random 1..=10000>-<unix millis>`, the scheme
//!   used by older hosts. Two calls in the same millisecond can collide.

use serde::{Deserialize, Serialize};
use std::cell::Cell;
use uuid::Uuid;

/// Prefix shared by every generated id.
pub const ID_PREFIX: &str = "todo";

/// Upper bound (inclusive) of the random component of [`TimestampIds`].
const TIMESTAMP_RANDOM_MAX: u128 = 10_000;

/// Source of locally-unique entry ids.
pub trait IdGenerator {
    /// Returns a fresh id.
    fn next_id(&self) -> String;
}

/// Generates `todo-<uuid v4>` ids.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn next_id(&self) -> String {
        format!("{ID_PREFIX}-{}", Uuid::new_v4())
    }
}

/// Generates `todo-<n>` ids from a monotonic counter.
///
/// The counter lives in a `Cell`, so the generator is usable behind a shared
/// reference but is not `Sync`.
#[derive(Debug)]
pub struct SequentialIds {
    next: Cell<u64>,
}

impl SequentialIds {
    /// Creates a counter whose first id is `todo-<start>`.
    ///
    /// Hosts restoring a persisted list should seed this past the highest
    /// numeric id already in use.
    #[must_use]
    pub const fn starting_at(start: u64) -> Self {
        Self {
            next: Cell::new(start),
        }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&self) -> String {
        let n = self.next.get();
        self.next.set(n.saturating_add(1));
        format!("{ID_PREFIX}-{n}")
    }
}

/// Generates `todo-<r>-<t>` ids, `r` random in `1..=10000`, `t` Unix millis.
#[derive(Debug, Default, Clone, Copy)]
pub struct TimestampIds;

impl IdGenerator for TimestampIds {
    fn next_id(&self) -> String {
        let random = Uuid::new_v4().as_u128() % TIMESTAMP_RANDOM_MAX + 1;
        let millis = chrono::Utc::now().timestamp_millis();
        format!("{ID_PREFIX}-{random}-{millis}")
    }
}

/// Id strategy selected through configuration.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    #[default]
    Uuid,
    Sequential,
    Timestamp,
}

impl IdStrategy {
    /// Parses a strategy name as used in configuration (`uuid`, `sequential`, `timestamp`).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "uuid" => Some(Self::Uuid),
            "sequential" => Some(Self::Sequential),
            "timestamp" => Some(Self::Timestamp),
            _ => None,
        }
    }

    /// Builds the generator for this strategy.
    ///
    /// `Sequential` is seeded with `start`; the other strategies ignore it.
    #[must_use]
    pub fn generator(self, start: u64) -> Box<dyn IdGenerator> {
        match self {
            Self::Uuid => Box::new(UuidIds),
            Self::Sequential => Box::new(SequentialIds::starting_at(start)),
            Self::Timestamp => Box::new(TimestampIds),
        }
    }
}

/// Returns the numeric suffix of a `todo-<n>` id, if it has that shape.
///
/// Used to seed [`SequentialIds`] from an existing list.
#[must_use]
pub fn sequential_suffix(id: &str) -> Option<u64> {
    let digits = id.strip_prefix(ID_PREFIX)?.strip_prefix('-')?;
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    digits.parse::<u64>().ok()
}

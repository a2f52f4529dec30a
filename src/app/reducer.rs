//! State transformer: computes the next to-do list from an action.
//!
//! [`transform`] is the pure part: given a list and an action it returns the
//! next list. [`TodoReducer`] wraps it with the durable slot: it loads the list
//! when the caller has none, and persists every result before returning it.
//!
//! # Flow
//!
//! ```text
//! (previous state | slot) + Action → transform → save to slot → new Vec
//! ```
//!
//! The returned vector is always a fresh value owned by the caller, so hosts
//! doing change detection on identity see a new state after every call, even
//! when no entry changed.

use crate::app::actions::{Action, ActionRecord};
use crate::domain::error::Result;
use crate::domain::Entry;
use crate::storage::{Storage, TodoSlot};
use serde::{Deserialize, Serialize};

/// How a delete action selects the entries it removes.
///
/// `Substring` is the historical behavior: an entry goes if its id *contains*
/// the target id. This also removes `todo-10` when deleting `todo-1`, and an
/// empty target removes everything. `Exact` only removes ids equal to the
/// target.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchPolicy {
    #[default]
    Substring,
    Exact,
}

impl MatchPolicy {
    /// Returns true if an entry with `id` is selected by `target`.
    #[must_use]
    pub fn matches(self, id: &str, target: &str) -> bool {
        match self {
            Self::Substring => id.contains(target),
            Self::Exact => id == target,
        }
    }

    /// Parses a policy name as used in configuration (`substring`, `exact`).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "substring" => Some(Self::Substring),
            "exact" => Some(Self::Exact),
            _ => None,
        }
    }
}

/// Computes the list that results from applying `action` to `state`.
///
/// `state` is left untouched.
///
/// - `Create`: the entry is appended.
/// - `Update`: every entry with the payload's id is replaced by the payload.
/// - `Delete`: entries selected by `policy` are dropped.
///
/// # Examples
///
/// ```
/// use todostate::{transform, Action, Entry, MatchPolicy};
///
/// let state = vec![Entry::new("todo-1", "a"), Entry::new("todo-2", "b")];
/// let next = transform(&state, &Action::Delete { id: "todo-1".into() }, MatchPolicy::Exact);
/// assert_eq!(next, vec![Entry::new("todo-2", "b")]);
/// assert_eq!(state.len(), 2);
/// ```
#[must_use]
pub fn transform(state: &[Entry], action: &Action, policy: MatchPolicy) -> Vec<Entry> {
    apply(state.to_vec(), action, policy)
}

fn apply(mut state: Vec<Entry>, action: &Action, policy: MatchPolicy) -> Vec<Entry> {
    match action {
        Action::Create(entry) => {
            state.push(entry.clone());
        }
        Action::Update(replacement) => {
            let mut replaced = 0usize;
            for entry in state.iter_mut().filter(|e| e.id == replacement.id) {
                entry.clone_from(replacement);
                replaced += 1;
            }
            if replaced == 0 {
                tracing::debug!(id = %replacement.id, "update matched no entry");
            }
        }
        Action::Delete { id } => {
            if id.is_empty() && policy == MatchPolicy::Substring {
                tracing::warn!("empty delete target matches every entry");
            }
            let before = state.len();
            state.retain(|entry| !policy.matches(&entry.id, id));
            tracing::debug!(id = %id, policy = ?policy, removed = before - state.len(), "delete applied");
        }
    }
    state
}

/// The persisting state transformer.
///
/// Owns the durable slot. Each call is a single synchronous
/// load (if needed), transform, save sequence; concurrent use is not
/// guarded against and the last save wins.
#[derive(Debug)]
pub struct TodoReducer<S> {
    slot: TodoSlot<S>,
    policy: MatchPolicy,
}

impl<S: Storage> TodoReducer<S> {
    /// Creates a reducer over `slot` using the default [`MatchPolicy::Substring`].
    pub fn new(slot: TodoSlot<S>) -> Self {
        Self::with_policy(slot, MatchPolicy::default())
    }

    pub fn with_policy(slot: TodoSlot<S>, policy: MatchPolicy) -> Self {
        Self { slot, policy }
    }

    #[must_use]
    pub const fn slot(&self) -> &TodoSlot<S> {
        &self.slot
    }

    /// Loads the persisted list, or an empty one if the slot was never written.
    ///
    /// # Errors
    ///
    /// Propagates slot read and parse failures.
    pub fn load(&self) -> Result<Vec<Entry>> {
        Ok(self.slot.load()?.unwrap_or_default())
    }

    /// Applies `action` and persists the result.
    ///
    /// When `previous` is `None` the list is first loaded from the slot.
    ///
    /// # Errors
    ///
    /// Returns [`crate::TodoError::Parse`] if the slot must be loaded and holds
    /// malformed content, or the backend's error if the save fails. Nothing is
    /// retried.
    ///
    /// # Examples
    ///
    /// ```
    /// use todostate::storage::{MemoryStorage, TodoSlot};
    /// use todostate::{Action, Entry, TodoReducer};
    ///
    /// let mut reducer = TodoReducer::new(TodoSlot::new(MemoryStorage::new()));
    /// let state = reducer.reduce(None, &Action::Create(Entry::new("todo-1", "buy milk")))?;
    /// assert_eq!(state.len(), 1);
    /// assert_eq!(reducer.load()?, state);
    /// # Ok::<(), todostate::TodoError>(())
    /// ```
    pub fn reduce(&mut self, previous: Option<Vec<Entry>>, action: &Action) -> Result<Vec<Entry>> {
        let _span = tracing::debug_span!("reduce",
            verb = %action.verb(),
            target = %action.target_id()
        )
        .entered();

        let state = self.resolve(previous)?;
        let next = apply(state, action, self.policy);
        self.persist(next)
    }

    /// Applies an untyped record.
    ///
    /// Records with an unrecognized verb leave the list unchanged; the list is
    /// still persisted and returned as a new value.
    ///
    /// # Errors
    ///
    /// Returns [`crate::TodoError::Action`] for a recognized verb with
    /// malformed details, plus everything [`TodoReducer::reduce`] can return.
    pub fn reduce_record(
        &mut self,
        previous: Option<Vec<Entry>>,
        record: &ActionRecord,
    ) -> Result<Vec<Entry>> {
        match Action::decode(record)? {
            Some(action) => self.reduce(previous, &action),
            None => {
                let _span = tracing::debug_span!("reduce_passthrough", verb = %record.verb).entered();
                let state = self.resolve(previous)?;
                self.persist(state)
            }
        }
    }

    fn resolve(&self, previous: Option<Vec<Entry>>) -> Result<Vec<Entry>> {
        match previous {
            Some(state) => Ok(state),
            None => self.load(),
        }
    }

    fn persist(&mut self, state: Vec<Entry>) -> Result<Vec<Entry>> {
        self.slot.save(&state)?;
        tracing::debug!(count = state.len(), "state persisted");
        Ok(state)
    }
}

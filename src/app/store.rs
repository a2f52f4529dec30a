//! Host-side store holding the latest state handed back by the reducer.
//!
//! The store plays the role a UI framework's state container would: it keeps
//! the current list, feeds it to the reducer with every action, and keeps the
//! new list the reducer returns.

use crate::app::actions::{Action, ActionRecord};
use crate::app::reducer::TodoReducer;
use crate::domain::error::Result;
use crate::domain::Entry;
use crate::storage::Storage;

#[derive(Debug)]
pub struct TodoStore<S> {
    reducer: TodoReducer<S>,
    state: Vec<Entry>,
    revision: u64,
}

impl<S: Storage> TodoStore<S> {
    /// Opens a store, restoring the last persisted list.
    ///
    /// # Errors
    ///
    /// Fails if the slot cannot be read or holds malformed content.
    pub fn open(reducer: TodoReducer<S>) -> Result<Self> {
        let state = reducer.load()?;
        tracing::debug!(count = state.len(), "store opened");
        Ok(Self {
            reducer,
            state,
            revision: 0,
        })
    }

    /// Runs the reducer with the current state and keeps the result.
    ///
    /// # Errors
    ///
    /// Propagates reducer failures; the current state is kept on error.
    pub fn dispatch(&mut self, action: &Action) -> Result<&[Entry]> {
        let next = self.reducer.reduce(Some(self.state.clone()), action)?;
        Ok(self.replace(next))
    }

    /// Same as [`TodoStore::dispatch`] for untyped records.
    ///
    /// # Errors
    ///
    /// Propagates decode and reducer failures.
    pub fn dispatch_record(&mut self, record: &ActionRecord) -> Result<&[Entry]> {
        let next = self.reducer.reduce_record(Some(self.state.clone()), record)?;
        Ok(self.replace(next))
    }

    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.state
    }

    /// Looks up the first entry with exactly this id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Entry> {
        self.state.iter().find(|entry| entry.id == id)
    }

    /// Number of state replacements since the store was opened.
    ///
    /// Bumps on every successful dispatch, including ones that changed nothing.
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    #[must_use]
    pub const fn reducer(&self) -> &TodoReducer<S> {
        &self.reducer
    }

    fn replace(&mut self, next: Vec<Entry>) -> &[Entry] {
        self.state = next;
        self.revision = self.revision.saturating_add(1);
        &self.state
    }
}

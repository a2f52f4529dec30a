//! Action dispatcher: translates UI-facing calls into submitted actions.
//!
//! The dispatcher wraps one host-supplied submit function and exposes typed
//! convenience methods. It never inspects what the submit function does with
//! an action and performs no validation of its own: empty text is accepted,
//! and ids are not checked for existence or uniqueness.
//!
//! # Example
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use todostate::{Action, ActionDispatcher, SequentialIds};
//!
//! let submitted = Rc::new(RefCell::new(Vec::new()));
//! let sink = Rc::clone(&submitted);
//! let dispatcher = ActionDispatcher::with_ids(
//!     move |action: Action| sink.borrow_mut().push(action),
//!     SequentialIds::default(),
//! );
//!
//! dispatcher.create_todo("buy milk");
//! dispatcher.delete_todo("todo-1");
//! assert_eq!(submitted.borrow().len(), 2);
//! ```

use crate::app::actions::Action;
use crate::domain::id::{IdGenerator, UuidIds};
use crate::domain::Entry;
use std::fmt;
use std::rc::Rc;

/// Builds actions and hands them to the host's submit function.
///
/// Cloning is cheap: clones share the submit function and the id generator.
/// Shared state is reference-counted with `Rc`, so dispatchers stay on the
/// thread that created them.
#[derive(Clone)]
pub struct ActionDispatcher {
    submit: Rc<dyn Fn(Action)>,
    ids: Rc<dyn IdGenerator>,
}

impl ActionDispatcher {
    /// Creates a dispatcher generating [`UuidIds`].
    pub fn new(submit: impl Fn(Action) + 'static) -> Self {
        Self::with_ids(submit, UuidIds)
    }

    /// Creates a dispatcher with a specific id generator.
    pub fn with_ids(submit: impl Fn(Action) + 'static, ids: impl IdGenerator + 'static) -> Self {
        Self {
            submit: Rc::new(submit),
            ids: Rc::new(ids),
        }
    }

    /// Creates a dispatcher from an already boxed id generator, as produced by
    /// [`crate::domain::IdStrategy::generator`].
    pub fn with_boxed_ids(submit: impl Fn(Action) + 'static, ids: Box<dyn IdGenerator>) -> Self {
        Self {
            submit: Rc::new(submit),
            ids: Rc::from(ids),
        }
    }

    /// Submits a create action for a new, not-done entry with a fresh id.
    ///
    /// Returns the entry that was submitted.
    pub fn create_todo(&self, text: &str) -> Entry {
        let entry = Entry::new(self.ids.next_id(), text);
        tracing::debug!(id = %entry.id, "dispatching create");
        (self.submit)(Action::Create(entry.clone()));
        entry
    }

    /// Submits an update action carrying the complete desired entry.
    pub fn update_todo(&self, id: &str, done: bool, text: &str) {
        tracing::debug!(id = %id, done, "dispatching update");
        (self.submit)(Action::Update(Entry::new(id, text).with_done(done)));
    }

    /// Submits a delete action for `id`.
    pub fn delete_todo(&self, id: &str) {
        tracing::debug!(id = %id, "dispatching delete");
        (self.submit)(Action::Delete { id: id.to_string() });
    }

    /// Returns the three methods bound to this dispatcher, for UI wiring that
    /// expects plain callbacks.
    #[must_use]
    pub fn submit_map(&self) -> SubmitMap {
        let create = self.clone();
        let update = self.clone();
        let delete = self.clone();

        SubmitMap {
            create_todo: Box::new(move |text: &str| {
                create.create_todo(text);
            }),
            update_todo: Box::new(move |id: &str, done: bool, text: &str| {
                update.update_todo(id, done, text);
            }),
            delete_todo: Box::new(move |id: &str| delete.delete_todo(id)),
        }
    }
}

impl fmt::Debug for ActionDispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionDispatcher").finish_non_exhaustive()
    }
}

/// The dispatcher's methods as standalone callbacks.
pub struct SubmitMap {
    /// `create_todo(text)`
    pub create_todo: Box<dyn Fn(&str)>,
    /// `update_todo(id, done, text)`
    pub update_todo: Box<dyn Fn(&str, bool, &str)>,
    /// `delete_todo(id)`
    pub delete_todo: Box<dyn Fn(&str)>,
}

impl fmt::Debug for SubmitMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubmitMap").finish_non_exhaustive()
    }
}

//! Application layer: actions, the reducer, the dispatcher, and the store.
//!
//! # Architecture
//!
//! Data flows in one direction:
//!
//! ```text
//! UI call → ActionDispatcher → Action → host submit → TodoReducer → slot
//!                                                          ↓
//!                                  host re-render ← new Vec<Entry>
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Verbs, typed actions, and the untyped record envelope
//! - [`dispatcher`]: Turns UI-facing calls into submitted actions
//! - [`reducer`]: Pure transform plus the persisting reducer
//! - [`store`]: Host-side container keeping the latest state

pub mod actions;
pub mod dispatcher;
pub mod reducer;
pub mod store;

pub use actions::{Action, ActionRecord, Verb};
pub use dispatcher::{ActionDispatcher, SubmitMap};
pub use reducer::{transform, MatchPolicy, TodoReducer};
pub use store::TodoStore;

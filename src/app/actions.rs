//! Action vocabulary: the verbs and the records describing requested mutations.
//!
//! An [`Action`] is one requested change to the to-do list. Each variant
//! carries its own typed payload, so the reducer never has to guess the shape
//! of the details.
//!
//! # Wire form
//!
//! Actions serialize to the envelope hosts exchange:
//!
//! ```json
//! { "type": "CREATE_TODO", "details": { "id": "todo-1", "text": "a", "done": false } }
//! { "type": "UPDATE_TODO", "details": { "id": "todo-1", "text": "a", "done": true } }
//! { "type": "DELETE_TODO", "details": { "id": "todo-1" } }
//! ```
//!
//! Records whose verb is not known arrive as an untyped [`ActionRecord`] and
//! are decoded with [`Action::decode`].
//!
//! # Example
//!
//! ```rust
//! use todostate::{Action, Entry, Verb};
//!
//! let action = Action::Delete { id: "todo-1".to_string() };
//! assert_eq!(action.verb(), Verb::DeleteTodo);
//!
//! let json = serde_json::to_string(&action).unwrap();
//! assert_eq!(json, r#"{"type":"DELETE_TODO","details":{"id":"todo-1"}}"#);
//! ```

use crate::domain::error::{Result, TodoError};
use crate::domain::Entry;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of verbs understood by the reducer.
///
/// Adding a verb means adding an [`Action`] variant, a reducer arm, and a
/// dispatcher method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verb {
    CreateTodo,
    UpdateTodo,
    DeleteTodo,
}

impl Verb {
    /// All verbs, in declaration order.
    pub const ALL: [Self; 3] = [Self::CreateTodo, Self::UpdateTodo, Self::DeleteTodo];

    /// Returns the wire name of the verb (e.g. `"CREATE_TODO"`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CreateTodo => "CREATE_TODO",
            Self::UpdateTodo => "UPDATE_TODO",
            Self::DeleteTodo => "DELETE_TODO",
        }
    }

    /// Looks up a verb by its wire name. Matching is exact.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|verb| verb.as_str() == name)
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A requested mutation of the to-do list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "details")]
pub enum Action {
    /// Appends the entry to the end of the list.
    #[serde(rename = "CREATE_TODO")]
    Create(Entry),

    /// Replaces every entry with the same id by this one.
    ///
    /// The payload is the complete desired entry; there is no field-level merge.
    #[serde(rename = "UPDATE_TODO")]
    Update(Entry),

    /// Removes the entries selected by the reducer's match policy.
    #[serde(rename = "DELETE_TODO")]
    Delete {
        /// Target id.
        id: String,
    },
}

impl Action {
    /// Returns the verb of this action.
    #[must_use]
    pub const fn verb(&self) -> Verb {
        match self {
            Self::Create(_) => Verb::CreateTodo,
            Self::Update(_) => Verb::UpdateTodo,
            Self::Delete { .. } => Verb::DeleteTodo,
        }
    }

    /// Returns the id the action targets.
    #[must_use]
    pub fn target_id(&self) -> &str {
        match self {
            Self::Create(entry) | Self::Update(entry) => &entry.id,
            Self::Delete { id } => id,
        }
    }

    /// Decodes an untyped record into a typed action.
    ///
    /// Returns `Ok(None)` when the verb is not recognized; the reducer treats
    /// that as a passthrough rather than an error.
    ///
    /// # Errors
    ///
    /// Returns [`TodoError::Action`] when the verb is known but the details do
    /// not have the shape that verb requires.
    pub fn decode(record: &ActionRecord) -> Result<Option<Self>> {
        let Some(verb) = Verb::from_name(&record.verb) else {
            tracing::debug!(verb = %record.verb, "unrecognized verb");
            return Ok(None);
        };

        let malformed =
            |e: serde_json::Error| TodoError::Action(format!("malformed {verb} details: {e}"));

        let action = match verb {
            Verb::CreateTodo => {
                Self::Create(serde_json::from_value(record.details.clone()).map_err(malformed)?)
            }
            Verb::UpdateTodo => {
                Self::Update(serde_json::from_value(record.details.clone()).map_err(malformed)?)
            }
            Verb::DeleteTodo => {
                let target: DeleteDetails =
                    serde_json::from_value(record.details.clone()).map_err(malformed)?;
                Self::Delete { id: target.id }
            }
        };

        Ok(Some(action))
    }

    /// Converts the action into its untyped envelope.
    ///
    /// # Errors
    ///
    /// Returns [`TodoError::Parse`] if the payload cannot be serialized, which
    /// does not happen for the payload types used here.
    pub fn to_record(&self) -> Result<ActionRecord> {
        let details = match self {
            Self::Create(entry) | Self::Update(entry) => serde_json::to_value(entry)?,
            Self::Delete { id } => serde_json::to_value(DeleteDetails { id: id.clone() })?,
        };

        Ok(ActionRecord {
            verb: self.verb().as_str().to_string(),
            details,
        })
    }
}

/// Untyped action envelope as received from a host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// Verb name, e.g. `"CREATE_TODO"`. May be anything.
    #[serde(rename = "type")]
    pub verb: String,

    /// Verb-specific payload.
    #[serde(default)]
    pub details: serde_json::Value,
}

#[derive(Serialize, Deserialize)]
struct DeleteDetails {
    id: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn create_serializes_with_full_entry_details() {
        let action = Action::Create(Entry::new("todo-1", "a"));
        let value = serde_json::to_value(&action).unwrap();
        assert_eq!(
            value,
            json!({"type": "CREATE_TODO", "details": {"id": "todo-1", "text": "a", "done": false}})
        );
    }

    #[test]
    fn decode_ignores_unknown_verbs() {
        let record = ActionRecord {
            verb: "ARCHIVE_TODO".to_string(),
            details: json!({"id": "todo-1"}),
        };
        assert_eq!(Action::decode(&record).unwrap(), None);
    }

    #[test]
    fn decode_rejects_malformed_details() {
        let record = ActionRecord {
            verb: "UPDATE_TODO".to_string(),
            details: json!({"id": "todo-1"}),
        };
        assert!(matches!(Action::decode(&record), Err(TodoError::Action(_))));
    }

    #[test]
    fn decode_reads_delete_target() {
        let record: ActionRecord =
            serde_json::from_str(r#"{"type":"DELETE_TODO","details":{"id":"todo-9"}}"#).unwrap();
        assert_eq!(
            Action::decode(&record).unwrap(),
            Some(Action::Delete { id: "todo-9".to_string() })
        );
    }

    #[test]
    fn record_conversion_matches_serialized_form() {
        let action = Action::Update(Entry::new("todo-2", "b").with_done(true));
        let record = action.to_record().unwrap();
        assert_eq!(record.verb, "UPDATE_TODO");
        assert_eq!(Action::decode(&record).unwrap(), Some(action));
    }

    #[test]
    fn verb_lookup_is_exact() {
        assert_eq!(Verb::from_name("DELETE_TODO"), Some(Verb::DeleteTodo));
        assert_eq!(Verb::from_name("delete_todo"), None);
    }
}

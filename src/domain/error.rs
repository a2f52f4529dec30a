//! Error types for the to-do state container.
//!
//! This module defines the centralized error type [`TodoError`] and a type alias
//! [`Result`] used throughout the crate. All errors are implemented using the
//! `thiserror` crate for automatic `Error` trait implementation.

use thiserror::Error;

/// The main error type for to-do state operations.
///
/// Most failures surface from the durable slot: either the backend cannot be
/// read or written, or the stored value is not a valid serialized entry list.
/// None of them are retried; they propagate straight to the caller of the
/// reducer or store.
///
/// # Examples
///
/// ```
/// use todostate::TodoError;
///
/// fn open_backend() -> Result<(), TodoError> {
///     Err(TodoError::Storage("backend unavailable".to_string()))
/// }
///
/// assert!(open_backend().is_err());
/// ```
#[derive(Debug, Error)]
pub enum TodoError {
    /// Storage operation failed.
    ///
    /// Occurs when reading from or writing to the storage backend fails for a
    /// reason other than plain I/O (e.g. a corrupted storage file).
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The durable slot holds a value that is not a valid entry list.
    ///
    /// This is never recovered from: a corrupted slot stops the reducer from
    /// producing a state at all.
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// An action record carried a recognized verb with a malformed payload.
    #[error("Action error: {0}")]
    Action(String),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for to-do state operations.
pub type Result<T> = std::result::Result<T, TodoError>;

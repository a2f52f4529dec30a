//! Infrastructure layer for filesystem and environment interactions.

pub mod paths;

pub use paths::{expand_tilde, get_data_dir, LOG_FILE_NAME, STORAGE_FILE_NAME};

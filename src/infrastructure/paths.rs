//! Filesystem locations used by the crate.
//!
//! Everything lives under one data directory: the storage file holding the
//! durable slot and, when file logging is enabled, the log file.

use std::path::{Path, PathBuf};

/// Directory name appended to the platform data directory.
pub const APP_DIR_NAME: &str = "todostate";

/// File name of the JSON storage backend inside the data directory.
pub const STORAGE_FILE_NAME: &str = "storage.json";

/// File name of the log file inside the data directory.
pub const LOG_FILE_NAME: &str = "todostate.log";

/// Returns the data directory.
///
/// `override_dir` wins when set. Otherwise this is the platform data directory
/// (`~/.local/share/todostate` on Linux) or, if the platform reports none,
/// `.todostate` in the current directory.
///
/// # Examples
///
/// ```
/// use std::path::{Path, PathBuf};
/// use todostate::infrastructure::get_data_dir;
///
/// let dir = get_data_dir(Some(Path::new("/tmp/todos")));
/// assert_eq!(dir, PathBuf::from("/tmp/todos"));
/// ```
#[must_use]
pub fn get_data_dir(override_dir: Option<&Path>) -> PathBuf {
    if let Some(dir) = override_dir {
        return expand_tilde(dir);
    }

    dirs::data_dir().map_or_else(
        || PathBuf::from(format!(".{APP_DIR_NAME}")),
        |base| base.join(APP_DIR_NAME),
    )
}

/// Expands a leading `~` to the user's home directory.
///
/// Paths without a leading `~`, and every path when no home directory is
/// known, are returned unchanged.
#[must_use]
pub fn expand_tilde(path: &Path) -> PathBuf {
    let Ok(rest) = path.strip_prefix("~") else {
        return path.to_path_buf();
    };

    dirs::home_dir().map_or_else(|| path.to_path_buf(), |home| home.join(rest))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_paths_are_unchanged() {
        assert_eq!(expand_tilde(Path::new("/var/data")), PathBuf::from("/var/data"));
    }

    #[test]
    fn tilde_only_expands_as_a_whole_component() {
        assert_eq!(expand_tilde(Path::new("~backup/x")), PathBuf::from("~backup/x"));
    }

    #[test]
    fn default_dir_ends_with_app_name() {
        let dir = get_data_dir(None);
        assert!(dir.to_string_lossy().ends_with(APP_DIR_NAME));
    }
}

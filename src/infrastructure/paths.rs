//! Path utilities for the Zellij sandbox environment.
//!
//! This module provides the storage locations used by the plugin inside the
//! Zellij plugin sandbox, where the host filesystem is mounted under `/host`.

use std::path::PathBuf;

/// Returns the data directory for Zriends storage and logs.
///
/// The directory is located at `/host/.local/share/zellij/zriends` in the
/// Zellij sandbox. In Zellij's plugin environment, `/host` points to the cwd
/// of the last focused terminal, or the folder where Zellij was started if
/// that's not available, which typically resolves to the user's home
/// directory: `~/.local/share/zellij/zriends`.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("zriends")
}

/// Returns the path of the session file holding the backend credentials.
///
/// The session file is written by the login tooling (outside this plugin)
/// and read here for the bearer token. See `storage::JsonSessionStore` for
/// the file format.
#[must_use]
pub fn get_session_file() -> PathBuf {
    get_data_dir().join("session.json")
}

/// Returns the path of the plugin log file.
#[must_use]
pub fn get_log_file() -> PathBuf {
    get_data_dir().join("zriends.log")
}

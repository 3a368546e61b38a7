//! JSON file-based session store.
//!
//! Reads the session file written by the login tooling. The file is a single
//! JSON object (see [`SessionRecord`]); a missing file simply means no
//! session, which the plugin tolerates.

use crate::domain::error::{Result, ZriendsError};
use crate::storage::backend::SessionStore;
use crate::storage::models::SessionRecord;
use std::path::PathBuf;

/// JSON file session store.
///
/// The record is loaded once at construction and cached; the plugin does not
/// watch the file for changes, matching the screen's read-once semantics.
///
/// # File Format
///
/// ```json
/// {
///   "accessToken": "eyJhbGciOi...",
///   "refreshToken": "d4f1...",
///   "stored_at": 1234567890
/// }
/// ```
pub struct JsonSessionStore {
    /// Path to the session file on disk.
    file_path: PathBuf,

    /// Cached session record, `None` if the file does not exist.
    record: Option<SessionRecord>,
}

impl JsonSessionStore {
    /// Opens the session store at the given path.
    ///
    /// A missing file yields an empty store. An existing but unreadable or
    /// malformed file is an error, surfaced so the shim can log it.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or contains
    /// invalid JSON.
    pub fn new(file_path: PathBuf) -> Result<Self> {
        tracing::debug!(path = ?file_path, "opening session store");

        let record = if file_path.exists() {
            let contents = std::fs::read_to_string(&file_path)?;
            let record: SessionRecord = serde_json::from_str(&contents)
                .map_err(|e| ZriendsError::Session(format!("failed to parse session file: {e}")))?;
            tracing::debug!(
                has_refresh_token = record.refresh_token.is_some(),
                stored_at = ?record.stored_at,
                "session loaded"
            );
            Some(record)
        } else {
            tracing::debug!("no session file found");
            None
        };

        Ok(Self { file_path, record })
    }

    /// Returns the path this store reads from.
    #[must_use]
    pub fn path(&self) -> &PathBuf {
        &self.file_path
    }
}

impl SessionStore for JsonSessionStore {
    fn access_token(&self) -> Result<Option<String>> {
        Ok(self.record.as_ref().map(|r| r.access_token.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_no_token() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonSessionStore::new(dir.path().join("session.json")).unwrap();
        assert_eq!(store.access_token().unwrap(), None);
    }

    #[test]
    fn reads_access_token_from_wire_key() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, r#"{"accessToken": "tok-123"}"#).unwrap();

        let store = JsonSessionStore::new(path).unwrap();
        assert_eq!(store.access_token().unwrap().as_deref(), Some("tok-123"));
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "not json").unwrap();

        assert!(JsonSessionStore::new(path).is_err());
    }

    #[test]
    fn record_round_trips_optional_fields() {
        let record = SessionRecord::new("tok");
        let json = serde_json::to_string(&record).unwrap();
        let back: SessionRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, back);
        assert!(json.contains("accessToken"));
    }
}

//! Storage record models for the session file.
//!
//! This module defines the raw record type persisted in the session file.
//! It is separate from domain models to keep the on-disk representation
//! (written by the login tooling, read here) decoupled from business logic.

use serde::{Deserialize, Serialize};

/// A persisted backend session.
///
/// The field names mirror the keys the login tooling writes, so the wire key
/// for the bearer token is `accessToken`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    /// Bearer token used to authenticate directory requests.
    #[serde(rename = "accessToken")]
    pub access_token: String,

    /// Refresh token, if the login tooling issued one. Unused by the plugin
    /// (token refresh is outside its scope) but preserved on round-trips.
    #[serde(
        rename = "refreshToken",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub refresh_token: Option<String>,

    /// Unix timestamp when the session was stored, `None` for files written
    /// by older tooling.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stored_at: Option<i64>,
}

impl SessionRecord {
    /// Creates a session record stamped with the current time.
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            refresh_token: None,
            stored_at: Some(chrono::Utc::now().timestamp()),
        }
    }
}

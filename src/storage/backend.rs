//! Session store abstraction.
//!
//! This module defines the [`SessionStore`] trait that abstracts over where
//! the backend session lives. The plugin only ever reads the token; writing
//! it is the login tooling's job.
//!
//! # Design Philosophy
//!
//! The trait is deliberately minimal: one method per actual use case in the
//! plugin shim, not a generic credential manager.

use crate::domain::error::Result;

/// Abstraction over persistent session storage.
///
/// # Implementations
///
/// - [`JsonSessionStore`](crate::storage::JsonSessionStore): reads a JSON
///   session file from the plugin data directory (default)
pub trait SessionStore: Send {
    /// Returns the current bearer token, or `None` if no session is stored.
    ///
    /// A missing token is not an error: directory requests are issued with
    /// an empty Authorization value and the server rejects them.
    ///
    /// # Errors
    ///
    /// Returns an error if the session file exists but cannot be read or
    /// parsed.
    fn access_token(&self) -> Result<Option<String>>;
}

//! Error types for the Zriends plugin.
//!
//! This module defines the centralized error type [`ZriendsError`] and a type alias
//! [`Result`] for convenient error handling throughout the plugin, plus the
//! [`ApiFailure`] taxonomy for remote directory calls. All errors are implemented
//! using the `thiserror` crate for automatic `Error` trait implementation.

use thiserror::Error;

/// The main error type for Zriends plugin operations.
///
/// This enum consolidates all error conditions that can occur during plugin
/// execution, from session storage to theme loading. Most variants wrap
/// underlying errors from external crates using `#[from]` for automatic
/// conversion.
#[derive(Debug, Error)]
pub enum ZriendsError {
    /// Session storage operation failed.
    ///
    /// Occurs when reading from or writing to the session file fails.
    /// The string contains a description of what went wrong.
    #[error("Session storage error: {0}")]
    Session(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations. Automatically converts
    /// from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing or application failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid or missing.
    ///
    /// Occurs when required configuration values are missing or malformed.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Failure taxonomy for a single remote directory call.
///
/// Every directory response is reduced to either its success payload or one of
/// these variants. The screen treats all three identically (log, absorb, and at
/// most roll back or show a notice), but keeping them distinct lets tests
/// assert on the branch that was taken.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiFailure {
    /// The request never produced a usable HTTP response (status 0) or the
    /// server answered outside the 2xx range.
    #[error("transport failure (http status {status})")]
    Transport {
        /// HTTP status code as reported by the host, 0 if the request failed
        /// before a response was received.
        status: u16,
    },

    /// The response body was not the expected JSON envelope.
    #[error("malformed response: {detail}")]
    Malformed {
        /// Parser error description.
        detail: String,
    },

    /// The server answered with a well-formed envelope whose `status` field
    /// was not the literal `"success"`.
    #[error("rejected by server: {reason}")]
    Rejected {
        /// The envelope's `message` field if present, otherwise its `status`
        /// value.
        reason: String,
    },
}

/// A specialized `Result` type for Zriends operations.
///
/// This is a type alias for `std::result::Result<T, ZriendsError>` that
/// simplifies function signatures throughout the codebase.
pub type Result<T> = std::result::Result<T, ZriendsError>;

/// Outcome of a single remote directory call: the parsed success payload or
/// the failure branch that was taken.
///
/// This is the discriminated result consumed by the event handler, so both
/// branches are explicit values rather than swallowed exceptions.
pub type ApiResult<T> = std::result::Result<T, ApiFailure>;

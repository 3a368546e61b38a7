//! Storage layer for the persisted backend session.
//!
//! This module provides the session store abstraction used to source the
//! bearer token for directory requests. The token is written by the login
//! tooling; the plugin only reads it.
//!
//! # Modules
//!
//! - `backend`: Session store trait abstraction
//! - `json`: JSON file-based implementation
//! - `models`: On-disk record types

pub mod backend;
pub mod json;
pub mod models;

pub use backend::SessionStore;
pub use json::JsonSessionStore;
pub use models::SessionRecord;

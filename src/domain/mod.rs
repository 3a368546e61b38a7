//! Domain layer for the Zriends plugin.
//!
//! This module contains the core domain types and business rules for the
//! plugin, independent of Zellij-specific APIs or infrastructure concerns.
//!
//! # Organization
//!
//! - [`error`]: Error types, the `ApiFailure` taxonomy, and result aliases
//! - [`person`]: Person domain model and the roster search filter

pub mod error;
pub mod person;

pub use error::{ApiFailure, ApiResult, Result, ZriendsError};
pub use person::{filter_people, Person};

//! Application layer for the Zriends plugin.
//!
//! This module contains the state machine at the heart of the plugin: the
//! state container, the event handler that mutates it, the optimistic
//! accept flow, and the action type bridging to the plugin runtime.
//!
//! # Organization
//!
//! - [`state`]: Central state container and view model computation
//! - [`handler`]: Event processing and state transitions
//! - [`accept`]: Optimistic accept with commit/rollback
//! - [`actions`]: Side-effect commands for the plugin shim
//! - [`modes`]: Input mode and roster section enums

pub mod accept;
pub mod actions;
pub mod handler;
pub mod modes;
pub mod state;

pub use accept::InFlightAccept;
pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::{InputMode, Section};
pub use state::{AppState, Notice};

//! Infrastructure layer for filesystem and environment interactions.
//!
//! This module provides utilities for working with the Zellij plugin sandbox
//! environment, particularly the `/host`-mounted storage locations.

pub mod paths;

pub use paths::{get_data_dir, get_log_file, get_session_file};

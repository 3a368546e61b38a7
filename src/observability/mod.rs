//! Structured logging with file-based JSON export.
//!
//! This module provides the logging infrastructure for the plugin. Events
//! emitted through `tracing` macros are serialized as JSON lines and written
//! to a rotating log file for offline analysis and debugging.
//!
//! # Architecture
//!
//! ```text
//! tracing macros → EnvFilter → fmt JSON layer → FileWriter → log file
//! ```
//!
//! # Features
//!
//! - **File-Based Export**: Logs written to `/host/.local/share/zellij/zriends/zriends.log`
//! - **Automatic Rotation**: Files rotate at 10MB with 3-backup retention
//! - **JSON Lines**: One structured event per line
//!
//! # Configuration
//!
//! Log level is controlled via the `log_level` plugin configuration option
//! (an `EnvFilter` directive string), defaulting to `"info"`.
//!
//! # Modules
//!
//! - [`init`]: Tracing initialization and subscriber setup
//! - [`file_writer`]: Rotating file writer with size-based rotation

mod file_writer;
mod init;

pub use init::init_tracing;

//! Tracing initialization and subscriber setup.
//!
//! This module configures the tracing subscriber with a JSON fmt layer
//! writing to a rotating log file, setting up the pipeline from `tracing`
//! macros to disk.

use super::file_writer::FileWriter;
use crate::infrastructure::paths;
use crate::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes the tracing subscriber with file-based JSON logging.
///
/// Sets up a subscriber pipeline that:
/// 1. Filters events based on the configured log level
/// 2. Serializes events as JSON lines
/// 3. Writes to a rotating file with backups
///
/// # Log Level Resolution
///
/// 1. `config.log_level` if set
/// 2. Default: `"info"`
///
/// # File Location
///
/// Logs are written to `/host/.local/share/zellij/zriends/zriends.log`
/// inside the plugin sandbox, which maps to the directory Zellij was
/// started from on the host side.
///
/// # Initialization Behavior
///
/// - Creates the data directory if it doesn't exist
/// - Silently fails if directory creation fails (observability is optional)
/// - Idempotent: safe to call multiple times (only first call takes effect)
pub fn init_tracing(config: &Config) {
    let level = config
        .log_level
        .clone()
        .unwrap_or_else(|| "info".to_string());

    let data_dir = paths::get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        // Silently fail if we can't create the directory
        return;
    }

    let writer = FileWriter::new(paths::get_log_file());

    let fmt_layer = tracing_subscriber::fmt::layer()
        .json()
        .with_ansi(false)
        .with_writer(writer);

    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(fmt_layer);

    let _ = subscriber.try_init();
}

//! Zriends: A Zellij plugin for managing your friends list.
//!
//! Zriends is a terminal multiplexer plugin that provides:
//! - A combined roster of confirmed friends and inbound pending requests
//! - Instant local search over first names with match highlighting
//! - One-key optimistic accept of pending requests with rollback on failure
//! - Sending new friend requests by email through a modal input
//! - Session-token storage backed by a JSON file

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │  ← Business logic
//! │  - Optimistic accept flow                           │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Storage Layer │   │ API Layer     │
//! │ (ui/)         │   │ (storage/)    │   │ (api/)        │
//! │ - Rendering   │   │ - JSON I/O    │   │ - HTTP builds │
//! │ - Theming     │   │ - Token read  │   │ - Envelopes   │
//! │ - Components  │   │ - Backend API │   │ - Op routing  │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Platform paths (infrastructure/)                 │
//! │  - Error types (domain/error)                       │
//! │  - Person model and filter (domain/person)          │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - Structured JSON logging                          │
//! │  - Rotating file export                             │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state machine with event/action model
//! - [`domain`]: Core domain types (Person, errors)
//! - [`infrastructure`]: Platform-specific utilities (paths)
//! - [`storage`]: JSON session-token persistence layer
//! - [`api`]: Friend directory HTTP client and response parsing
//! - [`ui`]: Terminal rendering with theme support
//! - `observability`: Structured logging (internal)
//!
//! # Configuration
//!
//! The plugin is configured via Zellij's plugin configuration:
//!
//! ```kdl
//! // ~/.config/zellij/layouts/default.kdl
//! pane {
//!     plugin location="file:/path/to/zriends.wasm" {
//!         base_url "https://something-not-sure.onrender.com"
//!         theme "catppuccin-mocha"
//!         log_level "info"
//!     }
//! }
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Plugin Load** (`main.rs`):
//!    - Parse configuration from Zellij
//!    - Initialize logging (optional)
//!    - Create `AppState` with theme
//!    - Read the session token from storage
//!    - Subscribe to Zellij events and request `WebAccess`
//!
//! 2. **Permission Grant**:
//!    - Issue both list fetches (`/friend/all`, `/friend/requests/pending`)
//!    - Responses arrive independently as `WebRequestResult` events
//!
//! 3. **Interaction**:
//!    - Local search filters both sections on every keystroke
//!    - Enter on a pending row starts an optimistic accept
//!    - `a` opens the add-friend modal; Enter sends the request
//!
//! 4. **UI Rendering**:
//!    - Compute view model from state
//!    - Render components (header, sections, footer, overlays)
//!
//! # Key Design Decisions
//!
//! ## Optimistic Accept
//!
//! Accepting a pending request updates the roster before the server
//! responds. The moved entry and its original position are recorded so a
//! failed confirm restores the exact prior state. A single `loading` flag
//! serializes accepts; while one is in flight, further accepts are ignored
//! and the accept badges render busy.
//!
//! ## Fire-and-Forget HTTP
//!
//! All network I/O goes through the host's `web_request` facility. Requests
//! carry a context map tagging the operation; responses come back as events
//! carrying the same map, so no futures or callbacks are needed and the
//! plugin stays single-threaded.
//!
//! ## Immutable View Models
//!
//! UI rendering uses computed view models:
//! - Clear separation between state and display
//! - Enables easier testing and validation
//! - Pre-computes expensive operations (match highlighting, windowing)
//!
//! # Platform Support
//!
//! - **Target**: `wasm32-wasip1` (Zellij WASM runtime)
//! - **Terminal**: Any ANSI-capable terminal emulator

pub mod api;
pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod storage;

pub mod ui;

pub mod observability;

pub use api::{DirectoryClient, DirectoryRequest};
pub use app::{handle_event, Action, AppState, Event, InputMode, Section};
pub use domain::{ApiFailure, ApiResult, Person, Result, ZriendsError};
pub use ui::Theme;

use std::collections::BTreeMap;

/// Default friend directory backend.
pub const DEFAULT_BASE_URL: &str = "https://something-not-sure.onrender.com";

/// Plugin configuration parsed from Zellij's configuration system.
///
/// Configuration values are provided via Zellij's KDL layout configuration
/// and passed to the plugin during initialization.
///
/// # Example
///
/// ```kdl
/// plugin location="file:/path/to/zriends.wasm" {
///     base_url "https://friends.example.com"
///     theme "catppuccin-mocha"
///     theme_file "/path/to/theme.toml"
///     log_level "debug"
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the friend directory backend.
    ///
    /// Trailing slashes are tolerated. Default: [`DEFAULT_BASE_URL`]
    pub base_url: String,

    /// Built-in theme name to use.
    ///
    /// Options: `catppuccin-mocha`, `catppuccin-latte`, `catppuccin-frappe`,
    /// `catppuccin-macchiato`. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file.
    ///
    /// Takes precedence over `theme_name`. See [`ui::theme`] for format.
    pub theme_file: Option<String>,

    /// Log level directive for structured logging.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub log_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            theme_name: None,
            theme_file: None,
            log_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Zellij provides configuration as a `BTreeMap<String, String>` during
    /// plugin initialization. This function extracts values with fallback
    /// defaults.
    ///
    /// # Parsing Rules
    ///
    /// - `base_url`: String → `String` (falls back to the default backend,
    ///   empty values ignored)
    /// - `theme`: String → `Option<String>`
    /// - `theme_file`: String → `Option<String>`
    /// - `log_level`: String → `Option<String>`
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let base_url = config
            .get("base_url")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Self {
            base_url,
            theme_name: config.get("theme").cloned(),
            theme_file: config.get("theme_file").cloned(),
            log_level: config.get("log_level").cloned(),
        }
    }
}

/// Initializes the plugin with configuration.
///
/// Creates a new `AppState` with the loaded theme (from file, name, or
/// default) and empty roster lists, populated later by the directory
/// fetches.
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing zriends plugin");

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(
                Theme::default,
                |theme_name| {
                    Theme::from_name(theme_name).unwrap_or_else(|| {
                        tracing::debug!(theme_name = %theme_name, "failed to load theme, using default");
                        Theme::default()
                    })
                },
            )
        },
        |theme_file| {
            Theme::from_file(theme_file.clone()).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                Theme::default()
            })
        },
    );

    AppState::new(theme)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults_apply() {
        let config = Config::from_zellij(&BTreeMap::new());
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert!(config.theme_name.is_none());
        assert!(config.log_level.is_none());
    }

    #[test]
    fn config_reads_provided_values() {
        let mut map = BTreeMap::new();
        map.insert(
            "base_url".to_string(),
            "https://friends.example.com".to_string(),
        );
        map.insert("theme".to_string(), "catppuccin-latte".to_string());
        map.insert("log_level".to_string(), "debug".to_string());

        let config = Config::from_zellij(&map);
        assert_eq!(config.base_url, "https://friends.example.com");
        assert_eq!(config.theme_name.as_deref(), Some("catppuccin-latte"));
        assert_eq!(config.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn blank_base_url_falls_back_to_default() {
        let mut map = BTreeMap::new();
        map.insert("base_url".to_string(), "   ".to_string());
        let config = Config::from_zellij(&map);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn initialize_honors_theme_name() {
        let config = Config {
            theme_name: Some("catppuccin-frappe".to_string()),
            ..Default::default()
        };
        let state = initialize(&config);
        assert_eq!(state.theme.name, "catppuccin-frappe");
    }
}

//! Zellij plugin wrapper and entry point.
//!
//! This module provides the thin integration layer between the Zriends
//! library and the Zellij plugin system. It implements the `ZellijPlugin`
//! trait to handle Zellij events and lifecycle.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize logging, create `AppState`, read
//!    the session token from storage
//! 2. **Subscribe**: Register for `Key`, `WebRequestResult`,
//!    `PermissionRequestResult` events
//! 3. **Permission Grant**: Dispatch both directory list fetches
//! 4. **Update**: Handle events, delegate to library layer
//! 5. **Render**: Call library render function
//!
//! # HTTP Routing
//!
//! All network I/O goes through the host's `web_request` facility. Each
//! request carries a context map tagging the operation; the matching
//! `WebRequestResult` event carries the same map back, and the shim routes
//! it to the right application event:
//!
//! - `list_friends` → `Event::FriendsListed`
//! - `list_pending` → `Event::PendingListed`
//! - `confirm_request` → `Event::RequestConfirmed` (sender email from context)
//! - `send_request` → `Event::RequestSent`
//!
//! # Keybindings
//!
//! Global (all modes):
//! - `Ctrl+n` / `Down`: Move down
//! - `Ctrl+p` / `Up`: Move up
//!
//! In normal mode:
//! - `j`/`k`: Move down/up
//! - `Enter`: Accept selected pending request
//! - `/`: Enter search mode
//! - `a`: Open the add-friend modal
//! - `q`: Close plugin
//!
//! In search mode:
//! - Characters/Backspace: Edit the query (filters on every keystroke)
//! - `Esc`: Exit search and clear the query
//!
//! In the add-friend modal:
//! - Characters/Backspace: Edit the email input
//! - `Enter`: Send the friend request
//! - `Esc`: Close the modal (input is kept)

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use zriends::api::{response, ApiOperation, CONTEXT_SENDER_EMAIL};
use zriends::infrastructure::paths;
use zriends::storage::{JsonSessionStore, SessionStore};
use zriends::{handle_event, Action, Config, DirectoryClient, Event};

// Register plugin with Zellij
register_plugin!(State);

/// Plugin state wrapper.
///
/// Wraps the library's `AppState` with Zellij-specific concerns: the
/// directory client holding the base URL and session token.
struct State {
    /// Core application state from library layer.
    app: zriends::AppState,

    /// Directory client, rebuilt at load time with the stored token.
    client: DirectoryClient,
}

impl Default for State {
    fn default() -> Self {
        let default_config = Config::default();
        Self {
            app: zriends::initialize(&default_config),
            client: DirectoryClient::new(default_config.base_url, None),
        }
    }
}

impl ZellijPlugin for State {
    /// Initializes the plugin on load.
    ///
    /// Called once during plugin startup. Parses configuration, initializes
    /// application state, reads the session token, requests permissions,
    /// and subscribes to events.
    ///
    /// # Permissions
    ///
    /// Requests `WebAccess` for the directory HTTP calls. The initial
    /// fetches are deferred until the grant arrives.
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        zriends::observability::init_tracing(&config);

        tracing::debug!("plugin loading started");
        tracing::debug!(base_url = %config.base_url, "parsed configuration");
        self.app = zriends::initialize(&config);
        tracing::debug!("app state initialized");

        let access_token = match JsonSessionStore::new(paths::get_session_file()) {
            Ok(store) => store.access_token().unwrap_or_default(),
            Err(e) => {
                tracing::warn!(error = %e, "failed to open session store, requests will be unauthenticated");
                None
            }
        };
        self.client = DirectoryClient::new(config.base_url, access_token);

        tracing::debug!("requesting permissions");
        request_permission(&[PermissionType::WebAccess]);

        tracing::debug!("subscribing to events");
        subscribe(&[
            EventType::Key,
            EventType::WebRequestResult,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    /// Handles incoming Zellij events.
    ///
    /// Translates Zellij events to library events, delegates to
    /// `handle_event`, and executes resulting actions. Returns `true` if
    /// the UI should re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        tracing::debug!(event = %event_name, "processing event");

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match Self::map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, context) => {
                match Self::map_web_response(status, &body, &context) {
                    Some(event) => event,
                    None => return false,
                }
            }
            zellij_tile::prelude::Event::PermissionRequestResult(permissions) => {
                self.handle_permission_result(permissions);
                return false;
            }
            _ => return false,
        };

        match handle_event(&mut self.app, our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled successfully"
                );
                for a in actions {
                    self.execute_action(&a);
                }
                should_render
            }
            Err(e) => {
                tracing::debug!(error = %e, "error handling event");
                false
            }
        }
    }

    /// Renders the plugin UI.
    ///
    /// Delegates to the library's rendering layer.
    fn render(&mut self, rows: usize, cols: usize) {
        zriends::ui::render(&self.app, rows, cols);
    }
}

impl State {
    /// Gets a string name for a Zellij event for logging purposes.
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::WebRequestResult(status, ..) => {
                format!("WebRequestResult({status})")
            }
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    /// Maps keyboard events to application events.
    ///
    /// The mapping is mode-independent; the handler routes characters to
    /// navigation, the search query, or the email input based on the active
    /// input mode.
    fn map_key_event(key: &KeyWithModifier) -> Option<Event> {
        tracing::debug!(bare_key = ?key.bare_key, "key event");

        if key.bare_key == BareKey::Char('n') && key.has_modifiers(&[KeyModifier::Ctrl]) {
            return Some(Event::MoveDown);
        }
        if key.bare_key == BareKey::Char('p') && key.has_modifiers(&[KeyModifier::Ctrl]) {
            return Some(Event::MoveUp);
        }

        Some(match key.bare_key {
            BareKey::Down => Event::MoveDown,
            BareKey::Up => Event::MoveUp,
            BareKey::Esc => Event::Escape,
            BareKey::Enter => Event::Enter,
            BareKey::Backspace => Event::Backspace,
            BareKey::Char(c) => Event::Char(c),
            _ => return None,
        })
    }

    /// Handles permission request results.
    ///
    /// The directory fetches need `WebAccess`, so they are issued here
    /// rather than at load time.
    fn handle_permission_result(&self, permissions: PermissionStatus) {
        match permissions {
            PermissionStatus::Granted => {
                tracing::debug!("permissions granted - fetching directory");
                self.execute_action(&Action::FetchDirectory);
            }
            PermissionStatus::Denied => {
                tracing::warn!("permissions denied - plugin functionality limited");
            }
        }
    }

    /// Routes a `WebRequestResult` to the matching application event.
    ///
    /// Responses whose context this plugin did not produce are ignored.
    fn map_web_response(
        status: u16,
        body: &[u8],
        context: &BTreeMap<String, String>,
    ) -> Option<Event> {
        let op = ApiOperation::from_context(context)?;
        tracing::debug!(op = op.tag(), http_status = status, "web request result");

        Some(match op {
            ApiOperation::ListFriends => Event::FriendsListed(response::parse_friends(status, body)),
            ApiOperation::ListPending => Event::PendingListed(response::parse_pending(status, body)),
            ApiOperation::ConfirmRequest => {
                let sender_email = context
                    .get(CONTEXT_SENDER_EMAIL)
                    .cloned()
                    .unwrap_or_default();
                Event::RequestConfirmed {
                    sender_email,
                    outcome: response::parse_ack(status, body),
                }
            }
            ApiOperation::SendRequest => Event::RequestSent(response::parse_ack(status, body)),
        })
    }

    /// Executes an action returned from event handling.
    ///
    /// Translates library actions to Zellij API calls.
    ///
    /// # Actions
    ///
    /// - `CloseFocus`: Close plugin pane
    /// - `FetchDirectory`: Issue both list fetches back to back
    /// - `ConfirmRequest`: Issue the confirm call for an accepted request
    /// - `SendRequest`: Issue the add-friend call
    fn execute_action(&self, action: &Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
            Action::FetchDirectory => {
                tracing::debug!("dispatching directory fetches");
                self.client.list_friends().dispatch();
                self.client.list_pending().dispatch();
            }
            Action::ConfirmRequest { ref sender_email } => {
                self.client.confirm_request(sender_email).dispatch();
            }
            Action::SendRequest { ref receiver_email } => {
                self.client.send_request(receiver_email).dispatch();
            }
        }
    }
}

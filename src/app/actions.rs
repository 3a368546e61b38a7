//! Actions representing side effects to be executed by the plugin runtime.
//!
//! This module defines the [`Action`] type, which represents imperative
//! commands produced by the event handler after processing user input or
//! directory responses. Actions bridge pure state transformations and
//! effectful operations like issuing HTTP requests through the host.
//!
//! # Architecture
//!
//! The event handler returns a `Vec<Action>` after processing each event,
//! allowing multiple side effects to be queued atomically. The plugin shim
//! executes these actions in sequence.

/// Commands representing side effects to be executed by the plugin runtime.
///
/// Actions are produced by the event handler and executed by the plugin shim,
/// which translates them into `web_request` calls via the directory client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Closes the focused floating pane, hiding the plugin UI.
    ///
    /// Sent when the user explicitly requests to exit (pressing 'q').
    CloseFocus,

    /// Fetches the full friends and pending-requests lists.
    ///
    /// Issues both GET operations back to back; their responses arrive
    /// independently and in either order. Emitted once per plugin load.
    FetchDirectory,

    /// Confirms an inbound friend request.
    ///
    /// Emitted by the accept flow after the optimistic state has been
    /// applied. The response resolves the in-flight accept either way.
    ConfirmRequest {
        /// Sender email identifying the pending request being accepted.
        sender_email: String,
    },

    /// Sends a new friend request by email.
    SendRequest {
        /// Email address of the person to befriend.
        receiver_email: String,
    },
}

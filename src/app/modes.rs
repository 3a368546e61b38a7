//! Input mode and roster section state types.
//!
//! This module defines the state machine enums that control user interaction
//! and row addressing. The input mode determines which keybindings are active
//! and where typed characters go; the section identifies which roster list a
//! row belongs to.
//!
//! # State Machine
//!
//! The screen operates in one of three input modes:
//! - **Normal**: navigation and commands
//! - **Search**: typed characters edit the search query
//! - **`AddFriend`**: the add-friend modal is open; typed characters edit the
//!   email input
//!
//! Modal transitions: Normal/Search → `AddFriend` on `a`; `AddFriend` →
//! Normal on Esc or a successful send. No other transitions open or close
//! the modal.

/// Current input handling mode.
///
/// Controls which keybindings are active and how typed characters are
/// routed. Determines the displayed footer text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Default navigation and command mode.
    ///
    /// Available keybindings: j/k (navigate), / (search), a (add friend),
    /// Enter (accept selected pending request), q (quit).
    Normal,

    /// Active search mode.
    ///
    /// Typed characters and backspace edit the search query; the filtered
    /// roster updates on every keystroke. Esc exits and clears the query.
    Search,

    /// The add-friend modal is open.
    ///
    /// Typed characters and backspace edit the email input. Enter submits;
    /// Esc closes the modal without clearing the input.
    AddFriend,
}

/// Which roster list a row belongs to.
///
/// Pending requests render above friends, matching the screen's section
/// order, and only pending rows carry an accept affordance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    /// Inbound friend requests awaiting acceptance.
    PendingRequests,

    /// Confirmed mutual friends.
    Friends,
}

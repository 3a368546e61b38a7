//! Event handling and state transition logic.
//!
//! This module contains the central event handler that processes user input
//! and directory responses, producing state mutations and side-effect
//! actions. It implements the interaction model: mode-dependent key routing,
//! the optimistic accept flow, the add-friend modal, and absorption of
//! remote failures.
//!
//! # Event Flow
//!
//! ```text
//! Key press / WebRequestResult (main.rs)
//!     │
//!     ▼
//! Event ──► handle_event() ──► (should_render, Vec<Action>)
//!     │                              │
//!     ▼                              ▼
//! AppState mutation            side effects (HTTP dispatch, close pane)
//! ```

use tracing::{debug, info, warn};

use crate::app::actions::Action;
use crate::app::modes::{InputMode, Section};
use crate::app::state::{AppState, Notice};
use crate::domain::{ApiResult, Person, Result};

/// Events processed by the handler.
///
/// Key events arrive pre-mapped from the plugin shim; directory events carry
/// the parsed outcome of one remote call.
#[derive(Debug, Clone)]
pub enum Event {
    /// Move the selection down one row (arrow down, Ctrl+n, or `j`).
    MoveDown,

    /// Move the selection up one row (arrow up, Ctrl+p, or `k`).
    MoveUp,

    /// Enter pressed. Accepts the selected pending request, or submits the
    /// add-friend modal when it is open.
    Enter,

    /// Escape pressed. Exits search, closes the modal, or clears the notice
    /// depending on the active mode.
    Escape,

    /// Backspace pressed in a text-input mode.
    Backspace,

    /// A printable character was typed.
    Char(char),

    /// The friends list response arrived.
    FriendsListed(ApiResult<Vec<Person>>),

    /// The pending requests response arrived.
    PendingListed(ApiResult<Vec<Person>>),

    /// The confirm response for an accepted request arrived.
    RequestConfirmed {
        /// Sender email the confirm was issued for.
        sender_email: String,
        /// Parsed outcome of the call.
        outcome: ApiResult<()>,
    },

    /// The send-friend-request response arrived.
    RequestSent(ApiResult<()>),
}

/// Processes an event against the application state.
///
/// Returns whether the UI should re-render and the side-effect actions to
/// execute. Remote failures never propagate as errors; they are logged and
/// absorbed into state (rollback, notice) here.
pub fn handle_event(state: &mut AppState, event: Event) -> Result<(bool, Vec<Action>)> {
    let mut actions = Vec::new();

    let should_render = match event {
        Event::MoveDown => {
            state.move_selection_down();
            true
        }
        Event::MoveUp => {
            state.move_selection_up();
            true
        }
        Event::Char(c) => handle_char(state, c, &mut actions),
        Event::Backspace => handle_backspace(state),
        Event::Enter => handle_enter(state, &mut actions),
        Event::Escape => handle_escape(state),
        Event::FriendsListed(outcome) => match outcome {
            Ok(friends) => {
                info!(count = friends.len(), "friends list loaded");
                state.friends = friends;
                state.apply_search_filter();
                true
            }
            Err(failure) => {
                warn!(%failure, "failed to load friends list");
                false
            }
        },
        Event::PendingListed(outcome) => match outcome {
            Ok(requests) => {
                info!(count = requests.len(), "pending requests loaded");
                state.pending_requests = requests;
                state.apply_search_filter();
                true
            }
            Err(failure) => {
                warn!(%failure, "failed to load pending requests");
                false
            }
        },
        Event::RequestConfirmed {
            sender_email,
            outcome,
        } => match outcome {
            Ok(()) => {
                info!(sender_email, "friend request confirmed");
                state.commit_accept();
                true
            }
            Err(failure) => {
                warn!(sender_email, %failure, "confirm failed, rolling back");
                state.rollback_accept();
                state.notice = Some(Notice::failure("Could not accept friend request"));
                true
            }
        },
        Event::RequestSent(outcome) => match outcome {
            Ok(()) => {
                info!("friend request sent");
                state.email_input.clear();
                state.input_mode = InputMode::Normal;
                state.notice = Some(Notice::success("Friend request sent!"));
                true
            }
            Err(failure) => {
                warn!(%failure, "failed to send friend request");
                state.notice = Some(Notice::failure("Could not send friend request"));
                true
            }
        },
    };

    Ok((should_render, actions))
}

fn handle_char(state: &mut AppState, c: char, actions: &mut Vec<Action>) -> bool {
    match state.input_mode {
        InputMode::Normal => match c {
            'j' => {
                state.move_selection_down();
                true
            }
            'k' => {
                state.move_selection_up();
                true
            }
            '/' => {
                state.input_mode = InputMode::Search;
                true
            }
            'a' => {
                state.input_mode = InputMode::AddFriend;
                true
            }
            'q' => {
                actions.push(Action::CloseFocus);
                false
            }
            _ => false,
        },
        InputMode::Search => {
            state.search_query.push(c);
            state.apply_search_filter();
            true
        }
        InputMode::AddFriend => {
            state.email_input.push(c);
            true
        }
    }
}

fn handle_backspace(state: &mut AppState) -> bool {
    match state.input_mode {
        InputMode::Normal => false,
        InputMode::Search => {
            if state.search_query.pop().is_some() {
                state.apply_search_filter();
                true
            } else {
                false
            }
        }
        InputMode::AddFriend => state.email_input.pop().is_some(),
    }
}

fn handle_enter(state: &mut AppState, actions: &mut Vec<Action>) -> bool {
    if state.input_mode == InputMode::AddFriend {
        return submit_add_friend(state, actions);
    }
    accept_selected(state, actions)
}

fn handle_escape(state: &mut AppState) -> bool {
    match state.input_mode {
        InputMode::Search => {
            state.input_mode = InputMode::Normal;
            state.search_query.clear();
            state.apply_search_filter();
            true
        }
        InputMode::AddFriend => {
            // The email input persists for the next open.
            state.input_mode = InputMode::Normal;
            true
        }
        InputMode::Normal => {
            if !state.search_query.is_empty() {
                state.search_query.clear();
                state.apply_search_filter();
                true
            } else if state.notice.is_some() {
                state.notice = None;
                true
            } else {
                false
            }
        }
    }
}

/// Starts the optimistic accept for the selected pending row.
///
/// Friend rows and pending rows without a sender email are no-ops; the
/// latter is logged since it indicates an inconsistent server payload.
fn accept_selected(state: &mut AppState, actions: &mut Vec<Action>) -> bool {
    let Some((Section::PendingRequests, person)) = state.selected_entry() else {
        return false;
    };

    let Some(sender_email) = person.sender_email.clone() else {
        warn!(
            username = %person.username,
            "pending request has no sender email, cannot accept"
        );
        return false;
    };

    if state.begin_accept(&sender_email) {
        actions.push(Action::ConfirmRequest { sender_email });
        true
    } else {
        false
    }
}

fn submit_add_friend(state: &mut AppState, actions: &mut Vec<Action>) -> bool {
    let receiver_email = state.email_input.trim().to_string();
    if receiver_email.is_empty() {
        debug!("add-friend submit ignored, empty email");
        return false;
    }

    actions.push(Action::SendRequest { receiver_email });
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ApiFailure;
    use crate::ui::theme::Theme;

    fn pending(first: &str, email: &str) -> Person {
        let mut p = Person::new(first, "Pending", first.to_lowercase());
        p.sender_email = Some(email.to_string());
        p
    }

    fn loaded_state() -> AppState {
        let mut state = AppState::new(Theme::default());
        state.friends = vec![
            Person::new("Alice", "Anders", "alice"),
            Person::new("Bob", "Baker", "bob"),
        ];
        state.pending_requests = vec![pending("Carol", "carol@example.com")];
        state.apply_search_filter();
        state
    }

    fn transport() -> ApiFailure {
        ApiFailure::Transport { status: 500 }
    }

    #[test]
    fn quit_emits_close_focus() {
        let mut state = loaded_state();
        let (_, actions) = handle_event(&mut state, Event::Char('q')).unwrap();
        assert_eq!(actions, vec![Action::CloseFocus]);
    }

    #[test]
    fn search_typing_filters_roster() {
        let mut state = loaded_state();
        handle_event(&mut state, Event::Char('/')).unwrap();
        assert_eq!(state.input_mode, InputMode::Search);

        for c in "bob".chars() {
            handle_event(&mut state, Event::Char(c)).unwrap();
        }
        assert_eq!(state.filtered_friends.len(), 1);
        assert_eq!(state.filtered_friends[0].first_name, "Bob");
        assert!(state.filtered_pending.is_empty());

        handle_event(&mut state, Event::Escape).unwrap();
        assert_eq!(state.input_mode, InputMode::Normal);
        assert!(state.search_query.is_empty());
        assert_eq!(state.filtered_friends.len(), 2);
    }

    #[test]
    fn enter_on_pending_row_starts_accept() {
        let mut state = loaded_state();
        // Selection starts on the pending row.
        let (rendered, actions) = handle_event(&mut state, Event::Enter).unwrap();

        assert!(rendered);
        assert_eq!(
            actions,
            vec![Action::ConfirmRequest {
                sender_email: "carol@example.com".to_string()
            }]
        );
        assert!(state.loading);
        assert_eq!(state.friends.len(), 3);
        assert!(state.pending_requests.is_empty());
    }

    #[test]
    fn enter_on_friend_row_is_noop() {
        let mut state = loaded_state();
        handle_event(&mut state, Event::MoveDown).unwrap();

        let (rendered, actions) = handle_event(&mut state, Event::Enter).unwrap();
        assert!(!rendered);
        assert!(actions.is_empty());
        assert!(!state.loading);
    }

    #[test]
    fn pending_row_without_sender_email_is_noop() {
        let mut state = loaded_state();
        state.pending_requests[0].sender_email = None;
        state.apply_search_filter();

        let (rendered, actions) = handle_event(&mut state, Event::Enter).unwrap();
        assert!(!rendered);
        assert!(actions.is_empty());
        assert!(!state.loading);
        assert_eq!(state.pending_requests.len(), 1);
    }

    #[test]
    fn confirm_success_commits() {
        let mut state = loaded_state();
        handle_event(&mut state, Event::Enter).unwrap();

        handle_event(
            &mut state,
            Event::RequestConfirmed {
                sender_email: "carol@example.com".to_string(),
                outcome: Ok(()),
            },
        )
        .unwrap();

        assert!(!state.loading);
        assert!(state.in_flight.is_none());
        assert_eq!(state.friends.len(), 3);
        assert!(state.pending_requests.is_empty());
    }

    #[test]
    fn confirm_failure_rolls_back() {
        let mut state = loaded_state();
        let friends_before = state.friends.clone();
        let pending_before = state.pending_requests.clone();

        handle_event(&mut state, Event::Enter).unwrap();
        handle_event(
            &mut state,
            Event::RequestConfirmed {
                sender_email: "carol@example.com".to_string(),
                outcome: Err(transport()),
            },
        )
        .unwrap();

        assert!(!state.loading);
        assert_eq!(state.friends, friends_before);
        assert_eq!(state.pending_requests, pending_before);
        assert!(state.notice.as_ref().is_some_and(|n| n.is_failure));
    }

    #[test]
    fn submit_empty_email_is_noop() {
        let mut state = loaded_state();
        handle_event(&mut state, Event::Char('a')).unwrap();
        assert_eq!(state.input_mode, InputMode::AddFriend);

        let (_, actions) = handle_event(&mut state, Event::Enter).unwrap();
        assert!(actions.is_empty());

        state.email_input = "   ".to_string();
        let (_, actions) = handle_event(&mut state, Event::Enter).unwrap();
        assert!(actions.is_empty());
    }

    #[test]
    fn submit_email_emits_send_request() {
        let mut state = loaded_state();
        handle_event(&mut state, Event::Char('a')).unwrap();
        for c in "dan@example.com".chars() {
            handle_event(&mut state, Event::Char(c)).unwrap();
        }

        let (_, actions) = handle_event(&mut state, Event::Enter).unwrap();
        assert_eq!(
            actions,
            vec![Action::SendRequest {
                receiver_email: "dan@example.com".to_string()
            }]
        );
        // The modal stays open until the outcome arrives.
        assert_eq!(state.input_mode, InputMode::AddFriend);
    }

    #[test]
    fn send_success_clears_input_and_closes_modal() {
        let mut state = loaded_state();
        state.input_mode = InputMode::AddFriend;
        state.email_input = "dan@example.com".to_string();

        handle_event(&mut state, Event::RequestSent(Ok(()))).unwrap();

        assert_eq!(state.input_mode, InputMode::Normal);
        assert!(state.email_input.is_empty());
        assert!(state.notice.as_ref().is_some_and(|n| !n.is_failure));
    }

    #[test]
    fn send_failure_keeps_modal_and_input() {
        let mut state = loaded_state();
        state.input_mode = InputMode::AddFriend;
        state.email_input = "dan@example.com".to_string();

        handle_event(&mut state, Event::RequestSent(Err(transport()))).unwrap();

        assert_eq!(state.input_mode, InputMode::AddFriend);
        assert_eq!(state.email_input, "dan@example.com");
        assert!(state.notice.as_ref().is_some_and(|n| n.is_failure));
    }

    #[test]
    fn fetch_failure_is_absorbed() {
        let mut state = loaded_state();
        let (rendered, actions) =
            handle_event(&mut state, Event::FriendsListed(Err(transport()))).unwrap();
        assert!(!rendered);
        assert!(actions.is_empty());
        assert_eq!(state.friends.len(), 2);
    }

    #[test]
    fn list_responses_replace_masters_and_refilter() {
        let mut state = loaded_state();
        state.search_query = "zed".to_string();
        state.apply_search_filter();

        handle_event(
            &mut state,
            Event::FriendsListed(Ok(vec![Person::new("Zed", "Zee", "zed")])),
        )
        .unwrap();

        assert_eq!(state.friends.len(), 1);
        assert_eq!(state.filtered_friends.len(), 1);
    }
}

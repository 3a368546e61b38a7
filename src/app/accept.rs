//! Optimistic accept flow for inbound friend requests.
//!
//! Accepting a request moves the person from the pending list into the
//! friends list immediately, before the server responds. The move is
//! recorded in an [`InFlightAccept`] so the outcome handler can either
//! commit it (drop the record) or roll it back (restore the person to the
//! pending list at its original position).
//!
//! The `loading` flag on [`AppState`] serializes accepts: while one is in
//! flight, further accept attempts are ignored and the UI renders every
//! accept affordance as busy.

use tracing::{debug, warn};

use crate::app::state::AppState;
use crate::domain::Person;

/// Record of an optimistic accept awaiting its server outcome.
#[derive(Debug, Clone)]
pub struct InFlightAccept {
    /// The person moved from pending to friends.
    pub person: Person,

    /// The person's index in the pending list before the move, used to
    /// restore the original ordering on rollback.
    pub pending_index: usize,
}

impl AppState {
    /// Starts an optimistic accept for the pending request identified by
    /// `sender_email`.
    ///
    /// Moves the matching entry from the pending list to the end of the
    /// friends list, records the move, and sets `loading`. Returns `true`
    /// when the caller should dispatch the confirm request.
    ///
    /// Returns `false` without touching state when another accept is
    /// already in flight or when no pending entry carries `sender_email`.
    pub fn begin_accept(&mut self, sender_email: &str) -> bool {
        if self.loading {
            debug!(sender_email, "accept ignored, another accept in flight");
            return false;
        }

        let Some(pending_index) = self
            .pending_requests
            .iter()
            .position(|p| p.sender_email.as_deref() == Some(sender_email))
        else {
            warn!(sender_email, "accept aborted, no matching pending request");
            return false;
        };

        let person = self.pending_requests.remove(pending_index);
        self.friends.push(person.clone());
        self.in_flight = Some(InFlightAccept {
            person,
            pending_index,
        });
        self.loading = true;
        self.apply_search_filter();
        true
    }

    /// Commits the in-flight accept: the optimistic move becomes final.
    pub fn commit_accept(&mut self) {
        self.in_flight = None;
        self.loading = false;
    }

    /// Rolls back the in-flight accept, restoring the pending entry at its
    /// original index and removing the optimistic friend entry.
    pub fn rollback_accept(&mut self) {
        if let Some(flight) = self.in_flight.take() {
            // The optimistic entry was appended, so search from the back.
            if let Some(pos) = self.friends.iter().rposition(|p| *p == flight.person) {
                self.friends.remove(pos);
            }
            let insert_at = flight.pending_index.min(self.pending_requests.len());
            self.pending_requests.insert(insert_at, flight.person);
            self.apply_search_filter();
        }
        self.loading = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::Theme;

    fn pending(first: &str, email: &str) -> Person {
        let mut p = Person::new(first, "Pending", first.to_lowercase());
        p.sender_email = Some(email.to_string());
        p
    }

    fn state_with_pending() -> AppState {
        let mut state = AppState::new(Theme::default());
        state.friends = vec![Person::new("Frida", "Friend", "frida")];
        state.pending_requests = vec![
            pending("Ada", "ada@example.com"),
            pending("Grace", "grace@example.com"),
            pending("Katherine", "kat@example.com"),
        ];
        state.apply_search_filter();
        state
    }

    #[test]
    fn accept_moves_pending_entry_to_friends() {
        let mut state = state_with_pending();

        assert!(state.begin_accept("grace@example.com"));
        assert!(state.loading);
        assert_eq!(state.pending_requests.len(), 2);
        assert_eq!(state.friends.len(), 2);
        assert_eq!(state.friends[1].first_name, "Grace");
        // Filtered views follow the masters immediately.
        assert_eq!(state.filtered_pending.len(), 2);
        assert_eq!(state.filtered_friends.len(), 2);
    }

    #[test]
    fn commit_finalizes_the_move() {
        let mut state = state_with_pending();
        state.begin_accept("grace@example.com");

        state.commit_accept();

        assert!(!state.loading);
        assert!(state.in_flight.is_none());
        assert_eq!(state.friends[1].first_name, "Grace");
        assert!(state
            .pending_requests
            .iter()
            .all(|p| p.first_name != "Grace"));
    }

    #[test]
    fn rollback_restores_initial_state() {
        let mut state = state_with_pending();
        let friends_before = state.friends.clone();
        let pending_before = state.pending_requests.clone();

        state.begin_accept("grace@example.com");
        state.rollback_accept();

        assert!(!state.loading);
        assert!(state.in_flight.is_none());
        assert_eq!(state.friends, friends_before);
        assert_eq!(state.pending_requests, pending_before);
        assert_eq!(state.filtered_pending, pending_before);
    }

    #[test]
    fn rollback_restores_original_position() {
        let mut state = state_with_pending();

        state.begin_accept("ada@example.com");
        state.rollback_accept();

        assert_eq!(state.pending_requests[0].first_name, "Ada");
        assert_eq!(state.pending_requests[1].first_name, "Grace");
    }

    #[test]
    fn second_accept_is_ignored_while_loading() {
        let mut state = state_with_pending();
        state.begin_accept("ada@example.com");
        let friends_after_first = state.friends.clone();
        let pending_after_first = state.pending_requests.clone();

        assert!(!state.begin_accept("grace@example.com"));
        assert_eq!(state.friends, friends_after_first);
        assert_eq!(state.pending_requests, pending_after_first);
    }

    #[test]
    fn unknown_email_leaves_state_untouched() {
        let mut state = state_with_pending();
        let friends_before = state.friends.clone();
        let pending_before = state.pending_requests.clone();

        assert!(!state.begin_accept("nobody@example.com"));
        assert!(!state.loading);
        assert!(state.in_flight.is_none());
        assert_eq!(state.friends, friends_before);
        assert_eq!(state.pending_requests, pending_before);
    }
}

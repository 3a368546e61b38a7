//! Core application state and view model computation.
//!
//! This module defines [`AppState`], the central state container for the
//! roster screen. It owns the two master lists (friends and pending
//! requests), the filtered views derived from the search query, selection,
//! input mode, and the in-flight accept bookkeeping.
//!
//! State mutation happens in the event handler and in the accept flow;
//! this module provides the primitives they build on (filtering, selection
//! movement, notice management) plus [`AppState::compute_viewmodel`], which
//! projects the state into display-ready form.

use crate::app::accept::InFlightAccept;
use crate::app::modes::{InputMode, Section};
use crate::domain::{filter_people, Person};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    AcceptBadge, EmptyState, FooterInfo, HeaderInfo, ModalInfo, NoticeInfo, RosterRow, SearchBarInfo,
    SectionView, UIViewModel,
};

/// Transient outcome message shown in the notice line.
///
/// Set by the send and accept flows; replaced by the next outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Text to display.
    pub message: String,
    /// Failure notices render in the failure color.
    pub is_failure: bool,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            is_failure: false,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            is_failure: true,
        }
    }
}

/// Central application state.
///
/// Holds the master roster lists, the filtered views derived from them, and
/// all interaction state. The filtered lists are recomputed from the masters
/// whenever either the masters or the search query change; they are never
/// edited directly.
#[derive(Debug)]
pub struct AppState {
    /// Confirmed friends, in server order.
    pub friends: Vec<Person>,

    /// Inbound pending requests, in server order.
    pub pending_requests: Vec<Person>,

    /// Friends matching the current search query.
    pub filtered_friends: Vec<Person>,

    /// Pending requests matching the current search query.
    pub filtered_pending: Vec<Person>,

    /// Current search query text.
    pub search_query: String,

    /// Email input of the add-friend modal. Persists across modal close.
    pub email_input: String,

    /// Active input mode.
    pub input_mode: InputMode,

    /// True while an accept request is in flight. Serializes accepts and
    /// disables all accept affordances.
    pub loading: bool,

    /// Selected row index into the combined filtered list (pending rows
    /// first, then friend rows).
    pub selected_index: usize,

    /// Bookkeeping for the optimistic accept awaiting its outcome.
    pub in_flight: Option<InFlightAccept>,

    /// Transient outcome message, if any.
    pub notice: Option<Notice>,

    /// Active color theme.
    pub theme: Theme,
}

impl AppState {
    pub fn new(theme: Theme) -> Self {
        Self {
            friends: Vec::new(),
            pending_requests: Vec::new(),
            filtered_friends: Vec::new(),
            filtered_pending: Vec::new(),
            search_query: String::new(),
            email_input: String::new(),
            input_mode: InputMode::Normal,
            loading: false,
            selected_index: 0,
            in_flight: None,
            notice: None,
            theme,
        }
    }

    /// Recomputes both filtered lists from the master lists and the current
    /// search query, then clamps the selection into the new combined range.
    ///
    /// Must be called after every mutation of the master lists or the query.
    pub fn apply_search_filter(&mut self) {
        self.filtered_friends = filter_people(&self.friends, &self.search_query);
        self.filtered_pending = filter_people(&self.pending_requests, &self.search_query);
        self.clamp_selection();
    }

    /// Total number of selectable rows (filtered pending + filtered friends).
    pub fn total_rows(&self) -> usize {
        self.filtered_pending.len() + self.filtered_friends.len()
    }

    fn clamp_selection(&mut self) {
        let total = self.total_rows();
        if total == 0 {
            self.selected_index = 0;
        } else if self.selected_index >= total {
            self.selected_index = total - 1;
        }
    }

    /// Moves the selection down one row, wrapping to the top.
    pub fn move_selection_down(&mut self) {
        let total = self.total_rows();
        if total > 0 {
            self.selected_index = (self.selected_index + 1) % total;
        }
    }

    /// Moves the selection up one row, wrapping to the bottom.
    pub fn move_selection_up(&mut self) {
        let total = self.total_rows();
        if total > 0 {
            self.selected_index = self.selected_index.checked_sub(1).unwrap_or(total - 1);
        }
    }

    /// Returns the currently selected entry and the section it belongs to.
    ///
    /// Pending rows occupy indices `0..filtered_pending.len()`, friend rows
    /// follow. Returns `None` when the combined filtered list is empty.
    pub fn selected_entry(&self) -> Option<(Section, &Person)> {
        let pending_len = self.filtered_pending.len();
        if self.selected_index < pending_len {
            self.filtered_pending
                .get(self.selected_index)
                .map(|p| (Section::PendingRequests, p))
        } else {
            self.filtered_friends
                .get(self.selected_index - pending_len)
                .map(|p| (Section::Friends, p))
        }
    }

    /// Projects the current state into a display-ready view model.
    ///
    /// `rows` is the pane height in terminal rows; it bounds how many roster
    /// rows are emitted. The window scrolls to keep the selection visible.
    pub fn compute_viewmodel(&self, rows: usize, _cols: usize) -> UIViewModel {
        let header = HeaderInfo {
            title: format!(
                " Friends ({} friends, {} pending) ",
                self.friends.len(),
                self.pending_requests.len()
            ),
        };

        let footer = FooterInfo {
            keybindings: match self.input_mode {
                InputMode::Normal => {
                    "j/k: navigate | /: search | a: add friend | Enter: accept | q: quit"
                        .to_string()
                }
                InputMode::Search => "type to filter | Esc: exit search | Enter: accept".to_string(),
                InputMode::AddFriend => "type email | Enter: send request | Esc: cancel".to_string(),
            },
        };

        let search_bar = if self.input_mode == InputMode::Search || !self.search_query.is_empty() {
            Some(SearchBarInfo {
                query: self.search_query.clone(),
            })
        } else {
            None
        };

        let modal = if self.input_mode == InputMode::AddFriend {
            Some(ModalInfo {
                title: "Enter Friend's Email".to_string(),
                input: self.email_input.clone(),
            })
        } else {
            None
        };

        let notice = self.notice.as_ref().map(|n| NoticeInfo {
            message: n.message.clone(),
            is_failure: n.is_failure,
        });

        let empty_state = if self.friends.is_empty() && self.pending_requests.is_empty() {
            Some(EmptyState {
                message: "No friends yet".to_string(),
                subtitle: "Press 'a' to send a friend request".to_string(),
            })
        } else {
            None
        };

        let sections = self.build_sections(rows, search_bar.is_some());

        UIViewModel {
            sections,
            header,
            footer,
            search_bar,
            modal,
            notice,
            empty_state,
        }
    }

    /// Builds the two section views, windowed over the combined row list so
    /// that the selected row stays visible.
    fn build_sections(&self, rows: usize, search_visible: bool) -> Vec<SectionView> {
        // Chrome: blank + header + separator, two section title lines, one
        // blank between sections, notice line, footer + separator.
        let mut chrome = 9;
        if search_visible {
            chrome += 3;
        }
        let capacity = rows.saturating_sub(chrome).max(1);

        let total = self.total_rows();
        let window_start = if total <= capacity {
            0
        } else {
            // Keep the selection inside the window, bottom-anchored.
            let max_start = total - capacity;
            self.selected_index
                .saturating_sub(capacity.saturating_sub(1))
                .min(max_start)
        };
        let window_end = (window_start + capacity).min(total);

        let pending_len = self.filtered_pending.len();
        let badge = if self.loading {
            AcceptBadge::Busy
        } else {
            AcceptBadge::Ready
        };

        let mut pending_rows = Vec::new();
        let mut friend_rows = Vec::new();
        for combined_idx in window_start..window_end {
            if combined_idx < pending_len {
                let person = &self.filtered_pending[combined_idx];
                pending_rows.push(self.build_row(person, combined_idx, Some(badge)));
            } else {
                let person = &self.filtered_friends[combined_idx - pending_len];
                friend_rows.push(self.build_row(person, combined_idx, None));
            }
        }

        let pending_empty = if self.pending_requests.is_empty() {
            "No pending requests".to_string()
        } else {
            "No pending requests match your search".to_string()
        };
        let friends_empty = if self.friends.is_empty() {
            "No friends yet".to_string()
        } else {
            "No friends match your search".to_string()
        };

        vec![
            SectionView {
                title: "PENDING REQUESTS".to_string(),
                rows: pending_rows,
                empty_text: pending_empty,
            },
            SectionView {
                title: "YOUR FRIENDS".to_string(),
                rows: friend_rows,
                empty_text: friends_empty,
            },
        ]
    }

    fn build_row(
        &self,
        person: &Person,
        combined_idx: usize,
        accept: Option<AcceptBadge>,
    ) -> RosterRow {
        RosterRow {
            name: person.full_name(),
            username: person.username.clone(),
            is_selected: combined_idx == self.selected_index,
            accept,
            highlight_range: if self.search_query.is_empty() {
                None
            } else {
                person.match_span(&self.search_query)
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person(first: &str, last: &str) -> Person {
        Person::new(first, last, &format!("{}_{}", first, last).to_lowercase())
    }

    fn populated_state() -> AppState {
        let mut state = AppState::new(Theme::default());
        state.friends = vec![person("Alice", "Anders"), person("Bob", "Baker")];
        state.pending_requests = vec![person("Carol", "Chase")];
        state.apply_search_filter();
        state
    }

    #[test]
    fn selection_wraps_over_combined_rows() {
        let mut state = populated_state();
        assert_eq!(state.total_rows(), 3);

        state.move_selection_down();
        state.move_selection_down();
        assert_eq!(state.selected_index, 2);
        state.move_selection_down();
        assert_eq!(state.selected_index, 0);

        state.move_selection_up();
        assert_eq!(state.selected_index, 2);
    }

    #[test]
    fn selected_entry_spans_sections() {
        let mut state = populated_state();

        let (section, p) = state.selected_entry().unwrap();
        assert_eq!(section, Section::PendingRequests);
        assert_eq!(p.first_name, "Carol");

        state.move_selection_down();
        let (section, p) = state.selected_entry().unwrap();
        assert_eq!(section, Section::Friends);
        assert_eq!(p.first_name, "Alice");
    }

    #[test]
    fn filter_clamps_selection() {
        let mut state = populated_state();
        state.selected_index = 2;

        state.search_query = "carol".to_string();
        state.apply_search_filter();

        assert_eq!(state.total_rows(), 1);
        assert_eq!(state.selected_index, 0);
        let (section, p) = state.selected_entry().unwrap();
        assert_eq!(section, Section::PendingRequests);
        assert_eq!(p.first_name, "Carol");
    }

    #[test]
    fn empty_query_filter_is_identity() {
        let state = populated_state();
        assert_eq!(state.filtered_friends, state.friends);
        assert_eq!(state.filtered_pending, state.pending_requests);
    }

    #[test]
    fn viewmodel_counts_master_lists() {
        let mut state = populated_state();
        state.search_query = "zzz".to_string();
        state.apply_search_filter();

        let vm = state.compute_viewmodel(30, 80);
        // Header counts come from the master lists, not the filtered views.
        assert!(vm.header.title.contains("2 friends"));
        assert!(vm.header.title.contains("1 pending"));
        assert!(vm.empty_state.is_none());
        assert!(vm.sections[0].rows.is_empty());
        assert!(vm.sections[1].rows.is_empty());
    }

    #[test]
    fn viewmodel_sections_in_order_with_badges() {
        let state = populated_state();
        let vm = state.compute_viewmodel(30, 80);

        assert_eq!(vm.sections.len(), 2);
        assert_eq!(vm.sections[0].title, "PENDING REQUESTS");
        assert_eq!(vm.sections[1].title, "YOUR FRIENDS");
        assert_eq!(vm.sections[0].rows.len(), 1);
        assert_eq!(vm.sections[0].rows[0].accept, Some(AcceptBadge::Ready));
        assert_eq!(vm.sections[1].rows.len(), 2);
        assert!(vm.sections[1].rows.iter().all(|r| r.accept.is_none()));
    }

    #[test]
    fn viewmodel_busy_badge_while_loading() {
        let mut state = populated_state();
        state.loading = true;

        let vm = state.compute_viewmodel(30, 80);
        assert_eq!(vm.sections[0].rows[0].accept, Some(AcceptBadge::Busy));
    }

    #[test]
    fn viewmodel_empty_state_when_roster_empty() {
        let state = AppState::new(Theme::default());
        let vm = state.compute_viewmodel(30, 80);
        assert!(vm.empty_state.is_some());
    }

    #[test]
    fn window_keeps_selection_visible() {
        let mut state = AppState::new(Theme::default());
        state.friends = (0..50)
            .map(|i| person(&format!("Friend{i:02}"), "Last"))
            .collect();
        state.apply_search_filter();
        state.selected_index = 49;

        let vm = state.compute_viewmodel(20, 80);
        let selected: Vec<_> = vm.sections[1]
            .rows
            .iter()
            .filter(|r| r.is_selected)
            .collect();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].name, "Friend49 Last");
    }
}

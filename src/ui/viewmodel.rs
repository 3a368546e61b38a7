//! View model types representing renderable UI state.
//!
//! This module defines immutable view models computed from application state,
//! following the MVVM pattern. View models are optimized for rendering and
//! contain pre-computed display information like highlight ranges, section
//! grouping, and selection state.
//!
//! # Architecture
//!
//! View models are created via `AppState::compute_viewmodel()` and consumed
//! by the renderer. They contain no business logic, only display-ready data.

/// Complete UI view model for rendering.
///
/// Contains all display information needed to render the roster screen: the
/// two sections (pending requests above friends), chrome, and the optional
/// overlays (search bar, add-friend modal, notice line, empty state).
#[derive(Debug, Clone)]
pub struct UIViewModel {
    /// Roster sections in display order: pending requests, then friends.
    pub sections: Vec<SectionView>,

    /// Header information (title, counts).
    pub header: HeaderInfo,

    /// Footer information (keybindings, help text).
    pub footer: FooterInfo,

    /// Optional search bar information (when in search mode).
    pub search_bar: Option<SearchBarInfo>,

    /// Optional add-friend modal (when the modal is open).
    pub modal: Option<ModalInfo>,

    /// Optional transient notice from the last send/accept outcome.
    pub notice: Option<NoticeInfo>,

    /// Optional empty state message (when the whole roster is empty).
    pub empty_state: Option<EmptyState>,
}

/// One roster section with its visible rows.
#[derive(Debug, Clone)]
pub struct SectionView {
    /// Section title ("PENDING REQUESTS" / "YOUR FRIENDS").
    pub title: String,

    /// Rows visible within the current window.
    pub rows: Vec<RosterRow>,

    /// Text shown instead of rows when the filtered section is empty.
    pub empty_text: String,
}

/// Display information for a single roster row.
#[derive(Debug, Clone)]
pub struct RosterRow {
    /// Display name ("First Last").
    pub name: String,

    /// Username shown in the second column.
    pub username: String,

    /// Whether this row is currently selected.
    pub is_selected: bool,

    /// Accept affordance for pending rows, `None` for friend rows.
    pub accept: Option<AcceptBadge>,

    /// Character range of the search match within `name`, if any.
    ///
    /// `(start_index, end_index)`, exclusive end, in character indices.
    pub highlight_range: Option<(usize, usize)>,
}

/// State of the accept affordance on a pending row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AcceptBadge {
    /// Accept is available: rendered as `[ADD]`.
    Ready,

    /// An accept is in flight: all accept controls render busy/disabled.
    Busy,
}

/// Header display information.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    /// Title text to display in the header.
    pub title: String,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding help text for the active input mode.
    pub keybindings: String,
}

/// Search bar display information.
#[derive(Debug, Clone)]
pub struct SearchBarInfo {
    /// Current search query text.
    pub query: String,
}

/// Add-friend modal display information.
#[derive(Debug, Clone)]
pub struct ModalInfo {
    /// Modal title ("Enter Friend's Email").
    pub title: String,

    /// Current email input text.
    pub input: String,
}

/// Transient notice from the last send/accept outcome.
#[derive(Debug, Clone)]
pub struct NoticeInfo {
    /// Notice text (e.g. "Friend request sent!").
    pub message: String,

    /// Failure notices render in the failure color.
    pub is_failure: bool,
}

/// Empty state message display information.
///
/// Shown when the roster has nothing at all to display (both master lists
/// empty), typically right after load before any friends exist.
#[derive(Debug, Clone)]
pub struct EmptyState {
    /// Primary message (e.g. "No friends yet").
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}

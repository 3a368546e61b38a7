//! Composable UI component renderers.
//!
//! This module provides specialized rendering components for different UI
//! elements, following a component-based architecture. Each component is
//! responsible for rendering a specific part of the interface.
//!
//! # Components
//!
//! - [`header`]: Title bar with roster counts
//! - [`footer`]: Help text and keybinding hints
//! - [`search`]: Search input box (border, query text)
//! - [`roster`]: The two roster sections (pending requests, friends)
//! - [`modal`]: Add-friend email input overlay
//! - [`notice`]: Transient outcome line above the footer
//! - [`empty`]: Empty state message for an empty roster
//!
//! # Layout
//!
//! [`render_roster_screen`] composes the full screen: chrome, optional
//! search bar, both sections, optional notice, and finally the modal
//! overlay so it draws on top.

mod empty;
mod footer;
mod header;
mod modal;
mod notice;
mod roster;
mod search;

pub use empty::render_empty_state;
pub use modal::render_modal;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use footer::render_footer;
use header::render_header;
use notice::render_notice;
use roster::render_section;
use search::render_search_bar;

/// Renders a horizontal border line at the specified row.
///
/// Used to separate UI sections (header/roster, roster/footer). Returns the
/// next available row position.
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the full roster screen layout.
///
/// Layout structure:
/// ```text
/// [blank line]
/// [Header]
/// [Border]
/// [Search Bar - 3 lines, only when searching]
/// [PENDING REQUESTS section]
/// [blank line]
/// [YOUR FRIENDS section]
/// [blank padding]
/// [Notice line, when present]
/// [Border]
/// [Footer]
/// [Modal overlay, when open]
/// ```
pub fn render_roster_screen(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2; // Start at row 2 (skip blank line at row 1)

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);

    if let Some(search) = &vm.search_bar {
        current_row = render_search_bar(current_row, search, theme, cols);
    }

    for section in &vm.sections {
        current_row = render_section(current_row, section, theme, cols);
        current_row += 1; // blank line between sections
    }
    let _ = current_row;

    let footer_start = rows.saturating_sub(1);
    let border_row = footer_start.saturating_sub(1);

    if let Some(notice) = &vm.notice {
        render_notice(border_row.saturating_sub(1), notice, theme, cols);
    }

    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_start, &vm.footer, theme, cols);

    if let Some(modal) = &vm.modal {
        render_modal(modal, theme, rows, cols);
    }
}

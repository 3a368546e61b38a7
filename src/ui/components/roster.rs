//! Roster component renderer.
//!
//! This module renders the two roster sections (pending requests, friends)
//! as name/username rows with selection highlighting, search match
//! highlighting, and the accept badge on pending rows.

use crate::ui::helpers::{self, position_cursor, truncate_chars};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{AcceptBadge, RosterRow, SectionView};

/// Fixed character width of the name column.
const NAME_COL_WIDTH: usize = 28;

/// Renders one roster section: title line, then its rows or the empty text.
///
/// Returns the next available row position.
pub fn render_section(row: usize, section: &SectionView, theme: &Theme, cols: usize) -> usize {
    let mut current_row = render_section_title(row, &section.title, theme);

    if section.rows.is_empty() {
        position_cursor(current_row, 1);
        print!("{}", Theme::dim());
        print!("{}", Theme::fg(&theme.colors.text_dim));
        print!("  {}", section.empty_text);
        print!("{}", Theme::reset());
        return current_row + 1;
    }

    for item in &section.rows {
        current_row = render_roster_row(current_row, item, theme, cols);
    }
    current_row
}

fn render_section_title(row: usize, title: &str, theme: &Theme) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.section_title_fg));
    print!(" {title}");
    print!("{}", Theme::reset());
    row + 1
}

/// Renders a single roster row at the specified row position.
///
/// # Layout
///
/// ```text
///  NAME (28 chars) USERNAME [padding] [ADD]
/// ```
///
/// # Styling Precedence
///
/// 1. Selection background (if `is_selected`)
/// 2. Search match highlight (unless selected)
/// 3. Normal text color
///
/// The row is padded to fill the entire terminal width so the selection
/// background renders as a full bar.
fn render_roster_row(row: usize, item: &RosterRow, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    if item.is_selected {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_normal));
    }

    print!("  ");
    let name = truncate_chars(&item.name, NAME_COL_WIDTH.saturating_sub(1));
    helpers::render_highlighted_text(&name, item.highlight_range, theme, item.is_selected);
    if item.is_selected {
        print!("{}", Theme::bg(&theme.colors.selection_bg));
        print!("{}", Theme::fg(&theme.colors.selection_fg));
    }

    let name_len = name.chars().count();
    print!("{}", " ".repeat(NAME_COL_WIDTH.saturating_sub(name_len)));

    if !item.is_selected {
        print!("{}", Theme::fg(&theme.colors.text_dim));
    }
    print!("{}", item.username);

    let badge_text = match item.accept {
        Some(AcceptBadge::Ready) => "[ADD]",
        Some(AcceptBadge::Busy) => "[...]",
        None => "",
    };

    let used = 2 + NAME_COL_WIDTH + item.username.chars().count() + badge_text.len() + 1;
    print!("{}", " ".repeat(cols.saturating_sub(used)));

    if !badge_text.is_empty() {
        if !item.is_selected {
            print!("{}", Theme::fg(&theme.colors.accept_fg));
        }
        print!("{badge_text}");
    }
    print!(" ");

    print!("{}", Theme::reset());
    row + 1
}

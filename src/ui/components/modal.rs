//! Add-friend modal component renderer.
//!
//! This module renders the email input modal as a bordered overlay box drawn
//! on top of the roster. Drawing it last keeps it visually above the rows it
//! covers without any buffer management.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ModalInfo;

/// Inner content width of the modal box.
const MODAL_INNER_WIDTH: usize = 44;

/// Renders the add-friend modal centered in the pane.
///
/// Displays a 5-line bordered box: title line, blank, input line. The box
/// is centered both horizontally and vertically.
///
/// # Layout
///
/// ```text
/// ┌──────────────────────────┐
/// │   Enter Friend's Email   │
/// │                          │
/// │ > user@example.com_      │
/// └──────────────────────────┘
/// ```
pub fn render_modal(modal: &ModalInfo, theme: &Theme, rows: usize, cols: usize) {
    let inner_width = MODAL_INNER_WIDTH.min(cols.saturating_sub(4));
    let box_width = inner_width + 2;
    let left = (cols.saturating_sub(box_width)) / 2 + 1;
    let top = (rows.saturating_sub(5)) / 2 + 1;

    position_cursor(top, left);
    print!("{}", Theme::fg(&theme.colors.input_border));
    print!("┌{}┐", "─".repeat(inner_width));

    let title_len = modal.title.chars().count().min(inner_width);
    let title_pad = (inner_width - title_len) / 2;
    position_cursor(top + 1, left);
    print!("│");
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!("{}", " ".repeat(title_pad));
    print!("{}", modal.title);
    print!("{}", " ".repeat(inner_width - title_pad - title_len));
    print!("{}", Theme::reset());
    print!("{}", Theme::fg(&theme.colors.input_border));
    print!("│");

    position_cursor(top + 2, left);
    print!("│{}│", " ".repeat(inner_width));

    // Show the tail of the input when it outgrows the box.
    let visible_input: String = {
        let max = inner_width.saturating_sub(4);
        let chars: Vec<char> = modal.input.chars().collect();
        chars[chars.len().saturating_sub(max)..].iter().collect()
    };
    let input_len = visible_input.chars().count();
    position_cursor(top + 3, left);
    print!("│");
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!(" > {visible_input}_");
    print!("{}", " ".repeat(inner_width.saturating_sub(input_len + 4)));
    print!("{}", Theme::fg(&theme.colors.input_border));
    print!("│");

    position_cursor(top + 4, left);
    print!("└{}┘", "─".repeat(inner_width));
    print!("{}", Theme::reset());
}

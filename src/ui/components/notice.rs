//! Notice line component renderer.
//!
//! This module renders the transient outcome line shown above the footer
//! after a send or accept attempt resolves.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::NoticeInfo;

/// Renders the notice line at the specified row.
///
/// Success notices use `notice_success_fg`, failures `notice_failure_fg`.
/// The text is centered and the line padded to the full terminal width.
pub fn render_notice(row: usize, notice: &NoticeInfo, theme: &Theme, cols: usize) {
    let color = if notice.is_failure {
        &theme.colors.notice_failure_fg
    } else {
        &theme.colors.notice_success_fg
    };

    let text_len = notice.message.chars().count().min(cols);
    let padding = (cols.saturating_sub(text_len)) / 2;

    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", " ".repeat(padding));
    print!("{}", notice.message);
    print!("{}", " ".repeat(cols.saturating_sub(padding + text_len)));
    print!("{}", Theme::reset());
}

//! Shared rendering utilities and helpers.
//!
//! This module provides low-level rendering utilities used across multiple UI
//! components: cursor positioning, width-aware truncation, and search match
//! highlighting with proper ANSI escape sequence management.
//!
//! # Features
//!
//! - **Match Highlighting**: Renders text with one highlighted character range
//! - **Selection Awareness**: Adjusts highlighting based on selection state
//! - **UTF-8 Safe**: Operates on character indices, not byte indices

use crate::ui::theme::Theme;

/// Positions the cursor at a specific row and column.
///
/// Uses ANSI escape sequence `\u{1b}[{row};{col}H` to move the cursor.
/// Coordinates are 1-indexed (row 1 = first row, col 1 = first column).
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Truncates `text` to at most `max` characters, appending `…` when cut.
///
/// Operates on character counts so multi-byte names truncate cleanly.
#[must_use]
pub fn truncate_chars(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let cut: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{cut}…")
}

/// Renders text with an optional highlighted character range.
///
/// The highlighted section uses the match highlight colors unless the row is
/// selected, in which case the selection colors take precedence and the
/// highlight is suppressed.
///
/// # Character Indices
///
/// The range uses character indices `(start, end)` with an exclusive end,
/// matching what `Person::match_span` produces. The function converts the
/// text to a character vector for proper indexing.
pub fn render_highlighted_text(
    text: &str,
    range: Option<(usize, usize)>,
    theme: &Theme,
    is_selected: bool,
) {
    let Some((start, end)) = range.filter(|_| !is_selected) else {
        print!("{text}");
        return;
    };

    let chars: Vec<char> = text.chars().collect();
    let start = start.min(chars.len());
    let end = end.min(chars.len());

    let before: String = chars[..start].iter().collect();
    let matched: String = chars[start..end].iter().collect();
    let after: String = chars[end..].iter().collect();

    print!("{before}");
    print!("{}", Theme::fg(&theme.colors.match_highlight_fg));
    print!("{}", Theme::bg(&theme.colors.match_highlight_bg));
    print!("{matched}");
    print!("{}", Theme::reset());
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!("{after}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate_chars("short", 10), "short");
        assert_eq!(truncate_chars("abcdefgh", 5), "abcd…");
        assert_eq!(truncate_chars("élan vital", 5), "élan…");
    }
}

//! Shared rendering utilities.
//!
//! Components render into a `String` frame; these helpers append styled
//! fragments to it. Widths are measured in characters, not bytes.

use crate::ui::theme::Theme;

/// Clears the screen and homes the cursor.
pub fn clear_screen(out: &mut String) {
    out.push_str("\u{1b}[2J\u{1b}[H");
}

/// Appends a full-width horizontal rule.
pub fn render_border(out: &mut String, color: &str, cols: usize) {
    out.push_str(&Theme::fg(color));
    out.push_str(&"─".repeat(cols));
    out.push_str(Theme::reset());
    out.push('\n');
}

/// Appends `text` centered in `cols` columns, truncated if wider.
pub fn push_centered(out: &mut String, text: &str, cols: usize) {
    let len = text.chars().count().min(cols);
    let padding = cols.saturating_sub(len) / 2;

    out.push_str(&" ".repeat(padding));
    out.extend(text.chars().take(len));
    out.push_str(&" ".repeat(cols.saturating_sub(padding + len)));
}

/// Appends text with highlighted character ranges for search matches.
///
/// Ranges are `(start, end)` character indices, end exclusive. Text outside
/// the ranges keeps the caller's current style; after each highlight the style
/// is reset and `restore_fg` re-applied.
pub fn render_highlighted_text(
    out: &mut String,
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    restore_fg: &str,
) {
    if ranges.is_empty() {
        out.push_str(text);
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len()).max(current_pos);
        let end = end.min(chars.len());
        if start >= end {
            continue;
        }

        out.extend(&chars[current_pos..start]);

        out.push_str(&Theme::fg(&theme.colors.match_highlight_fg));
        out.push_str(&Theme::bg(&theme.colors.match_highlight_bg));
        out.extend(&chars[start..end]);
        out.push_str(Theme::reset());
        out.push_str(&Theme::fg(restore_fg));

        current_pos = end;
    }

    if current_pos < chars.len() {
        out.extend(&chars[current_pos..]);
    }
}

/// Strips ANSI escape sequences, leaving the visible text.
#[cfg(test)]
pub fn strip_ansi(text: &str) -> String {
    let mut plain = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c == '\u{1b}' {
            for next in chars.by_ref() {
                if next.is_ascii_alphabetic() {
                    break;
                }
            }
        } else {
            plain.push(c);
        }
    }
    plain
}

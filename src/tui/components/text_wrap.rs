//! Word wrapping for prose shown in the result and input panels.
//!
//! Widths are measured in terminal columns with `unicode-width`, so emoji
//! and CJK text wrap at the right place.

use unicode_width::UnicodeWidthStr;

/// Wraps `text` to `max_width` columns, prefixing every output line with
/// `indent`.
///
/// Existing line breaks are kept; blank lines stay blank. Words wider than
/// the available width are split. A `max_width` at or below the indent width
/// disables wrapping.
#[must_use]
pub fn wrap_with_indent(text: &str, indent: &str, max_width: usize) -> Vec<String> {
    let available = max_width.saturating_sub(indent.width());
    text.lines()
        .flat_map(|line| wrap_line(line, available))
        .map(|line| format!("{indent}{line}"))
        .collect()
}

fn wrap_line(line: &str, available: usize) -> Vec<String> {
    if available == 0 || line.width() <= available {
        return vec![line.to_owned()];
    }

    let mut lines = Vec::new();
    let mut current = String::new();

    for word in line.split_whitespace() {
        let separator = usize::from(!current.is_empty());
        if current.width().saturating_add(separator).saturating_add(word.width()) <= available {
            if separator == 1 {
                current.push(' ');
            }
            current.push_str(word);
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }

        if word.width() <= available {
            current.push_str(word);
        } else {
            let mut pieces = split_word(word, available);
            current = pieces.pop().unwrap_or_default();
            lines.extend(pieces);
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

fn split_word(word: &str, available: usize) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut piece = String::new();
    let mut piece_width = 0usize;

    for ch in word.chars() {
        let ch_width = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if piece_width.saturating_add(ch_width) > available && !piece.is_empty() {
            pieces.push(std::mem::take(&mut piece));
            piece_width = 0;
        }
        piece.push(ch);
        piece_width = piece_width.saturating_add(ch_width);
    }

    pieces.push(piece);
    pieces
}

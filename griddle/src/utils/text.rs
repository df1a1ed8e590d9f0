//! Text utilities for labels and truncation.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Derive a display label from a column accessor.
///
/// Only the terminal path segment is used: `"user.profile.displayName"`
/// becomes `"Display Name"`. The segment is split on case boundaries,
/// underscores and hyphens, and each word is capitalized. Bracketed
/// indices are dropped (`"tags[3]"` -> `"Tags"`).
///
/// Already-capitalized input passes through unchanged (`"Name"` -> `"Name"`),
/// and malformed accessors degrade to a best-effort label rather than
/// an error.
pub fn humanize(accessor: &str) -> String {
    let segment = accessor.rsplit('.').next().unwrap_or(accessor);
    let segment = segment.split('[').next().unwrap_or(segment);

    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut prev_lower = false;
    for ch in segment.chars() {
        if ch == '_' || ch == '-' || ch.is_whitespace() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev_lower = false;
            continue;
        }
        // Word boundary at lower-to-upper transitions ("displayName")
        if ch.is_uppercase() && prev_lower && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
        prev_lower = ch.is_lowercase() || ch.is_numeric();
        current.push(ch);
    }
    if !current.is_empty() {
        words.push(current);
    }

    words
        .iter()
        .map(|word| capitalize(word))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Capitalize the first character of a word, leaving the rest untouched.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Truncate text to a display width, appending an ellipsis when cut.
///
/// Widths are measured in terminal cells, so wide characters count double.
pub fn truncate_text(text: &str, width: usize) -> String {
    if width == 0 {
        return String::new();
    }
    if text.width() <= width {
        return text.to_string();
    }

    let budget = width.saturating_sub(1); // Reserve a cell for the ellipsis
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

//! Shared utility functions.

/// Single-line preview of `text` for log messages.
///
/// Runs of whitespace (including newlines) collapse to one space, and the
/// result is cut to at most `max_chars` characters with a trailing `…`
/// when anything was dropped.
pub fn preview(text: &str, max_chars: usize) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.chars().count() <= max_chars {
        return collapsed;
    }
    let mut out: String = collapsed.chars().take(max_chars).collect();
    out.push('…');
    out
}

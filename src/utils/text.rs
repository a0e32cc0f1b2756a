//! Text helpers shared by the analyzers and report renderers

/// Character-safe prefix of at most `max_chars` characters
pub fn char_prefix(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Truncates to `max_chars` characters, appending `...` only when text was cut
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    let prefix = char_prefix(text, max_chars);
    if prefix.len() < text.len() {
        format!("{}...", prefix)
    } else {
        text.to_string()
    }
}

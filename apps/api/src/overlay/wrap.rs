//! Greedy line wrapping for overlay text.
//!
//! Words are split on ASCII spaces and packed left to right. A line is closed
//! as soon as the next word would push it past the limit. Runs of spaces
//! collapse, and a word that is longer than the limit on its own is emitted
//! verbatim on a line of its own. Lengths are counted in `char`s.
//!
//! The renderer writes exactly these lines into the drawtext text file, so the
//! preview and the burned-in video always break at the same words.

use crate::overlay::policy::OverlayPolicy;

/// Wraps `text` into lines of at most `max_chars_per_line` characters.
///
/// Empty or all-space input produces no lines. Never fails.
pub fn wrap_text_to_lines(text: &str, max_chars_per_line: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for word in text.split(' ').filter(|w| !w.is_empty()) {
        let word_len = word.chars().count();
        let candidate_len = if current.is_empty() {
            word_len
        } else {
            current_len + 1 + word_len
        };

        if candidate_len <= max_chars_per_line {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
            current_len = candidate_len;
        } else if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_len = word_len;
        } else {
            lines.push(word.to_string());
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Wraps `text` with the policy's line width.
pub fn wrap_with_policy(text: &str, policy: &OverlayPolicy) -> Vec<String> {
    wrap_text_to_lines(text, policy.max_chars_per_line)
}

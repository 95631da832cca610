//! Text wrapping for message bubbles.

use super::width::visual_width;

/// Wrap a plain text string to the specified width.
///
/// Explicit newlines in `text` are kept as line breaks, and blank lines
/// survive. Returns at least one line.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![text.to_string()];
    }
    let lines: Vec<String> = textwrap::wrap(text, width)
        .into_iter()
        .map(std::borrow::Cow::into_owned)
        .collect();
    if lines.is_empty() {
        vec![String::new()]
    } else {
        lines
    }
}

/// Widest line in display cells.
pub fn max_line_width(lines: &[String]) -> usize {
    lines.iter().map(|l| visual_width(l)).max().unwrap_or(0)
}

//! Footer: keybinding hints, the placeholder note and the privacy line.
//!
//! Format: `Enter to send · Shift+Enter for a new line · Esc to quit`

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::Theme;

/// Rows the footer occupies.
pub const FOOTER_HEIGHT: u16 = 3;

/// A single keybinding hint.
#[derive(Debug, Clone)]
pub struct KeyHint {
    /// The key or key combination (e.g., "Enter", "Shift+Enter").
    pub key: String,
    /// The action description (e.g., "to send").
    pub action: String,
}

impl KeyHint {
    /// Create a new key hint.
    pub fn new(key: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            action: action.into(),
        }
    }
}

/// Hints shown under the composer.
pub fn chat_hints() -> Vec<KeyHint> {
    vec![
        KeyHint::new("Enter", "to send"),
        KeyHint::new("Shift+Enter", "for a new line"),
        KeyHint::new("Esc", "to quit"),
    ]
}

/// Footer widget.
pub struct FooterHints<'a> {
    hints: &'a [KeyHint],
    note: &'a str,
    disclaimer: &'a str,
    theme: &'a Theme,
}

impl<'a> FooterHints<'a> {
    /// Create a new footer hints widget.
    pub fn new(hints: &'a [KeyHint], theme: &'a Theme) -> Self {
        Self {
            hints,
            note: "",
            disclaimer: "",
            theme,
        }
    }

    /// Muted row under the hints.
    #[must_use]
    pub fn note(mut self, note: &'a str) -> Self {
        self.note = note;
        self
    }

    /// Bottom row.
    #[must_use]
    pub fn disclaimer(mut self, disclaimer: &'a str) -> Self {
        self.disclaimer = disclaimer;
        self
    }

    fn hint_line(&self) -> Line<'static> {
        let key_style = Style::default().fg(self.theme.primary);
        let action_style = Style::default().fg(self.theme.muted);

        let mut spans = vec![Span::raw(" ")];
        for (i, hint) in self.hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" · ", action_style));
            }
            spans.push(Span::styled(hint.key.clone(), key_style));
            spans.push(Span::styled(format!(" {}", hint.action), action_style));
        }
        Line::from(spans)
    }
}

impl Widget for FooterHints<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let muted = Style::default().fg(self.theme.muted);
        let mut lines = vec![self.hint_line()];
        for text in [self.note, self.disclaimer] {
            if !text.is_empty() {
                lines.push(Line::from(Span::styled(text.to_string(), muted)).centered());
            }
        }
        Paragraph::new(lines)
            .style(Style::default().bg(self.theme.base))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;

    #[test]
    fn test_footer_renders_hints_and_notes() {
        let theme = Theme::default();
        let hints = chat_hints();
        let area = Rect::new(0, 0, 80, FOOTER_HEIGHT);
        let mut buf = Buffer::empty(area);
        FooterHints::new(&hints, &theme)
            .note("Note: replies are canned.")
            .disclaimer("Conversations are not stored.")
            .render(area, &mut buf);

        let screen = buffer_to_string(&buf);
        let rows: Vec<&str> = screen.lines().collect();
        assert_eq!(
            rows[0].trim(),
            "Enter to send · Shift+Enter for a new line · Esc to quit"
        );
        assert!(rows[1].contains("Note: replies are canned."));
        assert!(rows[2].contains("Conversations are not stored."));
    }

    #[test]
    fn test_empty_note_is_skipped() {
        let theme = Theme::default();
        let hints = chat_hints();
        let area = Rect::new(0, 0, 80, FOOTER_HEIGHT);
        let mut buf = Buffer::empty(area);
        FooterHints::new(&hints, &theme)
            .disclaimer("Conversations are not stored.")
            .render(area, &mut buf);

        let screen = buffer_to_string(&buf);
        assert!(screen.lines().nth(1).unwrap().contains("Conversations are not stored."));
    }
}

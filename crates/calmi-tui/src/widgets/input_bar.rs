//! Message composer: multi-line input plus a send control.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │ Type your message here...          [ Send ] │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! The box grows with the number of lines typed, up to [`MAX_INPUT_LINES`].

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::theme::Theme;

use super::text_input::TextInputState;

/// Most text rows shown before the input scrolls.
pub const MAX_INPUT_LINES: usize = 4;

const PLACEHOLDER: &str = "Type your message here...";
const SEND_LABEL: &str = "[ Send ]";

/// Composer widget.
pub struct InputBar<'a> {
    input: &'a TextInputState,
    theme: &'a Theme,
    can_send: bool,
}

impl<'a> InputBar<'a> {
    /// Create a new input bar widget.
    pub fn new(input: &'a TextInputState, theme: &'a Theme) -> Self {
        Self {
            input,
            theme,
            can_send: false,
        }
    }

    /// Whether the send control is enabled.
    #[must_use]
    pub fn can_send(mut self, can_send: bool) -> Self {
        self.can_send = can_send;
        self
    }

    /// Total height including borders for the given input.
    pub fn height(input: &TextInputState) -> u16 {
        let rows = input.line_count().clamp(1, MAX_INPUT_LINES);
        u16::try_from(rows).unwrap_or(1) + 2
    }

    /// Build text rows with the cursor cell highlighted.
    fn build_lines(&self, rows: usize) -> Vec<Line<'static>> {
        let text = Style::default().fg(self.theme.text);
        let cursor = text.add_modifier(Modifier::REVERSED);

        if self.input.is_empty() {
            return vec![Line::from(vec![
                Span::styled(" ", cursor),
                Span::styled(PLACEHOLDER, Style::default().fg(self.theme.muted)),
            ])];
        }

        let (cursor_line, cursor_col) = self.input.cursor_line_col();
        let all: Vec<&str> = self.input.content().split('\n').collect();

        // Keep the cursor row in view.
        let first = (cursor_line + 1).saturating_sub(rows);

        all.iter()
            .enumerate()
            .skip(first)
            .take(rows)
            .map(|(idx, row)| {
                if idx != cursor_line {
                    return Line::from(Span::styled((*row).to_string(), text));
                }
                let before: String = row.chars().take(cursor_col).collect();
                let at: Option<char> = row.chars().nth(cursor_col);
                let after: String = row.chars().skip(cursor_col + 1).collect();
                Line::from(vec![
                    Span::styled(before, text),
                    Span::styled(at.map_or_else(|| " ".to_string(), String::from), cursor),
                    Span::styled(after, text),
                ])
            })
            .collect()
    }
}

impl Widget for InputBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.border_focused))
            .style(Style::default().bg(self.theme.surface));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        #[allow(clippy::cast_possible_truncation)]
        let send_width = SEND_LABEL.len() as u16 + 1;
        let text_width = inner.width.saturating_sub(send_width + 1);
        let text_area = Rect::new(inner.x + 1, inner.y, text_width, inner.height);

        let lines = self.build_lines(inner.height as usize);
        Paragraph::new(lines).render(text_area, buf);

        if inner.width > send_width {
            let send_area = Rect::new(
                inner.x + inner.width - send_width,
                inner.y,
                send_width,
                1,
            );
            let style = if self.can_send {
                Style::default()
                    .fg(self.theme.primary)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
                    .fg(self.theme.muted)
                    .add_modifier(Modifier::DIM)
            };
            Paragraph::new(Line::from(Span::styled(SEND_LABEL, style))).render(send_area, buf);
        }
    }
}

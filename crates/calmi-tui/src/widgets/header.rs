//! Header above the conversation: brand bar, page title and subtitle.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::text::truncate_to_width;
use crate::theme::Theme;

/// Rows the header occupies.
pub const HEADER_HEIGHT: u16 = 4;

const BRAND: &str = "Calmi";

/// Header widget.
pub struct Header<'a> {
    title: &'a str,
    subtitle: &'a str,
    theme: &'a Theme,
}

impl<'a> Header<'a> {
    pub fn new(title: &'a str, subtitle: &'a str, theme: &'a Theme) -> Self {
        Self {
            title,
            subtitle,
            theme,
        }
    }
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }
        let width = area.width as usize;
        let bar = Style::default().bg(self.theme.surface);

        let brand = Line::from(vec![
            Span::styled(" ◆ ", bar.fg(self.theme.primary)),
            Span::styled(
                BRAND,
                bar.fg(self.theme.primary).add_modifier(Modifier::BOLD),
            ),
        ])
        .style(bar);

        let lines = vec![
            brand,
            Line::default(),
            Line::from(Span::styled(
                format!(" {}", truncate_to_width(self.title, width.saturating_sub(1))),
                Style::default()
                    .fg(self.theme.text)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!(
                    " {}",
                    truncate_to_width(self.subtitle, width.saturating_sub(1))
                ),
                Style::default().fg(self.theme.subtext),
            )),
        ];

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
    fn test_header_renders_title_and_subtitle() {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 60, HEADER_HEIGHT);
        let mut buf = Buffer::empty(area);
        Header::new("Talk to Calmi AI", "A safe space.", &theme).render(area, &mut buf);

        let screen = buffer_to_string(&buf);
        assert!(screen.contains("Calmi"));
        assert!(screen.contains("Talk to Calmi AI"));
        assert!(screen.contains("A safe space."));
    }

    #[test]
    fn test_header_truncates_when_narrow() {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 12, HEADER_HEIGHT);
        let mut buf = Buffer::empty(area);
        Header::new("Talk to Calmi AI", "subtitle", &theme).render(area, &mut buf);

        let screen = buffer_to_string(&buf);
        assert!(screen.contains("Talk to ..."));
        assert!(!screen.contains("Calmi AI"));
    }
}

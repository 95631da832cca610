//! The chat screen: header, conversation, composer, footer.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    widgets::{Block, Widget},
};

use crate::app::App;
use crate::widgets::{
    chat_hints, FooterHints, Header, InputBar, MessageList, FOOTER_HEIGHT, HEADER_HEIGHT,
};

use super::Screen;

/// Widest the conversation column gets on large terminals.
const MAX_COLUMN_WIDTH: u16 = 96;

/// Chat screen.
pub struct ChatScreen;

impl Screen for ChatScreen {
    fn render(&self, app: &App, area: Rect, buf: &mut Buffer) {
        Block::default()
            .style(Style::default().bg(app.theme.base))
            .render(area, buf);

        let column = centered_column(area, MAX_COLUMN_WIDTH);
        let input_height = InputBar::height(&app.input);

        let [header, list, input, footer] = Layout::vertical([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(3),
            Constraint::Length(input_height),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .areas(column);

        Header::new(&app.config.title, &app.config.subtitle, &app.theme).render(header, buf);

        MessageList::new(app.session.messages(), &app.scroll, &app.theme)
            .assistant_name(&app.config.assistant_name)
            .typing(app.session.is_pending(), app.tick)
            .render(list, buf);

        InputBar::new(&app.input, &app.theme)
            .can_send(app.can_send())
            .render(input, buf);

        let hints = chat_hints();
        FooterHints::new(&hints, &app.theme)
            .note(&app.config.note)
            .disclaimer(&app.config.disclaimer)
            .render(footer, buf);
    }
}

/// Center a column of at most `max_width` cells.
fn centered_column(area: Rect, max_width: u16) -> Rect {
    let width = area.width.min(max_width);
    let x = area.x + (area.width - width) / 2;
    Rect::new(x, area.y, width, area.height)
}

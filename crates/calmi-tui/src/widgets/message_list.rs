//! Scrollable message list.
//!
//! ```text
//! ┌─ Conversation ───────────────────────────────────┐
//! │  Calmi AI                                         │
//! │  Hi there! I'm Calmi, your mental health          │
//! │  companion. How are you feeling today?            │
//! │                                                   │
//! │                                  You              │
//! │                                  I feel anxious   │
//! │                                                   │
//! │  ● ● ●                                            │
//! └───────────────────────────────────────────────────┘
//! ```
//!
//! Bot bubbles sit on the left, user bubbles on the right. The list follows
//! the newest entry; [`ChatScroll`] animates the approach instead of jumping.

use std::cell::Cell;

use calmi_engine::{Message, Sender};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::text::{max_line_width, pad_to_width, visual_width, wrap_text};
use crate::theme::Theme;

use super::typing_indicator::indicator_lines;

/// Lines scrolled per mouse wheel tick.
pub const SCROLL_SPEED: usize = 3;

/// Bubbles take at most this share of the list width.
const BUBBLE_WIDTH_PERCENT: usize = 70;

/// Narrowest bubble text column, regardless of terminal width.
const MIN_BUBBLE_TEXT_WIDTH: usize = 10;

/// Scroll position of the message list.
///
/// `offset` counts lines hidden above the viewport. The largest valid offset
/// depends on the rendered width, so the widget records it on every render.
#[derive(Debug)]
pub struct ChatScroll {
    offset: usize,
    follow: bool,
    max_offset: Cell<usize>,
}

impl Default for ChatScroll {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatScroll {
    /// Start pinned to the bottom.
    pub fn new() -> Self {
        Self {
            offset: 0,
            follow: true,
            max_offset: Cell::new(0),
        }
    }

    pub fn offset(&self) -> usize {
        self.offset.min(self.max_offset.get())
    }

    #[cfg(test)]
    pub fn max_offset(&self) -> usize {
        self.max_offset.get()
    }

    pub fn is_following(&self) -> bool {
        self.follow
    }

    /// Whether the newest line is in view.
    pub fn at_bottom(&self) -> bool {
        self.offset() >= self.max_offset.get()
    }

    /// Pin to the newest entry. The approach is animated by [`Self::step`].
    pub fn follow_latest(&mut self) {
        self.follow = true;
    }

    /// Scroll toward older messages. Leaves follow mode.
    pub fn scroll_up(&mut self, lines: usize) {
        self.offset = self.offset().saturating_sub(lines);
        self.follow = self.at_bottom();
    }

    /// Scroll toward newer messages. Reaching the bottom re-enters follow mode.
    pub fn scroll_down(&mut self, lines: usize) {
        self.offset = (self.offset() + lines).min(self.max_offset.get());
        if self.at_bottom() {
            self.follow = true;
        }
    }

    /// Advance the smooth scroll by one frame.
    ///
    /// Covers half the remaining distance (at least one line) per call.
    pub fn step(&mut self) {
        let max = self.max_offset.get();
        if self.offset > max {
            self.offset = max;
        }
        if self.follow && self.offset < max {
            let gap = max - self.offset;
            self.offset += gap.div_ceil(2);
        }
    }

    /// Jump straight to the bottom.
    #[cfg(test)]
    pub fn snap_to_bottom(&mut self) {
        self.follow = true;
        self.offset = self.max_offset.get();
    }

    fn record_max(&self, max: usize) {
        self.max_offset.set(max);
    }
}

/// Message list widget.
pub struct MessageList<'a> {
    messages: &'a [Message],
    scroll: &'a ChatScroll,
    theme: &'a Theme,
    assistant_name: &'a str,
    typing: bool,
    tick: u64,
}

impl<'a> MessageList<'a> {
    /// Create a new message list.
    pub fn new(messages: &'a [Message], scroll: &'a ChatScroll, theme: &'a Theme) -> Self {
        Self {
            messages,
            scroll,
            theme,
            assistant_name: "Calmi AI",
            typing: false,
            tick: 0,
        }
    }

    /// Set the label shown on bot bubbles.
    #[must_use]
    pub fn assistant_name(mut self, name: &'a str) -> Self {
        self.assistant_name = name;
        self
    }

    /// Show the typing indicator, animated by `tick`.
    #[must_use]
    pub fn typing(mut self, typing: bool, tick: u64) -> Self {
        self.typing = typing;
        self.tick = tick;
        self
    }

    /// Build every line of the list for a viewport `width` cells wide.
    pub fn build_lines(&self, width: usize) -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        for (i, message) in self.messages.iter().enumerate() {
            if i > 0 {
                lines.push(Line::default());
            }
            lines.extend(self.bubble_lines(message, width));
        }
        if self.typing {
            if !lines.is_empty() {
                lines.push(Line::default());
            }
            lines.extend(indicator_lines(self.tick, self.theme));
        }
        lines
    }

    fn bubble_lines(&self, message: &Message, width: usize) -> Vec<Line<'static>> {
        let (bubble, fg, alignment) = match message.sender {
            Sender::User => (self.theme.user_bubble, self.theme.user_text, Alignment::Right),
            Sender::Bot => (self.theme.bot_bubble, self.theme.bot_text, Alignment::Left),
        };
        let style = Style::default().bg(bubble).fg(fg);

        // One cell of gutter outside the bubble and one of padding inside.
        let bubble_max = (width * BUBBLE_WIDTH_PERCENT / 100).max(MIN_BUBBLE_TEXT_WIDTH + 2);
        let text_width = bubble_max.saturating_sub(2).max(MIN_BUBBLE_TEXT_WIDTH);

        let label = message.sender.label(self.assistant_name);
        let wrapped = wrap_text(&message.text, text_width);
        let inner = max_line_width(&wrapped).max(visual_width(label));

        let make_line = |content: Line<'static>| -> Line<'static> {
            let mut spans = Vec::with_capacity(content.spans.len() + 2);
            if alignment == Alignment::Left {
                spans.push(Span::raw(" "));
            }
            spans.extend(content.spans);
            if alignment == Alignment::Right {
                spans.push(Span::raw(" "));
            }
            Line::from(spans).alignment(alignment)
        };

        let mut lines = Vec::with_capacity(wrapped.len() + 1);
        lines.push(make_line(Line::from(Span::styled(
            format!(" {} ", pad_to_width(label, inner)),
            style.add_modifier(Modifier::BOLD),
        ))));
        for text in &wrapped {
            lines.push(make_line(Line::from(Span::styled(
                format!(" {} ", pad_to_width(text, inner)),
                style,
            ))));
        }
        lines
    }
}

impl Widget for MessageList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut block = Block::default()
            .title(" Conversation ")
            .title_style(Style::default().fg(self.theme.text))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.border))
            .style(Style::default().bg(self.theme.surface));

        if !self.scroll.is_following() {
            block = block.title_bottom(
                Line::from(Span::styled(
                    " ↓ PgDn for newer ",
                    Style::default().fg(self.theme.muted),
                ))
                .right_aligned(),
            );
        }

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let lines = self.build_lines(inner.width as usize);
        let max = lines.len().saturating_sub(inner.height as usize);
        self.scroll.record_max(max);

        let offset = u16::try_from(self.scroll.offset()).unwrap_or(u16::MAX);
        Paragraph::new(lines)
            .scroll((offset, 0))
            .render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;

    fn render(list: MessageList<'_>, width: u16, height: u16) -> String {
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        list.render(area, &mut buf);
        buffer_to_string(&buf)
    }

    fn sample() -> Vec<Message> {
        vec![Message::bot("Hello there"), Message::user("I feel anxious")]
    }

    #[test]
    fn test_bot_left_user_right() {
        let messages = sample();
        let scroll = ChatScroll::new();
        let theme = Theme::default();
        let screen = render(MessageList::new(&messages, &scroll, &theme), 50, 12);

        let bot_line = screen.lines().find(|l| l.contains("Hello there")).unwrap();
        let user_line = screen.lines().find(|l| l.contains("I feel anxious")).unwrap();
        let bot_col = bot_line.find("Hello there").unwrap();
        let user_col = user_line.find("I feel anxious").unwrap();
        assert!(bot_col < 8, "bot bubble should hug the left edge: {bot_line:?}");
        assert!(user_col > 20, "user bubble should hug the right edge: {user_line:?}");
        assert!(screen.contains("Calmi AI"));
        assert!(screen.contains("You"));
    }

    #[test]
    fn test_long_text_wraps_inside_bubble() {
        let messages = vec![Message::bot("word ".repeat(40))];
        let list_scroll = ChatScroll::new();
        let theme = Theme::default();
        let list = MessageList::new(&messages, &list_scroll, &theme);

        let lines = list.build_lines(40);
        // label + several wrapped rows
        assert!(lines.len() > 3);
        for line in &lines {
            assert!(line.width() <= 40, "line too wide: {}", line.width());
        }
    }

    #[test]
    fn test_typing_indicator_only_when_pending() {
        let messages = sample();
        let scroll = ChatScroll::new();
        let theme = Theme::default();

        let idle = render(MessageList::new(&messages, &scroll, &theme), 50, 14);
        assert!(!idle.contains('●'));

        let typing = render(
            MessageList::new(&messages, &scroll, &theme).typing(true, 0),
            50,
            14,
        );
        assert_eq!(typing.matches('●').count(), 3);
    }

    #[test]
    fn test_render_records_max_offset() {
        let messages: Vec<Message> = (0..10).map(|i| Message::user(format!("m{i}"))).collect();
        let scroll = ChatScroll::new();
        let theme = Theme::default();
        render(MessageList::new(&messages, &scroll, &theme), 40, 10);

        // 10 messages * 2 lines + 9 spacers = 29 lines in an 8-line viewport.
        assert_eq!(scroll.max_offset(), 21);
    }

    #[test]
    fn test_step_eases_toward_bottom() {
        let mut scroll = ChatScroll::new();
        scroll.record_max(20);

        scroll.step();
        assert_eq!(scroll.offset(), 10);
        scroll.step();
        assert_eq!(scroll.offset(), 15);
        for _ in 0..10 {
            scroll.step();
        }
        assert_eq!(scroll.offset(), 20);
        assert!(scroll.at_bottom());
    }

    #[test]
    fn test_manual_scroll_leaves_and_rejoins_follow() {
        let mut scroll = ChatScroll::new();
        scroll.record_max(20);
        scroll.snap_to_bottom();

        scroll.scroll_up(SCROLL_SPEED);
        assert!(!scroll.is_following());
        assert_eq!(scroll.offset(), 17);

        // Not following: stepping does not move.
        scroll.step();
        assert_eq!(scroll.offset(), 17);

        scroll.scroll_down(SCROLL_SPEED);
        assert!(scroll.is_following());
        assert!(scroll.at_bottom());
    }

    #[test]
    fn test_follow_latest_resumes_animation() {
        let mut scroll = ChatScroll::new();
        scroll.record_max(10);
        scroll.snap_to_bottom();
        scroll.scroll_up(10);
        assert_eq!(scroll.offset(), 0);

        scroll.follow_latest();
        scroll.step();
        assert_eq!(scroll.offset(), 5);
    }

    #[test]
    fn test_newest_message_visible_after_follow() {
        let messages: Vec<Message> = (0..12)
            .map(|i| {
                if i % 2 == 0 {
                    Message::bot(format!("bot {i}"))
                } else {
                    Message::user(format!("user {i}"))
                }
            })
            .collect();
        let mut scroll = ChatScroll::new();
        let theme = Theme::default();

        // First render measures the content.
        render(MessageList::new(&messages, &scroll, &theme), 40, 10);
        for _ in 0..10 {
            scroll.step();
        }
        let screen = render(MessageList::new(&messages, &scroll, &theme), 40, 10);
        assert!(screen.contains("user 11"));
        assert!(!screen.contains("bot 0"));
    }

    #[test]
    fn test_tiny_area_does_not_panic() {
        let messages = sample();
        let scroll = ChatScroll::new();
        let theme = Theme::default();
        render(MessageList::new(&messages, &scroll, &theme), 4, 2);
    }
}

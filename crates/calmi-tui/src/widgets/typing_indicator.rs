//! Three-dot "typing" indicator shown while a reply is pending.

use ratatui::{
    layout::Alignment,
    style::Style,
    text::{Line, Span},
};

use crate::theme::Theme;

/// UI ticks each dot stays raised before the next one takes over.
pub const TICKS_PER_DOT: u64 = 2;

const DOT: &str = "●";

/// Which of the three dots is raised at `tick`. Exactly one is.
pub fn raised_dots(tick: u64) -> [bool; 3] {
    let active = (tick / TICKS_PER_DOT) % 3;
    [active == 0, active == 1, active == 2]
}

/// Lines for a left-aligned bubble holding the animated dots.
pub fn indicator_lines(tick: u64, theme: &Theme) -> Vec<Line<'static>> {
    let bubble = Style::default().bg(theme.bot_bubble);
    let mut spans = vec![Span::raw(" "), Span::styled(" ", bubble)];
    for (i, raised) in raised_dots(tick).into_iter().enumerate() {
        let fg = if raised { theme.bot_text } else { theme.muted };
        spans.push(Span::styled(DOT, bubble.fg(fg)));
        let gap = if i < 2 { " " } else { "" };
        spans.push(Span::styled(gap, bubble));
    }
    spans.push(Span::styled(" ", bubble));

    vec![Line::from(spans).alignment(Alignment::Left)]
}

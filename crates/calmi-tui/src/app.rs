//! Application state and update logic for the calmi TUI.

use crate::event::{Action, Event};
use crate::theme::Theme;
use crate::widgets::{ChatScroll, TextInputState, SCROLL_SPEED};
use calmi_engine::{ChatConfig, ChatSession, ConfigError};
use crossterm::event::MouseEventKind;
use std::time::{Duration, Instant};
use tracing::debug;

/// Lines moved by PageUp/PageDown.
const PAGE_LINES: usize = 10;

/// Animation frame interval.
const FRAME_INTERVAL: Duration = Duration::from_millis(crate::TICK_RATE_MS);

/// The chat view: conversation, composer and scroll position.
pub struct App {
    /// Conversation state and simulated responder.
    pub session: ChatSession,
    /// Text being composed.
    pub input: TextInputState,
    /// Message list scroll position.
    pub scroll: ChatScroll,
    /// Color palette.
    pub theme: Theme,
    /// Labels and copy shown by the view.
    pub config: ChatConfig,
    /// Animation counter, incremented per tick.
    pub tick: u64,
    /// Whether the app should exit.
    pub should_quit: bool,
    last_frame: Option<Instant>,
}

impl App {
    /// Create the view with a fresh session.
    pub fn new(config: ChatConfig, seed: Option<u64>) -> Result<Self, ConfigError> {
        let session = match seed {
            Some(seed) => ChatSession::with_seed(&config, seed)?,
            None => ChatSession::new(&config)?,
        };
        Ok(Self {
            session,
            input: TextInputState::new(),
            scroll: ChatScroll::new(),
            theme: Theme::default(),
            config,
            tick: 0,
            should_quit: false,
            last_frame: None,
        })
    }

    /// Create an app with a fixed seed for tests.
    #[cfg(test)]
    pub fn new_for_test() -> Self {
        Self::new(ChatConfig::default(), Some(7)).expect("default config is valid")
    }

    /// Whether the send control is enabled.
    pub fn can_send(&self) -> bool {
        self.session.can_submit(self.input.content())
    }

    /// Dispatch a terminal event.
    pub fn handle_event(&mut self, event: Event, now: Instant) {
        if !matches!(event, Event::Tick) {
            self.catch_up(now);
        }
        match event {
            Event::Key(key) => {
                let action = crate::event::key_to_action(key);
                self.handle_action(action, now);
            }
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::ScrollUp => self.handle_action(Action::ScrollUp, now),
                MouseEventKind::ScrollDown => self.handle_action(Action::ScrollDown, now),
                _ => {}
            },
            Event::Tick => self.tick(now),
            Event::Resize(_, _) => {}
        }
    }

    /// Apply a key action.
    pub fn handle_action(&mut self, action: Action, now: Instant) {
        match action {
            Action::Quit => self.quit(),
            Action::Submit => self.submit(now),
            Action::Newline => self.input.insert('\n'),
            Action::Insert(c) => self.input.insert(c),
            Action::Backspace => self.input.backspace(),
            Action::Delete => self.input.delete(),
            Action::Left => self.input.move_left(),
            Action::Right => self.input.move_right(),
            Action::Home => self.input.move_home(),
            Action::End => self.input.move_end(),
            Action::ScrollUp => self.scroll.scroll_up(SCROLL_SPEED),
            Action::ScrollDown => self.scroll.scroll_down(SCROLL_SPEED),
            Action::PageUp => self.scroll.scroll_up(PAGE_LINES),
            Action::PageDown => self.scroll.scroll_down(PAGE_LINES),
            Action::None => {}
        }
    }

    /// Send the composed text. Blank input or a pending reply leaves
    /// everything, including the input, untouched.
    pub fn submit(&mut self, now: Instant) {
        if self.session.submit(self.input.content(), now).is_accepted() {
            self.input.clear();
            self.on_conversation_changed();
        }
    }

    /// Fire the reply timer if it is due.
    pub fn poll(&mut self, now: Instant) {
        if self.session.poll(now).is_some() {
            self.on_conversation_changed();
        }
    }

    /// Advance animations and the reply timer.
    pub fn tick(&mut self, now: Instant) {
        self.tick = self.tick.wrapping_add(1);
        self.last_frame = Some(now);
        self.poll(now);
        self.scroll.step();
    }

    /// Run a frame if one is overdue.
    fn catch_up(&mut self, now: Instant) {
        let due = match self.last_frame {
            Some(last) => now.saturating_duration_since(last) >= FRAME_INTERVAL,
            None => true,
        };
        if due {
            self.tick(now);
        }
    }

    fn on_conversation_changed(&mut self) {
        debug!(len = self.session.len(), "conversation changed, following");
        self.scroll.follow_latest();
        self.scroll.step();
    }

    /// Leave the view. Cancels any reply still in flight.
    pub fn quit(&mut self) {
        self.session.dispose();
        self.should_quit = true;
    }
}

//! calmi-tui: Terminal chat view for calmi
//!
//! This crate provides the TUI layer, including:
//! - The chat screen (header, message bubbles, composer, footer)
//! - Keyboard and mouse handling
//! - The event loop that drives the simulated reply timer

mod app;
mod event;
mod screens;
#[cfg(test)]
mod test_utils;
mod text;
mod theme;
mod widgets;

use screens::Screen as ScreenTrait;

pub use app::App;
pub use calmi_engine;
pub use event::{key_to_action, Action, Event, EventHandler};
pub use theme::Theme;

use crossterm::{
    cursor::Show as ShowCursor,
    event::{
        DisableMouseCapture, EnableMouseCapture, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, stdout};
use std::time::Instant;
use tracing::{debug, info};

use calmi_engine::ChatConfig;

/// UI tick rate; drives the typing animation and smooth scrolling.
const TICK_RATE_MS: u64 = 100;

/// RAII guard for terminal state restoration.
struct TerminalGuard {
    keyboard_enhanced: bool,
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if self.keyboard_enhanced {
            let _ = execute!(stdout(), PopKeyboardEnhancementFlags);
        }
        let _ = disable_raw_mode();
        let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen, ShowCursor);
    }
}

/// Options for [`run_tui`] that are not part of [`ChatConfig`].
#[derive(Debug, Clone, Default)]
pub struct TuiOptions {
    /// Seed for reply selection; random when `None`.
    pub seed: Option<u64>,
    /// Color palette.
    pub theme: Theme,
}

/// Run the chat view until the user quits.
///
/// Sets up the terminal, runs the event loop, and restores the terminal on
/// exit.
pub async fn run_tui(
    config: ChatConfig,
    options: TuiOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new(config, options.seed)?;
    app.theme = options.theme;

    enable_raw_mode()?;
    // Shift+Enter is only distinguishable from Enter with the kitty protocol.
    let keyboard_enhanced = matches!(supports_keyboard_enhancement(), Ok(true));
    let _guard = TerminalGuard { keyboard_enhanced };

    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    if keyboard_enhanced {
        execute!(
            stdout,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
        )?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    info!(keyboard_enhanced, "chat view started");

    let mut events = EventHandler::new(TICK_RATE_MS);
    let result = run_loop(&mut terminal, &mut app, &mut events).await;

    // Unmounting: no reply may land after this point.
    app.quit();
    terminal.show_cursor()?;
    info!(messages = app.session.len(), "chat view closed");

    result
}

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &mut EventHandler,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| {
            let area = frame.area();
            screens::chat::ChatScreen.render(app, area, frame.buffer_mut());
        })?;

        let deadline = app.session.reply_deadline();
        tokio::select! {
            event = events.next() => match event {
                Some(event) => app.handle_event(event, Instant::now()),
                None => break,
            },
            () = sleep_until(deadline) => {
                debug!("reply deadline reached");
                app.poll(Instant::now());
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Wait for the reply deadline, or forever when none is armed.
async fn sleep_until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(tokio::time::Instant::from_std(deadline)).await,
        None => std::future::pending::<()>().await,
    }
}

/// Get the TUI version.
pub fn tui_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

//! Color palette for the chat view.

use ratatui::style::Color;

/// Theme color palette.
#[derive(Debug, Clone)]
pub struct Theme {
    // Backgrounds
    pub base: Color,
    pub surface: Color,

    // Foregrounds
    pub text: Color,
    pub subtext: Color,
    pub muted: Color,

    // Accents
    pub primary: Color,

    // Message bubbles
    pub user_bubble: Color,
    pub user_text: Color,
    pub bot_bubble: Color,
    pub bot_text: Color,

    // Borders
    pub border: Color,
    pub border_focused: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::calm()
    }
}

impl Theme {
    /// Soft blue on gray, the default.
    pub fn calm() -> Self {
        Self {
            base: Color::Rgb(249, 250, 251),    // #f9fafb
            surface: Color::Rgb(255, 255, 255), // #ffffff

            text: Color::Rgb(31, 41, 55),       // #1f2937
            subtext: Color::Rgb(75, 85, 99),    // #4b5563
            muted: Color::Rgb(107, 114, 128),   // #6b7280

            primary: Color::Rgb(91, 141, 239), // #5b8def

            user_bubble: Color::Rgb(91, 141, 239), // #5b8def
            user_text: Color::Rgb(255, 255, 255),
            bot_bubble: Color::Rgb(229, 231, 235), // #e5e7eb
            bot_text: Color::Rgb(31, 41, 55),

            border: Color::Rgb(209, 213, 219),         // #d1d5db
            border_focused: Color::Rgb(91, 141, 239), // #5b8def
        }
    }

    /// High contrast theme for accessibility.
    pub fn high_contrast() -> Self {
        Self {
            base: Color::Black,
            surface: Color::Rgb(20, 20, 20),

            text: Color::White,
            subtext: Color::Rgb(200, 200, 200),
            muted: Color::Rgb(150, 150, 150),

            primary: Color::Cyan,

            user_bubble: Color::Blue,
            user_text: Color::White,
            bot_bubble: Color::Rgb(40, 40, 40),
            bot_text: Color::White,

            border: Color::White,
            border_focused: Color::Cyan,
        }
    }
}

//! UI widgets for the chat view.
//!
//! This module provides:
//! - [`Header`] - Brand bar, title and subtitle
//! - [`MessageList`] - Scrollable bubbles with the typing indicator
//! - [`InputBar`] - Multi-line composer with a send control
//! - [`FooterHints`] - Keybinding hints and privacy note

mod footer_hints;
mod header;
mod input_bar;
mod message_list;
mod text_input;
mod typing_indicator;

pub use footer_hints::{chat_hints, FooterHints, FOOTER_HEIGHT};
pub use header::{Header, HEADER_HEIGHT};
pub use input_bar::InputBar;
pub use message_list::{ChatScroll, MessageList, SCROLL_SPEED};
pub use text_input::TextInputState;

//! Text layout utilities.
//!
//! - [`wrap_text`] - Word wrapping that keeps explicit line breaks
//! - [`visual_width`], [`pad_to_width`], [`truncate_to_width`] - Cell-width helpers

mod width;
mod wrap;

pub use width::{pad_to_width, truncate_to_width, visual_width};
pub use wrap::{max_line_width, wrap_text};

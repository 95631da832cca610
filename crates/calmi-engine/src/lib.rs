//! calmi-engine: Headless conversation state for calmi
//!
//! This crate provides everything the chat view needs that is not drawing:
//! - Message and sender types
//! - The conversation state holder and its submit/reply cycle
//! - The placeholder responder (canned replies and a one-shot timer)
//! - Configuration loading

pub mod catalog;
pub mod chat;
pub mod config;
pub mod session;
pub mod timer;

// Re-export commonly used types
pub use catalog::{CatalogError, ResponseCatalog, DEFAULT_RESPONSES};
pub use chat::{Message, Sender};
pub use config::{ChatConfig, ConfigError};
pub use session::{ChatSession, RejectReason, SubmitOutcome};
pub use timer::ReplyTimer;

/// Returns the engine version.
pub fn engine_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_version() {
        let version = engine_version();
        assert!(!version.is_empty());
        assert!(version.starts_with("0."));
    }
}

//! Configuration for the chat view.
//!
//! Every field is optional in the JSON file; missing fields take the
//! defaults below.

use crate::catalog::{CatalogError, ResponseCatalog, DEFAULT_RESPONSES};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Main configuration for calmi.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Bot message the conversation starts with.
    #[serde(default = "default_greeting")]
    pub greeting: String,

    /// Delay before the simulated reply, in milliseconds.
    #[serde(default = "default_reply_delay_ms")]
    pub reply_delay_ms: u64,

    /// Canned replies the simulator draws from.
    #[serde(default = "default_responses")]
    pub responses: Vec<String>,

    /// Display name of the bot.
    #[serde(default = "default_assistant_name")]
    pub assistant_name: String,

    /// Page title shown in the header.
    #[serde(default = "default_title")]
    pub title: String,

    /// Line under the title.
    #[serde(default = "default_subtitle")]
    pub subtitle: String,

    /// Muted line under the key hints; empty hides it.
    #[serde(default = "default_note")]
    pub note: String,

    /// Privacy line at the bottom of the view.
    #[serde(default = "default_disclaimer")]
    pub disclaimer: String,
}

fn default_greeting() -> String {
    "Hi there! I'm Calmi, your mental health companion. How are you feeling today?".into()
}

fn default_reply_delay_ms() -> u64 {
    1500
}

fn default_responses() -> Vec<String> {
    DEFAULT_RESPONSES.iter().map(|s| (*s).to_string()).collect()
}

fn default_assistant_name() -> String {
    "Calmi AI".into()
}

fn default_title() -> String {
    "Talk to Calmi AI".into()
}

fn default_subtitle() -> String {
    "Share your thoughts and feelings in a safe, judgment-free space.".into()
}

fn default_note() -> String {
    "Note: This is a placeholder for your custom Python AI bot.".into()
}

fn default_disclaimer() -> String {
    "Conversations are not stored or shared with third parties.".into()
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            greeting: default_greeting(),
            reply_delay_ms: default_reply_delay_ms(),
            responses: default_responses(),
            assistant_name: default_assistant_name(),
            title: default_title(),
            subtitle: default_subtitle(),
            note: default_note(),
            disclaimer: default_disclaimer(),
        }
    }
}

impl ChatConfig {
    /// Load configuration from a file and validate it.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
        let config: Self = serde_json::from_str(&content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self).map_err(ConfigError::Serialize)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ConfigError::Io)?;
        }
        std::fs::write(path, content).map_err(ConfigError::Io)
    }

    /// Check invariants that serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.catalog().map(|_| ())
    }

    /// Build the response catalog from `responses`.
    pub fn catalog(&self) -> Result<ResponseCatalog, ConfigError> {
        ResponseCatalog::new(self.responses.clone()).map_err(ConfigError::InvalidCatalog)
    }

    pub fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.reply_delay_ms)
    }
}

/// Errors that can occur when working with configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// I/O error reading or writing config.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing config JSON.
    #[error("Parse error: {0}")]
    Parse(#[source] serde_json::Error),

    /// Error serializing config to JSON.
    #[error("Serialize error: {0}")]
    Serialize(#[source] serde_json::Error),

    /// The configured responses cannot form a catalog.
    #[error("Invalid responses: {0}")]
    InvalidCatalog(#[source] CatalogError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ChatConfig::default();
        assert_eq!(config.reply_delay_ms, 1500);
        assert_eq!(config.reply_delay(), Duration::from_millis(1500));
        assert_eq!(config.responses.len(), 8);
        assert_eq!(config.assistant_name, "Calmi AI");
        assert_eq!(
            config.note,
            "Note: This is a placeholder for your custom Python AI bot."
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_note_can_be_blanked() {
        let config: ChatConfig = serde_json::from_str(r#"{"note": ""}"#).unwrap();
        assert!(config.note.is_empty());
        assert_eq!(config.disclaimer, ChatConfig::default().disclaimer);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: ChatConfig = serde_json::from_str(r#"{"reply_delay_ms": 10}"#).unwrap();
        assert_eq!(config.reply_delay_ms, 10);
        assert_eq!(config.greeting, ChatConfig::default().greeting);
        assert_eq!(config.responses.len(), 8);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("calmi.json");

        let config = ChatConfig {
            greeting: "Hello".into(),
            responses: vec!["a".into(), "b".into()],
            ..Default::default()
        };
        config.save(&path).unwrap();

        let loaded = ChatConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_rejects_empty_responses() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("calmi.json");
        std::fs::write(&path, r#"{"responses": []}"#).unwrap();

        let err = ChatConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidCatalog(CatalogError::Empty)));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = ChatConfig::load(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_load_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("calmi.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = ChatConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}

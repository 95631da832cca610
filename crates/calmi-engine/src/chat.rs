//! Chat message types.
//!
//! A conversation is an ordered list of [`Message`]s. Messages carry no id:
//! their identity is their position in the conversation.

use serde::{Deserialize, Serialize};

/// Who wrote a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    /// The person typing into the input box.
    User,
    /// The simulated companion.
    Bot,
}

impl Sender {
    /// Label shown above a message bubble.
    pub fn label<'a>(self, assistant_name: &'a str) -> &'a str {
        match self {
            Sender::User => "You",
            Sender::Bot => assistant_name,
        }
    }
}

/// A single message in a conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Message content, kept verbatim (including newlines).
    pub text: String,
    /// Author of the message.
    pub sender: Sender,
}

impl Message {
    /// Create a new user message.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sender: Sender::User,
        }
    }

    /// Create a new bot message.
    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sender: Sender::Bot,
        }
    }

    pub fn is_user(&self) -> bool {
        self.sender == Sender::User
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_set_sender() {
        assert_eq!(Message::user("hi").sender, Sender::User);
        assert_eq!(Message::bot("hello").sender, Sender::Bot);
        assert!(Message::user("hi").is_user());
        assert!(!Message::bot("hello").is_user());
    }

    #[test]
    fn test_sender_labels() {
        assert_eq!(Sender::User.label("Calmi AI"), "You");
        assert_eq!(Sender::Bot.label("Calmi AI"), "Calmi AI");
    }

    #[test]
    fn test_sender_serializes_lowercase() {
        let json = serde_json::to_string(&Message::bot("x")).unwrap();
        assert_eq!(json, r#"{"text":"x","sender":"bot"}"#);
    }
}

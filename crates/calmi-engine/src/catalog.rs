//! Canned replies used by the simulated responder.

use rand::seq::SliceRandom;
use rand::Rng;

/// Replies used when no catalog is configured.
pub const DEFAULT_RESPONSES: [&str; 8] = [
    "I understand how you're feeling. Would you like to talk more about that?",
    "It sounds like you're going through a challenging time. Remember that it's okay to feel this way.",
    "I'm here to listen. Could you tell me more about what's on your mind?",
    "Taking care of your mental health is important. How can I support you today?",
    "Have you tried any relaxation techniques when you feel this way?",
    "It's brave of you to share these feelings. Let's explore ways to help you feel better.",
    "Sometimes our thoughts can overwhelm us. Let's try to break them down together.",
    "Remember that you're not alone in these feelings. Many people experience similar struggles.",
];

/// A fixed, non-empty list of reply strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseCatalog {
    responses: Vec<String>,
}

impl ResponseCatalog {
    /// Build a catalog, rejecting an empty list.
    pub fn new(responses: Vec<String>) -> Result<Self, CatalogError> {
        if responses.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(Self { responses })
    }

    /// Uniform draw. Consecutive draws may repeat.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        // Non-empty by construction.
        self.responses
            .choose(rng)
            .map_or(DEFAULT_RESPONSES[0], String::as_str)
    }

    pub fn contains(&self, text: &str) -> bool {
        self.responses.iter().any(|r| r == text)
    }

    pub fn len(&self) -> usize {
        self.responses.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.responses.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.responses.iter().map(String::as_str)
    }
}

impl Default for ResponseCatalog {
    fn default() -> Self {
        Self {
            responses: DEFAULT_RESPONSES.iter().map(|s| (*s).to_string()).collect(),
        }
    }
}

/// Errors building a [`ResponseCatalog`].
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CatalogError {
    /// No reply strings were supplied.
    #[error("response catalog must contain at least one reply")]
    Empty,
}

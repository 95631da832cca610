//! Conversation state and the simulated reply cycle.
//!
//! [`ChatSession`] is the only writer of a conversation. It moves between two
//! states:
//!
//! ```text
//! Idle --submit(non-blank)--> AwaitingResponse --reply due--> Idle
//! ```
//!
//! Submissions that are blank, or arrive while a reply is pending, are
//! dropped without touching the conversation.

use crate::catalog::ResponseCatalog;
use crate::chat::Message;
use crate::config::{ChatConfig, ConfigError};
use crate::timer::ReplyTimer;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::{Duration, Instant};
use tracing::debug;

/// Result of [`ChatSession::submit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The text was appended and a reply is scheduled.
    Accepted,
    /// Nothing changed.
    Rejected(RejectReason),
}

impl SubmitOutcome {
    pub fn is_accepted(self) -> bool {
        self == SubmitOutcome::Accepted
    }
}

/// Why a submission was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// Empty or whitespace-only text.
    Blank,
    /// A reply is already in flight.
    Pending,
    /// The session has been disposed.
    Disposed,
}

/// Conversation state holder with a built-in placeholder responder.
#[derive(Debug)]
pub struct ChatSession {
    messages: Vec<Message>,
    pending: bool,
    timer: ReplyTimer,
    catalog: ResponseCatalog,
    reply_delay: Duration,
    rng: StdRng,
    disposed: bool,
}

impl ChatSession {
    /// Create a session seeded from OS entropy.
    pub fn new(config: &ChatConfig) -> Result<Self, ConfigError> {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Create a session with deterministic reply selection.
    pub fn with_seed(config: &ChatConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    /// Create a session using the given random source.
    pub fn with_rng(config: &ChatConfig, rng: StdRng) -> Result<Self, ConfigError> {
        let catalog = config.catalog()?;
        Ok(Self {
            messages: vec![Message::bot(config.greeting.clone())],
            pending: false,
            timer: ReplyTimer::new(),
            catalog,
            reply_delay: config.reply_delay(),
            rng,
            disposed: false,
        })
    }

    /// All messages, oldest first.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Always false: a session starts with its greeting.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// Whether a simulated reply is in flight.
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn catalog(&self) -> &ResponseCatalog {
        &self.catalog
    }

    pub fn reply_delay(&self) -> Duration {
        self.reply_delay
    }

    /// When the pending reply is due, if one is scheduled.
    pub fn reply_deadline(&self) -> Option<Instant> {
        self.timer.deadline()
    }

    /// Whether `submit(text, _)` would be accepted right now.
    pub fn can_submit(&self, text: &str) -> bool {
        self.check_submit(text).is_none()
    }

    fn check_submit(&self, text: &str) -> Option<RejectReason> {
        if self.disposed {
            Some(RejectReason::Disposed)
        } else if self.pending {
            Some(RejectReason::Pending)
        } else if text.trim().is_empty() {
            Some(RejectReason::Blank)
        } else {
            None
        }
    }

    /// Append a user message and schedule exactly one reply.
    ///
    /// The text is stored as typed; only the blank check trims it.
    pub fn submit(&mut self, text: &str, now: Instant) -> SubmitOutcome {
        if let Some(reason) = self.check_submit(text) {
            debug!(?reason, "submission dropped");
            return SubmitOutcome::Rejected(reason);
        }

        self.messages.push(Message::user(text));
        self.pending = true;
        self.timer.arm(now, self.reply_delay);
        debug!(
            len = self.messages.len(),
            delay_ms = self.reply_delay.as_millis(),
            "submission accepted, reply scheduled"
        );
        SubmitOutcome::Accepted
    }

    /// Append one canned bot reply and leave the pending state.
    ///
    /// Does nothing unless a reply is pending, so a bot message always
    /// follows a user message.
    pub fn complete_response(&mut self) -> Option<&Message> {
        if self.disposed || !self.pending {
            debug!(disposed = self.disposed, "no reply pending");
            return None;
        }
        let text = self.catalog.pick(&mut self.rng).to_string();
        self.timer.cancel();
        self.pending = false;
        self.messages.push(Message::bot(text));
        debug!(len = self.messages.len(), "reply appended");
        self.messages.last()
    }

    /// Drive the reply timer. Returns the reply if it was appended.
    pub fn poll(&mut self, now: Instant) -> Option<&Message> {
        if self.disposed || !self.timer.fire(now) {
            return None;
        }
        self.complete_response()
    }

    /// Cancel any outstanding reply. The session stops changing afterwards.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        debug!(cancelled_reply = self.timer.is_armed(), "session disposed");
        self.timer.cancel();
        self.disposed = true;
    }
}

impl Drop for ChatSession {
    fn drop(&mut self) {
        self.dispose();
    }
}

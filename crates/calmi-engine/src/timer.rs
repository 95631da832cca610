//! One-shot reply timer.
//!
//! The timer holds a deadline and nothing else. It is driven by whoever owns
//! it: the caller passes the current [`Instant`] to [`ReplyTimer::fire`], so
//! there is no background task to cancel and tests can use synthetic clocks.

use std::time::{Duration, Instant};

/// Cancellable one-shot deadline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplyTimer {
    deadline: Option<Instant>,
}

impl ReplyTimer {
    /// Create a disarmed timer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the timer to fire `delay` after `now`, replacing any prior deadline.
    pub fn arm(&mut self, now: Instant, delay: Duration) {
        self.deadline = Some(now + delay);
    }

    /// Disarm the timer. A no-op when it is not armed.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Returns `true` if the deadline has passed, disarming the timer.
    ///
    /// Returns `true` at most once per `arm`.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

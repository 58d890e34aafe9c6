//! Shake timing and reentrancy guard.
//!
//! A shake has two deadlines measured from when it starts: the answer is
//! revealed after `reveal_delay`, and the ball accepts a new question only
//! after `shake_duration`. Time is supplied by the caller so the guard is
//! deterministic. Shakes cannot be cancelled and overlapping shakes are
//! rejected, never queued.

use std::time::{Duration, Instant};

use tracing::trace;

use crate::config::BallConfig;
use crate::error::{SessionError, SessionResult};

/// When a started shake reveals and settles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShakeDeadlines {
    /// The answer may be shown from this instant.
    pub reveal_at: Instant,
    /// The ball accepts new questions from this instant.
    pub settles_at: Instant,
}

/// Busy flag with deadlines.
#[derive(Debug, Clone)]
pub struct ShakeGuard {
    shake_duration: Duration,
    reveal_delay: Duration,
    current: Option<ShakeDeadlines>,
}

impl ShakeGuard {
    /// Create an idle guard with the given timing.
    pub fn new(shake_duration: Duration, reveal_delay: Duration) -> Self {
        Self {
            shake_duration,
            reveal_delay,
            current: None,
        }
    }

    /// Create an idle guard from a session configuration.
    pub fn from_config(config: &BallConfig) -> Self {
        Self::new(config.shake_duration, config.reveal_delay)
    }

    /// Start a shake at `now`, or fail with [`SessionError::Busy`].
    pub fn start(&mut self, now: Instant) -> SessionResult<ShakeDeadlines> {
        if self.is_busy(now) {
            trace!("shake rejected, ball busy");
            return Err(SessionError::Busy);
        }
        let deadlines = ShakeDeadlines {
            reveal_at: now + self.reveal_delay,
            settles_at: now + self.shake_duration,
        };
        self.current = Some(deadlines);
        trace!(?deadlines, "shake started");
        Ok(deadlines)
    }

    /// Whether a shake is still in progress at `now`.
    pub fn is_busy(&self, now: Instant) -> bool {
        self.current.is_some_and(|d| now < d.settles_at)
    }

    /// Whether the current shake's answer may be shown at `now`.
    pub fn reveal_due(&self, now: Instant) -> bool {
        self.current.is_some_and(|d| now >= d.reveal_at)
    }

    /// Deadlines of the most recent shake.
    pub fn current(&self) -> Option<ShakeDeadlines> {
        self.current
    }
}

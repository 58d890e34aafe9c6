//! Magic 8-Ball session management.
//!
//! `Session` pairs an [`Oracle`] with a [`ShakeGuard`]. A front end calls
//! [`shake`](Session::shake) when the user asks, then
//! [`poll`](Session::poll) until the answer is revealed. The oracle is only
//! consulted at reveal time, so history and counters change exactly when
//! the answer appears.

use std::time::Instant;

use serde::Serialize;
use tracing::{debug, info};

use crate::config::BallConfig;
use crate::counters::Counters;
use crate::display::DisplayHint;
use crate::error::{InvalidQuestion, SessionResult};
use crate::history::HistoryLog;
use crate::oracle::{Answer, Oracle};
use crate::shake::{ShakeDeadlines, ShakeGuard};

/// What the front end shows once a shake settles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reveal {
    /// The normalized question, absent when the question was refused.
    pub question: Option<String>,
    /// The answer text or the validation message.
    pub text: String,
    /// How to colour the text.
    pub hint: DisplayHint,
}

impl Reveal {
    /// Whether this reveal is a validation message rather than an answer.
    pub fn is_error(&self) -> bool {
        self.hint == DisplayHint::Error
    }
}

impl From<Answer> for Reveal {
    fn from(answer: Answer) -> Self {
        Self {
            question: Some(answer.question),
            text: answer.text.to_string(),
            hint: answer.category.into(),
        }
    }
}

impl From<InvalidQuestion> for Reveal {
    fn from(reason: InvalidQuestion) -> Self {
        Self {
            question: None,
            text: reason.to_string(),
            hint: DisplayHint::Error,
        }
    }
}

/// An interactive Magic 8-Ball.
#[derive(Debug)]
pub struct Session {
    oracle: Oracle,
    guard: ShakeGuard,
    pending: Option<String>,
}

impl Session {
    /// Create a session from a configuration.
    pub fn new(config: BallConfig) -> SessionResult<Self> {
        config.validate()?;

        let oracle = match config.seed {
            Some(seed) => Oracle::seeded(seed),
            None => Oracle::from_entropy(),
        };
        info!(
            seed = ?config.seed,
            shake_ms = config.shake_duration.as_millis(),
            reveal_ms = config.reveal_delay.as_millis(),
            "magic 8-ball ready"
        );

        Ok(Self {
            oracle,
            guard: ShakeGuard::from_config(&config),
            pending: None,
        })
    }

    /// Get the oracle.
    pub fn oracle(&self) -> &Oracle {
        &self.oracle
    }

    /// Get the history log.
    pub fn history(&self) -> &HistoryLog {
        self.oracle.history()
    }

    /// Get the counters.
    pub fn counters(&self) -> &Counters {
        self.oracle.counters()
    }

    /// Whether a shake is in progress at `now`.
    pub fn is_busy(&self, now: Instant) -> bool {
        self.guard.is_busy(now)
    }

    /// Whether a question is waiting to be revealed.
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Start shaking the ball with a question.
    ///
    /// Fails with [`SessionError::Busy`](crate::SessionError::Busy) while a
    /// previous shake is in progress. A previous question whose reveal was
    /// never polled is answered first so it still reaches the history.
    pub fn shake(&mut self, input: &str, now: Instant) -> SessionResult<ShakeDeadlines> {
        if !self.guard.is_busy(now)
            && let Some(stale) = self.pending.take()
        {
            debug!("answering uncollected question before new shake");
            self.resolve(&stale);
        }

        let deadlines = self.guard.start(now)?;
        self.pending = Some(input.to_string());
        Ok(deadlines)
    }

    /// Reveal the pending answer once its deadline has passed.
    ///
    /// Returns `None` before the reveal deadline or when nothing is pending.
    pub fn poll(&mut self, now: Instant) -> Option<Reveal> {
        if !self.guard.reveal_due(now) {
            return None;
        }
        let input = self.pending.take()?;
        Some(self.resolve(&input))
    }

    /// Ask immediately, without any shake timing.
    pub fn ask_now(&mut self, input: &str) -> Result<Answer, InvalidQuestion> {
        self.oracle.ask(input)
    }

    fn resolve(&mut self, input: &str) -> Reveal {
        match self.oracle.ask(input) {
            Ok(answer) => answer.into(),
            Err(reason) => reason.into(),
        }
    }
}

//! Configuration for a Magic 8-Ball session.

use std::time::Duration;

use crate::error::{SessionError, SessionResult};

/// Default length of the shake animation.
pub const DEFAULT_SHAKE_DURATION: Duration = Duration::from_millis(1500);

/// Default delay between the start of a shake and the answer reveal.
pub const DEFAULT_REVEAL_DELAY: Duration = Duration::from_millis(1000);

/// Configuration for a session.
#[derive(Debug, Clone)]
pub struct BallConfig {
    /// RNG seed for reproducible draws. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// How long the ball stays busy after a shake starts.
    pub shake_duration: Duration,
    /// When, after the shake starts, the answer is revealed.
    pub reveal_delay: Duration,
}

impl Default for BallConfig {
    fn default() -> Self {
        Self {
            seed: None,
            shake_duration: DEFAULT_SHAKE_DURATION,
            reveal_delay: DEFAULT_REVEAL_DELAY,
        }
    }
}

impl BallConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the shake duration.
    pub fn with_shake_duration(mut self, duration: Duration) -> Self {
        self.shake_duration = duration;
        self
    }

    /// Set the reveal delay.
    pub fn with_reveal_delay(mut self, delay: Duration) -> Self {
        self.reveal_delay = delay;
        self
    }

    /// Check that the answer is revealed before the ball settles.
    pub fn validate(&self) -> SessionResult<()> {
        if self.reveal_delay > self.shake_duration {
            return Err(SessionError::Config(format!(
                "reveal delay ({} ms) exceeds shake duration ({} ms)",
                self.reveal_delay.as_millis(),
                self.shake_duration.as_millis()
            )));
        }
        Ok(())
    }
}

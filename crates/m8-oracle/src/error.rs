//! Error types for the Magic 8-Ball.

use thiserror::Error;

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// Why a question was refused before the ball was consulted.
///
/// The `Display` text is shown to the user verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidQuestion {
    /// Nothing but whitespace was entered.
    #[error("Please ask a question first!")]
    Empty,

    /// Fewer than three characters after trimming.
    #[error("Please ask a longer question!")]
    TooShort,
}

/// Errors raised by a [`Session`](crate::Session).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// A shake is still in progress; the input was dropped.
    #[error("the ball is still settling, wait a moment")]
    Busy,

    /// The session configuration is inconsistent.
    #[error("invalid configuration: {0}")]
    Config(String),
}

//! A Magic 8-Ball.
//!
//! Validates typed questions, draws a weighted random answer from twenty
//! classic replies (40% positive, 35% negative, 25% neutral), and keeps a
//! ten-entry history and running counters. Shake timing is modelled with
//! caller-supplied instants so front ends stay in control of the clock.

pub mod catalog;
pub mod command;
pub mod config;
pub mod counters;
pub mod display;
pub mod error;
pub mod history;
pub mod oracle;
pub mod session;
pub mod shake;

pub use catalog::{AnswerCatalog, Category};
pub use command::{Command, ExportFormat};
pub use config::BallConfig;
pub use counters::Counters;
pub use display::DisplayHint;
pub use error::{InvalidQuestion, SessionError, SessionResult};
pub use history::{HISTORY_CAPACITY, HistoryEntry, HistoryLog};
pub use oracle::{Answer, DrawResult, Oracle};
pub use session::{Reveal, Session};
pub use shake::{ShakeDeadlines, ShakeGuard};

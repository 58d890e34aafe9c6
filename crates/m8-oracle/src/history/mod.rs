//! Bounded, newest-first record of past questions and answers.

pub mod entry;
pub mod log;

pub use entry::HistoryEntry;
pub use log::{HISTORY_CAPACITY, HistoryLog};

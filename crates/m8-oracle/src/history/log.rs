//! History storage and export.

use std::collections::VecDeque;

use serde::Serialize;

use super::entry::HistoryEntry;

/// Maximum number of entries kept.
pub const HISTORY_CAPACITY: usize = 10;

/// The most recent answered questions, newest first.
#[derive(Debug, Clone, Default, Serialize)]
pub struct HistoryLog {
    entries: VecDeque<HistoryEntry>,
}

impl HistoryLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an entry at the front, dropping the oldest when full.
    pub fn record(&mut self, entry: HistoryEntry) {
        self.entries.push_front(entry);
        self.entries.truncate(HISTORY_CAPACITY);
    }

    /// Entries, newest first.
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    /// The most recent entry.
    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.front()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the log is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Export the log as markdown.
    pub fn export_markdown(&self) -> String {
        let mut out = String::from("# Magic 8-Ball History\n\n");
        for entry in &self.entries {
            out.push_str(&format!("**Q**: {}\n", entry.question));
            out.push_str(&format!("**A**: {} *({})*\n\n", entry.answer, entry.category));
        }
        out
    }

    /// Export the log as plain text.
    pub fn export_text(&self) -> String {
        let mut out = String::from("Magic 8-Ball History\n====================\n\n");
        for entry in &self.entries {
            out.push_str(&format!("Q: {}\n", entry.question));
            out.push_str(&format!("A: {} ({})\n\n", entry.answer, entry.category));
        }
        out
    }
}

impl<'a> IntoIterator for &'a HistoryLog {
    type Item = &'a HistoryEntry;
    type IntoIter = std::collections::vec_deque::Iter<'a, HistoryEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

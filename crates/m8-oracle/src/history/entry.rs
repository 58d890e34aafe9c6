//! History entry type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::Category;

/// One answered question. Entries are never modified after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// The normalized question.
    pub question: String,
    /// The answer text.
    pub answer: String,
    /// Category of the answer.
    pub category: Category,
    /// When the answer was revealed.
    pub timestamp: DateTime<Utc>,
}

impl HistoryEntry {
    /// Create an entry stamped with the current time.
    pub fn now(question: impl Into<String>, answer: impl Into<String>, category: Category) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            category,
            timestamp: Utc::now(),
        }
    }
}

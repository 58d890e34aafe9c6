//! Stateful oracle: one instance per ball.

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use tracing::debug;

use super::draw::draw;
use super::question::{normalize, validate};
use crate::catalog::{AnswerCatalog, Category};
use crate::counters::Counters;
use crate::error::InvalidQuestion;
use crate::history::{HistoryEntry, HistoryLog};

/// The result of a successful question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Answer {
    /// The normalized question.
    pub question: String,
    /// The answer text.
    #[serde(rename = "answer")]
    pub text: &'static str,
    /// Category of the answer.
    pub category: Category,
}

/// Owns the random source, the history log and the counters.
///
/// Only a successful [`ask`](Oracle::ask) changes state. Invalid questions
/// leave history and counters untouched.
#[derive(Debug)]
pub struct Oracle {
    catalog: &'static AnswerCatalog,
    history: HistoryLog,
    counters: Counters,
    rng: StdRng,
}

impl Oracle {
    /// Create an oracle with a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    /// Create an oracle seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Create an oracle around an existing random source.
    pub fn with_rng(rng: StdRng) -> Self {
        Self {
            catalog: AnswerCatalog::classic(),
            history: HistoryLog::new(),
            counters: Counters::new(),
            rng,
        }
    }

    /// Get the answer catalog.
    pub fn catalog(&self) -> &'static AnswerCatalog {
        self.catalog
    }

    /// Get the history log.
    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    /// Get the counters.
    pub fn counters(&self) -> &Counters {
        &self.counters
    }

    /// Ask the ball a question.
    ///
    /// The question is trimmed and normalized before it is recorded.
    pub fn ask(&mut self, question: &str) -> Result<Answer, InvalidQuestion> {
        if let Err(reason) = validate(question) {
            debug!(%reason, "question rejected");
            return Err(reason);
        }

        let question = normalize(question.trim());
        let drawn = draw(self.catalog, &mut self.rng);

        self.history
            .record(HistoryEntry::now(&question, drawn.text, drawn.category));
        self.counters.record(drawn.category);

        Ok(Answer {
            question,
            text: drawn.text,
            category: drawn.category,
        })
    }
}

//! Weighted answer draw.
//!
//! A first uniform roll in `[0, 1)` picks the category (40% positive, 35%
//! negative, 25% neutral); a second roll picks uniformly within that
//! category's list. Answers are therefore not equally likely: each positive
//! answer comes up 4% of the time, each negative 7%, each neutral 5%.

use rand::Rng;
use rand::rngs::StdRng;
use serde::Serialize;
use tracing::debug;

use crate::catalog::{AnswerCatalog, Category};

/// Rolls below this are positive.
pub const POSITIVE_UPPER: f64 = 0.40;

/// Rolls below this (and not positive) are negative; the rest are neutral.
pub const NEGATIVE_UPPER: f64 = 0.75;

/// One drawn answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DrawResult {
    /// The answer text.
    pub text: &'static str,
    /// The category it was drawn from.
    pub category: Category,
}

/// Map a uniform roll in `[0, 1)` to a category.
pub fn category_for_roll(roll: f64) -> Category {
    if roll < POSITIVE_UPPER {
        Category::Positive
    } else if roll < NEGATIVE_UPPER {
        Category::Negative
    } else {
        Category::Neutral
    }
}

/// Draw a weighted random answer from the catalog.
pub fn draw(catalog: &AnswerCatalog, rng: &mut StdRng) -> DrawResult {
    let roll: f64 = rng.random();
    let category = category_for_roll(roll);
    let answers = catalog.answers(category);
    let text = answers[rng.random_range(0..answers.len())];

    debug!(roll, %category, text, "drew answer");

    DrawResult { text, category }
}

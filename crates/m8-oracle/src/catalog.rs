//! The fixed answer catalog.
//!
//! Twenty classic answers split into three sentiment categories. The lists
//! never change at runtime and none of them is empty.

use serde::{Deserialize, Serialize};

/// Sentiment bucket of an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Affirmative answers.
    Positive,
    /// Discouraging answers.
    Negative,
    /// Non-committal answers.
    Neutral,
}

impl Category {
    /// All categories, in draw-bucket order.
    pub fn all() -> &'static [Self] {
        &[Self::Positive, Self::Negative, Self::Neutral]
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Positive => write!(f, "positive"),
            Self::Negative => write!(f, "negative"),
            Self::Neutral => write!(f, "neutral"),
        }
    }
}

/// Affirmative answers.
pub const POSITIVE_ANSWERS: &[&str] = &[
    "It is certain",
    "It is decidedly so",
    "Without a doubt",
    "Yes definitely",
    "You may rely on it",
    "As I see it, yes",
    "Most likely",
    "Outlook good",
    "Yes",
    "Signs point to yes",
];

/// Non-committal answers.
pub const NEUTRAL_ANSWERS: &[&str] = &[
    "Reply hazy, try again",
    "Ask again later",
    "Better not tell you now",
    "Cannot predict now",
    "Concentrate and ask again",
];

/// Discouraging answers.
pub const NEGATIVE_ANSWERS: &[&str] = &[
    "Don't count on it",
    "My reply is no",
    "My sources say no",
    "Outlook not so good",
    "Very doubtful",
];

/// Read-only view over the three answer lists.
#[derive(Debug, Clone, Copy)]
pub struct AnswerCatalog {
    positive: &'static [&'static str],
    negative: &'static [&'static str],
    neutral: &'static [&'static str],
}

/// The built-in catalog.
pub static CLASSIC: AnswerCatalog = AnswerCatalog {
    positive: POSITIVE_ANSWERS,
    negative: NEGATIVE_ANSWERS,
    neutral: NEUTRAL_ANSWERS,
};

impl AnswerCatalog {
    /// The built-in catalog.
    pub fn classic() -> &'static Self {
        &CLASSIC
    }

    /// Answers belonging to a category.
    pub fn answers(&self, category: Category) -> &'static [&'static str] {
        match category {
            Category::Positive => self.positive,
            Category::Negative => self.negative,
            Category::Neutral => self.neutral,
        }
    }

    /// Look up which category an answer text belongs to.
    pub fn category_of(&self, text: &str) -> Option<Category> {
        Category::all()
            .iter()
            .copied()
            .find(|c| self.answers(*c).contains(&text))
    }

    /// Total number of answers across all categories.
    pub fn len(&self) -> usize {
        self.positive.len() + self.negative.len() + self.neutral.len()
    }

    /// Always false for the built-in catalog.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

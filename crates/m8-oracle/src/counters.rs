//! Running tally of answers by category.

use serde::Serialize;

use crate::catalog::Category;

/// Answer counts. Only ever grow; `total` is always the sum of the three
/// category counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Counters {
    total: u64,
    positive: u64,
    negative: u64,
    neutral: u64,
}

impl Counters {
    /// Create zeroed counters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one answer.
    pub fn record(&mut self, category: Category) {
        self.total += 1;
        match category {
            Category::Positive => self.positive += 1,
            Category::Negative => self.negative += 1,
            Category::Neutral => self.neutral += 1,
        }
    }

    /// Number of answers given.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Number of answers in a category.
    pub fn count(&self, category: Category) -> u64 {
        match category {
            Category::Positive => self.positive,
            Category::Negative => self.negative,
            Category::Neutral => self.neutral,
        }
    }

    /// Fraction of answers in a category, 0.0 when nothing was asked yet.
    #[allow(clippy::cast_precision_loss)]
    pub fn share(&self, category: Category) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.count(category) as f64 / self.total as f64
    }
}

impl std::fmt::Display for Counters {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} asked, {} positive, {} negative, {} neutral",
            self.total, self.positive, self.negative, self.neutral
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero() {
        let c = Counters::new();
        assert_eq!(c.total(), 0);
        for cat in Category::all() {
            assert_eq!(c.count(*cat), 0);
            assert_eq!(c.share(*cat), 0.0);
        }
    }

    #[test]
    fn record_updates_total_and_bucket() {
        let mut c = Counters::new();
        c.record(Category::Positive);
        c.record(Category::Positive);
        c.record(Category::Neutral);
        assert_eq!(c.total(), 3);
        assert_eq!(c.count(Category::Positive), 2);
        assert_eq!(c.count(Category::Negative), 0);
        assert_eq!(c.count(Category::Neutral), 1);
    }

    #[test]
    fn total_is_sum_of_buckets() {
        let mut c = Counters::new();
        for (i, cat) in Category::all().iter().cycle().take(17).enumerate() {
            c.record(*cat);
            let sum: u64 = Category::all().iter().map(|k| c.count(*k)).sum();
            assert_eq!(c.total(), sum);
            assert_eq!(c.total(), i as u64 + 1);
        }
    }

    #[test]
    fn share_fraction() {
        let mut c = Counters::new();
        c.record(Category::Negative);
        c.record(Category::Positive);
        c.record(Category::Positive);
        c.record(Category::Positive);
        assert!((c.share(Category::Positive) - 0.75).abs() < f64::EPSILON);
        assert!((c.share(Category::Negative) - 0.25).abs() < f64::EPSILON);
    }

    #[test]
    fn serializes_all_counts() {
        let mut c = Counters::new();
        c.record(Category::Positive);
        c.record(Category::Neutral);
        let v = serde_json::to_value(c).unwrap();
        assert_eq!(v["total"], 2);
        assert_eq!(v["positive"], 1);
        assert_eq!(v["negative"], 0);
        assert_eq!(v["neutral"], 1);
    }

    #[test]
    fn display() {
        let mut c = Counters::new();
        c.record(Category::Neutral);
        assert_eq!(c.to_string(), "1 asked, 0 positive, 0 negative, 1 neutral");
    }
}

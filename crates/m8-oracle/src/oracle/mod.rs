//! The answer oracle.
//!
//! Validates questions, draws weighted answers, and keeps the history log
//! and counters that successful questions feed.

pub mod ask;
pub mod draw;
pub mod question;

pub use ask::{Answer, Oracle};
pub use draw::{DrawResult, category_for_roll, draw};
pub use question::{normalize, validate};

//! Terminal rendering of answers, history and counters.

use colored::{ColoredString, Colorize};
use comfy_table::{ContentArrangement, Table};

use m8_oracle::{Category, Counters, DisplayHint, HistoryLog};

/// Colour text with the palette colour for a hint.
pub fn paint(text: &str, hint: DisplayHint) -> ColoredString {
    let (r, g, b) = hint.rgb();
    text.truecolor(r, g, b).bold()
}

/// One-line live counter display.
pub fn counter_line(counters: &Counters) -> String {
    format!(
        "  Asked: {} | {} {} | {} {}",
        counters.total(),
        "Positive:".dimmed(),
        counters.count(Category::Positive),
        "Negative:".dimmed(),
        counters.count(Category::Negative),
    )
}

/// History as a table, newest first.
pub fn history_table(history: &HistoryLog) -> String {
    if history.is_empty() {
        return "  No questions asked yet.".to_string();
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "Question", "Answer"]);
    for (i, entry) in history.iter().enumerate() {
        table.add_row(vec![
            (i + 1).to_string(),
            entry.question.clone(),
            paint(&entry.answer, entry.category.into()).to_string(),
        ]);
    }
    table.to_string()
}

/// Counters as a table with percentages.
pub fn stats_table(counters: &Counters) -> String {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Category", "Count", "Share"]);
    for category in Category::all() {
        table.add_row(vec![
            category.to_string(),
            counters.count(*category).to_string(),
            format!("{:.1}%", counters.share(*category) * 100.0),
        ]);
    }
    table.add_row(vec![
        "total".to_string(),
        counters.total().to_string(),
        String::new(),
    ]);
    table.to_string()
}

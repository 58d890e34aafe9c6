use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use rand::SeedableRng;
use rand::rngs::StdRng;

use m8_oracle::oracle::draw;
use m8_oracle::{AnswerCatalog, Category, Counters};

fn expected_share(category: Category) -> f64 {
    match category {
        Category::Positive => 0.40,
        Category::Negative => 0.35,
        Category::Neutral => 0.25,
    }
}

pub fn run(draws: u64, seed: u64) -> Result<(), String> {
    if draws == 0 {
        return Err("draws must be at least 1".into());
    }

    let catalog = AnswerCatalog::classic();
    let mut rng = StdRng::seed_from_u64(seed);
    let mut counters = Counters::new();
    for _ in 0..draws {
        counters.record(draw(catalog, &mut rng).category);
    }

    println!(
        "  {} {}",
        "Sample".bold(),
        format!("({draws} draws, seed={seed})").dimmed()
    );

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Category", "Count", "Share", "Expected"]);
    for category in Category::all() {
        table.add_row(vec![
            category.to_string(),
            counters.count(*category).to_string(),
            format!("{:.2}%", counters.share(*category) * 100.0),
            format!("{:.2}%", expected_share(*category) * 100.0),
        ]);
    }
    println!("{table}");

    Ok(())
}

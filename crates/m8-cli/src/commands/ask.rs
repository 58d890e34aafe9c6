use m8_oracle::{BallConfig, DisplayHint};

use crate::render::paint;

pub fn run(question: &str, seed: Option<u64>, json: bool) -> Result<(), String> {
    let mut config = BallConfig::default();
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }
    let mut session = super::open_session(config)?;

    let answer = session.ask_now(question).map_err(|e| e.to_string())?;

    if json {
        let out = serde_json::to_string_pretty(&answer).map_err(|e| e.to_string())?;
        println!("{out}");
    } else {
        println!("  {}", answer.question);
        println!("  {}", paint(answer.text, DisplayHint::from(answer.category)));
    }

    Ok(())
}

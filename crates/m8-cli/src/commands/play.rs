use std::io::{self, BufRead, Write};
use std::thread;
use std::time::{Duration, Instant};

use colored::Colorize;
use tracing::debug;

use m8_oracle::{BallConfig, Command, ExportFormat, Session};

use crate::render::{counter_line, history_table, paint, stats_table};

const FRAME: Duration = Duration::from_millis(90);
const FRAMES: &[&str] = &["( 8 )  ", " ( 8 ) ", "  ( 8 )", " ( 8 ) "];

pub fn run(seed: Option<u64>, shake_ms: u64, reveal_ms: u64) -> Result<(), String> {
    let mut config = BallConfig::default()
        .with_shake_duration(Duration::from_millis(shake_ms))
        .with_reveal_delay(Duration::from_millis(reveal_ms));
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }
    let mut session = super::open_session(config)?;

    println!("  {} Magic 8-Ball", "Starting".bold());
    println!("  Ask a yes/no question. Type 'help' for commands, 'quit' to exit.\n");

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("? ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        match Command::parse(line.trim_end_matches(['\r', '\n'])) {
            Command::Quit => {
                println!("Goodbye!");
                break;
            }
            Command::Help => println!("{HELP}\n"),
            Command::History => println!("{}\n", history_table(session.history())),
            Command::Stats => println!("{}\n", stats_table(session.counters())),
            Command::Export(ExportFormat::Markdown) => {
                println!("{}", session.history().export_markdown());
            }
            Command::Export(ExportFormat::Text) => {
                println!("{}", session.history().export_text());
            }
            Command::Ask(question) => ask_with_animation(&mut session, &question)?,
        }
    }

    Ok(())
}

fn ask_with_animation(session: &mut Session, question: &str) -> Result<(), String> {
    let deadlines = match session.shake(question, Instant::now()) {
        Ok(d) => d,
        Err(e) => {
            debug!(question, "input dropped, {e}");
            println!("{}\n", e.to_string().yellow());
            return Ok(());
        }
    };

    animate_until(deadlines.reveal_at)?;

    let Some(reveal) = session.poll(Instant::now()) else {
        return Err("the answer was not revealed".to_string());
    };

    println!("  {}\n", paint(&reveal.text, reveal.hint));
    if !reveal.is_error() {
        println!("{}\n", counter_line(session.counters()));
    }
    Ok(())
}

fn animate_until(until: Instant) -> Result<(), String> {
    let mut frame = 0;
    let mut drawn = false;
    loop {
        let now = Instant::now();
        if now >= until {
            break;
        }
        print!("\r  {} shaking...", FRAMES[frame % FRAMES.len()]);
        io::stdout().flush().map_err(|e| e.to_string())?;
        drawn = true;
        thread::sleep(FRAME.min(until - now));
        frame += 1;
    }
    if drawn {
        print!("\r{}\r", " ".repeat(24));
    }
    Ok(())
}

const HELP: &str = "\
Magic 8-Ball Commands:
  <question>                    Shake the ball and ask
  history                       Show the last 10 answers
  stats                         Show answer counts
  export [markdown|text]        Print the history
  help                          Show this help
  quit                          Exit";

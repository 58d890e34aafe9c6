//! CLI frontend for the Magic 8-Ball.

mod commands;
mod render;

use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "m8",
    about = "Magic 8-Ball: ask a yes/no question and shake for an answer",
    version,
    propagate_version = true
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ask a single question and print the answer
    Ask {
        /// The question (words are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        question: Vec<String>,

        /// RNG seed for a reproducible answer
        #[arg(short, long)]
        seed: Option<u64>,

        /// Print the answer as JSON
        #[arg(long)]
        json: bool,
    },

    /// Start an interactive session with shake animation
    Play {
        /// RNG seed for reproducible answers
        #[arg(short, long)]
        seed: Option<u64>,

        /// Length of the shake in milliseconds
        #[arg(long, default_value = "1500")]
        shake_ms: u64,

        /// Delay before the answer is revealed, in milliseconds
        #[arg(long, default_value = "1000")]
        reveal_ms: u64,
    },

    /// Draw many answers and report the category split
    Sample {
        /// Number of draws
        #[arg(short, long, default_value = "100000")]
        draws: u64,

        /// RNG seed for a reproducible sample
        #[arg(short, long, default_value = "42")]
        seed: u64,
    },
}

fn main() {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Ask {
            question,
            seed,
            json,
        } => commands::ask::run(&question.join(" "), seed, json),
        Commands::Play {
            seed,
            shake_ms,
            reveal_ms,
        } => commands::play::run(seed, shake_ms, reveal_ms),
        Commands::Sample { draws, seed } => commands::sample::run(draws, seed),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

//! Mastermind - CLI
//!
//! Code-breaking game with TUI and CLI modes. Guess the hidden 4-color code
//! and watch exact matches reveal their positions.

use anyhow::Result;
use clap::{Parser, Subcommand};
use mastermind::{
    commands::{ScoreConfig, run_score, run_simple},
    output::print_score_result,
};

#[derive(Parser)]
#[command(
    name = "mastermind",
    about = "Mastermind code-breaking game with frequency-capped scoring and position reveal",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Seed for the secret generator (reproducible games)
    #[arg(short, long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default - full game board)
    Play,

    /// Simple CLI mode (line-based play without TUI)
    Simple,

    /// Score one guess against a known secret
    Score {
        /// The secret code, e.g. "red blue green yellow", "rbgy", or "1234"
        secret: String,

        /// The guess to score against it
        guess: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(cli.seed),
        Commands::Simple => run_simple(cli.seed).map_err(|e| anyhow::anyhow!(e)),
        Commands::Score { secret, guess } => run_score_command(&secret, &guess),
    }
}

fn run_score_command(secret: &str, guess: &str) -> Result<()> {
    let config = ScoreConfig::new(secret.to_string(), guess.to_string());
    let result = run_score(&config).map_err(|e| anyhow::anyhow!(e))?;

    print_score_result(&result);
    Ok(())
}

fn run_play_command(seed: Option<u64>) -> Result<()> {
    use mastermind::interactive::{App, run_tui};

    let app = App::new(seed);
    run_tui(app)
}

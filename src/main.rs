//! Number Guessing Game - CLI
//!
//! Interactive guessing game with hints and per-difficulty high scores.

use anyhow::Result;
use clap::{Parser, Subcommand};
use guessing_game::{
    commands::{PlayConfig, run_play, show_scores},
    core::Difficulty,
    service::HighScoreService,
    storage::{DEFAULT_SCORES_PATH, JsonFileStore},
};
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "guessing_game",
    about = "Guess the secret number between 1 and 100 in as few attempts as you can",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// High-score file location
    #[arg(
        short = 'f',
        long,
        global = true,
        env = "GUESSING_GAME_SCORES",
        default_value = DEFAULT_SCORES_PATH
    )]
    scores_file: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactively (default)
    Play {
        /// Difficulty for every round: easy, medium, hard (or 1/2/3). Asks each round if omitted
        #[arg(short, long)]
        difficulty: Option<Difficulty>,
    },

    /// Show the high-score table
    Scores,
}

fn init_logging() {
    env_logger::init();
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    log::debug!("using high-score file {}", cli.scores_file.display());
    let service = HighScoreService::new(JsonFileStore::new(cli.scores_file));

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play { difficulty: None });

    match command {
        Commands::Play { difficulty } => run_play_command(&service, difficulty),
        Commands::Scores => show_scores(&service, &mut io::stdout().lock()),
    }
}

fn run_play_command(
    service: &HighScoreService<JsonFileStore>,
    difficulty: Option<Difficulty>,
) -> Result<()> {
    let config = PlayConfig::new(difficulty);
    let mut input = io::stdin().lock();
    let mut out = io::stdout().lock();
    run_play(service, &config, &mut rand::rng(), &mut input, &mut out)
}

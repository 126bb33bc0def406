//! Core domain types for the guessing game
//!
//! Difficulty tiers, the per-round guess engine, and high-score records.
//! Nothing in here touches the filesystem or the terminal.

mod difficulty;
mod highscore;
mod round;

pub use difficulty::{CHANCES_EASY, CHANCES_HARD, CHANCES_MEDIUM, Difficulty, DifficultyError};
pub use highscore::{HighScoreRecord, HighScoreTable};
pub use round::{
    Comparison, DEFAULT_MAX, DEFAULT_MIN, HINT_WIDTH_MAX, HINT_WIDTH_MIN, Hint, Parity, Round,
    RoundError,
};

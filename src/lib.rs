//! Number Guessing Game
//!
//! Guess a secret number within a limited number of attempts, with one hint per
//! round, and keep the best result for each difficulty on disk.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use guessing_game::core::{Comparison, Difficulty, Round};
//! use guessing_game::service::HighScoreService;
//! use guessing_game::storage::JsonFileStore;
//!
//! let round = Round::new(1, 100, 42, Difficulty::Hard.attempt_budget()).unwrap();
//! assert_eq!(round.compare(60), Comparison::Lower);
//!
//! let service = HighScoreService::new(JsonFileStore::new("data/highscores.json"));
//! let updated = service.submit_result(Difficulty::Hard, 2, 8.4).unwrap();
//! println!("high score updated: {updated}");
//! ```

// Core domain types
pub mod core;

// High-score persistence
pub mod storage;

// High-score update policy
pub mod service;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

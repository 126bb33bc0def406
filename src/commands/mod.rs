//! Command implementations

pub mod play;
pub mod scores;

pub use play::{PlayConfig, RoundOutcome, play_round, run_play};
pub use scores::show_scores;

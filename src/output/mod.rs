//! Terminal output formatting
//!
//! Display utilities for rounds, hints and the high-score table.

pub mod display;
pub mod formatters;

pub use display::{write_banner, write_high_scores};

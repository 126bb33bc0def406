//! Formatting utilities for terminal output

use chrono::{DateTime, Utc};

/// Timestamp layout used in the high-score table
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Placeholder for table cells with no data
pub const EMPTY_CELL: &str = "—";

/// Format seconds with two decimals, e.g. `12.50s`
#[must_use]
pub fn format_duration(seconds: f64) -> String {
    format!("{seconds:.2}s")
}

/// Format when a record was achieved, or the empty placeholder
#[must_use]
pub fn format_achieved_at(achieved_at: Option<DateTime<Utc>>) -> String {
    achieved_at.map_or_else(|| EMPTY_CELL.to_string(), |t| t.format(TIME_FORMAT).to_string())
}

/// `1 attempt`, `3 attempts`
#[must_use]
pub fn pluralize_attempts(attempts: u32) -> String {
    if attempts == 1 {
        "1 attempt".to_string()
    } else {
        format!("{attempts} attempts")
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar showing how many of a round's chances are left
#[must_use]
pub fn chances_bar(remaining: u32, budget: u32) -> String {
    create_progress_bar(f64::from(remaining), f64::from(budget), budget as usize)
}

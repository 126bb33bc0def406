//! Display functions for rounds and high scores
//!
//! Everything writes to a caller-supplied writer so the interactive loop can be
//! driven against in-memory buffers.

use super::formatters::{
    EMPTY_CELL, chances_bar, format_achieved_at, format_duration, pluralize_attempts,
};
use crate::core::{Difficulty, HighScoreRecord, HighScoreTable, Hint, Round};
use colored::Colorize;
use std::io::{self, Write};
use std::time::Duration;

/// Print the game banner
///
/// # Errors
/// Returns any error from the writer.
pub fn write_banner<W: Write>(out: &mut W, round_min: i64, round_max: i64) -> io::Result<()> {
    writeln!(out, "\n{}", "═".repeat(60).bright_cyan())?;
    writeln!(
        out,
        " 🎯 {} ",
        format!("Number Guessing Game: guess a number between {round_min} and {round_max}")
            .bright_white()
            .bold()
    )?;
    writeln!(out, "{}\n", "═".repeat(60).bright_cyan())
}

/// Print the difficulty menu
///
/// # Errors
/// Returns any error from the writer.
pub fn write_difficulty_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Select difficulty:")?;
    for difficulty in Difficulty::ALL {
        writeln!(
            out,
            "\t{}. {} ({} chances)",
            difficulty.menu_number(),
            difficulty,
            difficulty.attempt_budget()
        )?;
    }
    writeln!(out)
}

/// Print the stored best for a difficulty, if there is one
///
/// # Errors
/// Returns any error from the writer.
pub fn write_best<W: Write>(out: &mut W, record: &HighScoreRecord) -> io::Result<()> {
    if record.is_empty() {
        return Ok(());
    }
    writeln!(
        out,
        "\n🏆 {} high score: {}, {} ({})",
        record.level.to_string().bright_yellow().bold(),
        pluralize_attempts(record.attempts),
        format_duration(record.duration_seconds),
        format_achieved_at(record.achieved_at)
    )
}

/// Print the header shown before the first guess
///
/// # Errors
/// Returns any error from the writer.
pub fn write_round_intro<W: Write>(
    out: &mut W,
    difficulty: Difficulty,
    round: &Round,
) -> io::Result<()> {
    writeln!(
        out,
        "\nLevel: {} • Chances: {} • Range: {}..{}\n",
        difficulty.to_string().bright_cyan().bold(),
        round.attempt_budget(),
        round.min(),
        round.max()
    )?;
    writeln!(out, "Hint available once: enter -1 or 'hint' to use it.\n")
}

/// Print the attempt prompt prefix with a bar of remaining chances
///
/// # Errors
/// Returns any error from the writer.
pub fn write_attempt_prompt<W: Write>(out: &mut W, attempt: u32, budget: u32) -> io::Result<()> {
    let remaining = budget.saturating_sub(attempt - 1);
    write!(
        out,
        "{} Attempt {attempt}/{budget}: ",
        chances_bar(remaining, budget).green()
    )?;
    out.flush()
}

/// Print a hint
///
/// # Errors
/// Returns any error from the writer.
pub fn write_hint<W: Write>(out: &mut W, hint: &Hint) -> io::Result<()> {
    writeln!(
        out,
        "\n💡 Hint: {}; {}\n",
        format!("{}..{}", hint.low, hint.high).bright_yellow(),
        hint.parity
    )
}

/// Print the win banner
///
/// # Errors
/// Returns any error from the writer.
pub fn write_win<W: Write>(out: &mut W, attempts: u32, duration: Duration) -> io::Result<()> {
    writeln!(
        out,
        "\n{}",
        format!(
            "✅ Correct in {}. Time: {}",
            pluralize_attempts(attempts),
            format_duration(duration.as_secs_f64())
        )
        .green()
        .bold()
    )
}

/// Print the loss banner
///
/// # Errors
/// Returns any error from the writer.
pub fn write_loss<W: Write>(out: &mut W, secret: i64, duration: Duration) -> io::Result<()> {
    writeln!(
        out,
        "\n{}",
        format!(
            "💀 Out of chances. Number was {secret}. Time: {}",
            format_duration(duration.as_secs_f64())
        )
        .red()
        .bold()
    )
}

/// Print the full high-score table, one row per difficulty
///
/// # Errors
/// Returns any error from the writer.
pub fn write_high_scores<W: Write>(out: &mut W, table: &HighScoreTable) -> io::Result<()> {
    writeln!(out, "\n{}", "─".repeat(60).cyan())?;
    writeln!(
        out,
        "{}",
        format!(
            "{:<8}  {:>8}  {:>11}  {}",
            "LEVEL", "ATTEMPTS", "DURATION(s)", "DATE"
        )
        .bright_cyan()
        .bold()
    )?;
    writeln!(out, "{}", "─".repeat(60).cyan())?;

    for record in table {
        let level = format!("{:<8}", record.level.name());
        if record.is_empty() {
            writeln!(
                out,
                "{}  {EMPTY_CELL:>8}  {EMPTY_CELL:>11}  {EMPTY_CELL}",
                level.bright_black()
            )?;
        } else {
            writeln!(
                out,
                "{}  {:>8}  {:>11.2}  {}",
                level.bold(),
                record.attempts,
                record.duration_seconds,
                format_achieved_at(record.achieved_at)
            )?;
        }
    }
    writeln!(out)
}

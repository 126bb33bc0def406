//! Interactive play mode
//!
//! Text-based game loop: pick a difficulty, guess within the attempt budget,
//! and record winning rounds through the high-score service.

use crate::core::{Comparison, DEFAULT_MAX, DEFAULT_MIN, Difficulty, Round};
use crate::output::display::{
    write_attempt_prompt, write_banner, write_best, write_difficulty_menu, write_high_scores,
    write_hint, write_loss, write_round_intro, write_win,
};
use crate::service::HighScoreService;
use crate::storage::HighScoreStore;
use anyhow::Result;
use log::warn;
use rand::Rng;
use std::io::{BufRead, Write};
use std::time::{Duration, Instant};

/// Configuration for a play session
pub struct PlayConfig {
    /// Fixed difficulty for every round; `None` shows the menu each round
    pub difficulty: Option<Difficulty>,
    pub min: i64,
    pub max: i64,
}

impl PlayConfig {
    #[must_use]
    pub const fn new(difficulty: Option<Difficulty>) -> Self {
        Self {
            difficulty,
            min: DEFAULT_MIN,
            max: DEFAULT_MAX,
        }
    }
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self::new(None)
    }
}

/// How a single round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    Won { attempts: u32, duration: Duration },
    Lost { secret: i64, duration: Duration },
    /// Player typed `quit` or input ended
    Quit,
}

/// Run the interactive game until the player stops
///
/// # Errors
///
/// Returns an error if reading input or writing output fails, or if the
/// configured range is empty. High-score problems are reported to the player
/// and do not end the session.
pub fn run_play<S, G, R, W>(
    service: &HighScoreService<S>,
    config: &PlayConfig,
    rng: &mut G,
    input: &mut R,
    out: &mut W,
) -> Result<()>
where
    S: HighScoreStore,
    G: Rng + ?Sized,
    R: BufRead,
    W: Write,
{
    write_banner(out, config.min, config.max)?;

    loop {
        let difficulty = match config.difficulty {
            Some(difficulty) => difficulty,
            None => match select_difficulty(input, out)? {
                Some(difficulty) => difficulty,
                None => return farewell(out),
            },
        };

        let budget = difficulty.attempt_budget();
        let round = Round::random(config.min, config.max, budget, &mut *rng)?;

        match service.get() {
            Ok(table) => write_best(out, &table.record(difficulty))?,
            Err(e) => {
                warn!("could not read high scores: {e}");
                writeln!(out, "! High scores unavailable: {e}")?;
            }
        }

        write_round_intro(out, difficulty, &round)?;

        match play_round(&round, input, out)? {
            RoundOutcome::Won { attempts, duration } => {
                write_win(out, attempts, duration)?;
                match service.submit_result(difficulty, attempts, duration.as_secs_f64()) {
                    Ok(true) => writeln!(out, "🥇 High score updated.")?,
                    Ok(false) => {}
                    Err(e) => {
                        warn!("high score not saved: {e}");
                        writeln!(out, "! High score save failed: {e}")?;
                    }
                }
            }
            RoundOutcome::Lost { secret, duration } => write_loss(out, secret, duration)?,
            RoundOutcome::Quit => return farewell(out),
        }

        if let Ok(table) = service.get() {
            write_high_scores(out, &table)?;
        }

        match get_user_input(input, out, "Play again? (y/n)")? {
            Some(answer) if matches!(answer.to_lowercase().as_str(), "y" | "yes") => {
                writeln!(out)?;
            }
            _ => return farewell(out),
        }
    }
}

/// Play one round against `round`, reading guesses line by line
///
/// Invalid input, out-of-range numbers and hint requests do not use up an
/// attempt. The hint can be taken once per round.
///
/// # Errors
///
/// Returns an error on I/O failure.
pub fn play_round<R: BufRead, W: Write>(
    round: &Round,
    input: &mut R,
    out: &mut W,
) -> Result<RoundOutcome> {
    let start = Instant::now();
    let budget = round.attempt_budget();
    let mut hint_used = false;
    let mut attempt = 1;

    while attempt <= budget {
        write_attempt_prompt(out, attempt, budget)?;
        let Some(line) = read_line(input)? else {
            writeln!(out)?;
            return Ok(RoundOutcome::Quit);
        };

        match line.to_lowercase().as_str() {
            "quit" | "q" | "exit" => return Ok(RoundOutcome::Quit),
            "-1" | "hint" | "h" => {
                if hint_used {
                    writeln!(out, "Hint already used.\n")?;
                } else {
                    write_hint(out, &round.hint())?;
                    hint_used = true;
                }
                continue;
            }
            _ => {}
        }

        let Ok(guess) = line.parse::<i64>() else {
            writeln!(out, "Invalid input, please enter a number.\n")?;
            continue;
        };

        if !round.is_in_range(guess) {
            writeln!(
                out,
                "Enter a number between {} and {}.\n",
                round.min(),
                round.max()
            )?;
            continue;
        }

        match round.compare(guess) {
            Comparison::Match => {
                return Ok(RoundOutcome::Won {
                    attempts: attempt,
                    duration: start.elapsed(),
                });
            }
            Comparison::Higher => writeln!(out, "Higher\n")?,
            Comparison::Lower => writeln!(out, "Lower\n")?,
        }
        attempt += 1;
    }

    Ok(RoundOutcome::Lost {
        secret: round.secret(),
        duration: start.elapsed(),
    })
}

/// Show the menu until a valid choice is made; `None` if input ends or the
/// player quits
fn select_difficulty<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
) -> Result<Option<Difficulty>> {
    loop {
        write_difficulty_menu(out)?;
        let Some(choice) = get_user_input(input, out, "Enter choice (1/2/3)")? else {
            return Ok(None);
        };
        if matches!(choice.to_lowercase().as_str(), "quit" | "q" | "exit") {
            return Ok(None);
        }

        match choice.parse::<Difficulty>() {
            Ok(difficulty) => return Ok(Some(difficulty)),
            Err(e) => writeln!(out, "Invalid choice ({e}), try again.\n")?,
        }
    }
}

fn farewell<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "\n👋 Bye!\n")?;
    Ok(())
}

/// Get user input with a prompt; `None` once input is exhausted
fn get_user_input<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> Result<Option<String>> {
    write!(out, "{prompt}: ")?;
    out.flush()?;
    read_line(input)
}

fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

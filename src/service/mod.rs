//! High-score update policy
//!
//! Results rank by attempts first and duration second, lower is better.
//! Every accepted improvement is written through to the store immediately.

use crate::core::{Difficulty, HighScoreRecord, HighScoreTable};
use crate::storage::{HighScoreStore, StoreError};
use chrono::Utc;
use log::{debug, info};

/// Error type for submitting a result
#[derive(Debug, thiserror::Error)]
pub enum ScoreError {
    #[error("invalid result: {attempts} attempts in {duration_seconds}s")]
    InvalidResult { attempts: u32, duration_seconds: f64 },

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Check whether a new result beats the current record
///
/// An empty record is beaten by anything. Otherwise fewer attempts wins, and on
/// equal attempts a strictly shorter duration wins.
///
/// # Examples
/// ```
/// use guessing_game::core::{Difficulty, HighScoreRecord};
/// use guessing_game::service::is_improvement;
///
/// let empty = HighScoreRecord::empty(Difficulty::Easy);
/// assert!(is_improvement(&empty, 9, 300.0));
/// ```
#[must_use]
pub fn is_improvement(current: &HighScoreRecord, attempts: u32, duration_seconds: f64) -> bool {
    current.is_empty()
        || attempts < current.attempts
        || (attempts == current.attempts && duration_seconds < current.duration_seconds)
}

/// Owns the store and applies the update policy
#[derive(Debug)]
pub struct HighScoreService<S: HighScoreStore> {
    store: S,
}

impl<S: HighScoreStore> HighScoreService<S> {
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Access the underlying store
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Current table with every difficulty present
    ///
    /// # Errors
    /// Propagates `StoreError` from the store.
    pub fn get(&self) -> Result<HighScoreTable, StoreError> {
        self.store.load()
    }

    /// Record a winning round if it beats the stored best for `difficulty`
    ///
    /// Returns `true` when the record was replaced and saved. The new record is
    /// stamped with the time of this call.
    ///
    /// # Errors
    /// `ScoreError::InvalidResult` for zero attempts or a negative/non-finite
    /// duration. `ScoreError::Store` if loading or saving fails; nothing is
    /// kept in memory in that case.
    pub fn submit_result(
        &self,
        difficulty: Difficulty,
        attempts: u32,
        duration_seconds: f64,
    ) -> Result<bool, ScoreError> {
        if attempts == 0 || !duration_seconds.is_finite() || duration_seconds < 0.0 {
            return Err(ScoreError::InvalidResult {
                attempts,
                duration_seconds,
            });
        }

        let mut table = self.get()?;
        let current = table.record(difficulty);

        if !is_improvement(&current, attempts, duration_seconds) {
            debug!(
                "{difficulty}: {attempts} attempts in {duration_seconds:.2}s does not beat {} in {:.2}s",
                current.attempts, current.duration_seconds
            );
            return Ok(false);
        }

        table.insert(HighScoreRecord {
            level: difficulty,
            attempts,
            duration_seconds,
            achieved_at: Some(Utc::now()),
        });
        self.store.save(&table)?;

        info!("new {difficulty} high score: {attempts} attempts in {duration_seconds:.2}s");
        Ok(true)
    }
}

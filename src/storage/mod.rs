//! Durable storage for the high-score table
//!
//! The table is always read and written as a whole.

mod json_file;

pub use json_file::JsonFileStore;

use crate::core::HighScoreTable;
use std::io;
use std::path::PathBuf;

/// Default location of the high-score file, relative to the working directory
pub const DEFAULT_SCORES_PATH: &str = "data/highscores.json";

/// Error type for store operations
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("cannot decode high scores in {}: {reason}", path.display())]
    Decode { path: PathBuf, reason: String },

    #[error("cannot encode high scores: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Whole-table persistence for high scores
pub trait HighScoreStore {
    /// Load the table, with an empty record for every difficulty not yet stored
    ///
    /// Implementations must return exactly one record per difficulty, keyed by
    /// its own level. Callers rely on this and do not fill gaps themselves.
    ///
    /// # Errors
    /// `StoreError::Decode` if stored data exists but is malformed,
    /// `StoreError::Io` if it cannot be read.
    fn load(&self) -> Result<HighScoreTable, StoreError>;

    /// Replace the stored table with `table`
    ///
    /// # Errors
    /// `StoreError::Io` or `StoreError::Encode` on failure. The previously
    /// stored table must survive a failed save.
    fn save(&self, table: &HighScoreTable) -> Result<(), StoreError>;
}

//! JSON file backed high-score store
//!
//! Saves go through a sibling `.tmp` file that is synced and then renamed over
//! the real file, so an interrupted save leaves the previous table intact.

use super::{HighScoreStore, StoreError};
use crate::core::HighScoreTable;
use log::debug;
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// High-score store writing a single pretty-printed JSON document
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store for `path`. Nothing is touched until the first load or save.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Scratch file written before the atomic rename
    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map_or_else(|| OsString::from("highscores"), OsString::from);
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn decode_error(&self, reason: impl Into<String>) -> StoreError {
        StoreError::Decode {
            path: self.path.clone(),
            reason: reason.into(),
        }
    }
}

impl HighScoreStore for JsonFileStore {
    fn load(&self) -> Result<HighScoreTable, StoreError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("no high-score file at {}, starting empty", self.path.display());
                return Ok(HighScoreTable::empty());
            }
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        // A literal `null` document means nothing has been recorded
        let parsed: Option<HighScoreTable> =
            serde_json::from_slice(&bytes).map_err(|e| self.decode_error(e.to_string()))?;
        let mut table = parsed.unwrap_or_default();

        if let Some(bad) = table.iter().find(|record| !record.is_valid()) {
            return Err(self.decode_error(format!(
                "invalid duration {} for {}",
                bad.duration_seconds, bad.level
            )));
        }

        table.fill_missing();
        debug!("loaded high scores from {}", self.path.display());
        Ok(table)
    }

    fn save(&self, table: &HighScoreTable) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| StoreError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let contents = serde_json::to_vec_pretty(table)?;
        let temp = self.temp_path();

        if let Err(source) = write_synced(&temp, &contents) {
            let _ = fs::remove_file(&temp);
            return Err(StoreError::Io { path: temp, source });
        }

        if let Err(source) = fs::rename(&temp, &self.path) {
            let _ = fs::remove_file(&temp);
            return Err(StoreError::Io {
                path: self.path.clone(),
                source,
            });
        }

        debug!("saved high scores to {}", self.path.display());
        Ok(())
    }
}

/// Write `contents` to `path` and flush it to disk
fn write_synced(path: &Path, contents: &[u8]) -> io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(contents)?;
    file.sync_all()
}

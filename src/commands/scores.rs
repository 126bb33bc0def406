//! High-score listing command

use crate::output::write_high_scores;
use crate::service::HighScoreService;
use crate::storage::HighScoreStore;
use anyhow::{Context, Result};
use std::io::Write;

/// Print the current high-score table
///
/// # Errors
///
/// Returns an error if the table cannot be loaded or written out.
pub fn show_scores<S: HighScoreStore, W: Write>(
    service: &HighScoreService<S>,
    out: &mut W,
) -> Result<()> {
    let table = service.get().context("failed to load high scores")?;
    write_high_scores(out, &table)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Difficulty;
    use crate::storage::JsonFileStore;
    use tempfile::tempdir;

    #[test]
    fn lists_recorded_scores() {
        colored::control::set_override(false);
        let dir = tempdir().unwrap();
        let service = HighScoreService::new(JsonFileStore::new(dir.path().join("scores.json")));
        service.submit_result(Difficulty::Easy, 6, 30.0).unwrap();

        let mut out = Vec::new();
        show_scores(&service, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        let easy = text.lines().find(|l| l.starts_with("Easy")).unwrap();
        assert!(easy.contains('6'));
        assert!(easy.contains("30.00"));
    }

    #[test]
    fn corrupted_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("scores.json");
        std::fs::write(&path, b"[1, 2").unwrap();
        let service = HighScoreService::new(JsonFileStore::new(&path));

        let mut out = Vec::new();
        let err = show_scores(&service, &mut out).unwrap_err();
        assert!(err.to_string().contains("failed to load high scores"));
    }
}

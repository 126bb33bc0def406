//! High-score records and the per-difficulty table

use super::Difficulty;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Best result for one difficulty
///
/// `attempts == 0` marks a difficulty with no record yet. A winning round always
/// takes at least one attempt, so the sentinel never collides with a real result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighScoreRecord {
    pub level: Difficulty,
    pub attempts: u32,
    pub duration_seconds: f64,
    #[serde(default)]
    pub achieved_at: Option<DateTime<Utc>>,
}

impl HighScoreRecord {
    /// Placeholder for a difficulty nobody has won yet
    #[must_use]
    pub const fn empty(level: Difficulty) -> Self {
        Self {
            level,
            attempts: 0,
            duration_seconds: 0.0,
            achieved_at: None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.attempts == 0
    }

    /// Check the stored values are ones a real game could have produced
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.duration_seconds.is_finite() && self.duration_seconds >= 0.0
    }
}

/// Mapping from each difficulty to its best result
///
/// Serialized as a JSON object keyed by difficulty tag. Tables handed out by the
/// store always hold exactly one record per difficulty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HighScoreTable(BTreeMap<Difficulty, HighScoreRecord>);

impl HighScoreTable {
    /// A table with an empty record for every difficulty
    #[must_use]
    pub fn empty() -> Self {
        let mut table = Self(BTreeMap::new());
        table.fill_missing();
        table
    }

    /// Insert empty records for absent difficulties and align each record's
    /// `level` with its key
    pub fn fill_missing(&mut self) {
        for difficulty in Difficulty::ALL {
            self.0
                .entry(difficulty)
                .and_modify(|record| record.level = difficulty)
                .or_insert_with(|| HighScoreRecord::empty(difficulty));
        }
    }

    /// Get the record for a difficulty (an empty one if absent)
    #[must_use]
    pub fn record(&self, difficulty: Difficulty) -> HighScoreRecord {
        self.0
            .get(&difficulty)
            .cloned()
            .unwrap_or_else(|| HighScoreRecord::empty(difficulty))
    }

    /// Replace the record for `record.level`
    pub fn insert(&mut self, record: HighScoreRecord) {
        self.0.insert(record.level, record);
    }

    /// Iterate records in difficulty order
    pub fn iter(&self) -> impl Iterator<Item = &HighScoreRecord> {
        self.0.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a HighScoreTable {
    type Item = &'a HighScoreRecord;
    type IntoIter = std::collections::btree_map::Values<'a, Difficulty, HighScoreRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.values()
    }
}

impl Default for HighScoreTable {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn won(level: Difficulty, attempts: u32, duration_seconds: f64) -> HighScoreRecord {
        HighScoreRecord {
            level,
            attempts,
            duration_seconds,
            achieved_at: Some(Utc.with_ymd_and_hms(2026, 10, 19, 9, 30, 0).unwrap()),
        }
    }

    #[test]
    fn empty_table_has_every_difficulty() {
        let table = HighScoreTable::empty();
        assert_eq!(table.len(), 3);
        for difficulty in Difficulty::ALL {
            let record = table.record(difficulty);
            assert!(record.is_empty());
            assert_eq!(record.level, difficulty);
            assert_eq!(record.achieved_at, None);
        }
    }

    #[test]
    fn fill_missing_keeps_existing_records() {
        let mut table = HighScoreTable(BTreeMap::new());
        table.insert(won(Difficulty::Hard, 2, 8.25));
        table.fill_missing();

        assert_eq!(table.len(), 3);
        assert_eq!(table.record(Difficulty::Hard).attempts, 2);
        assert!(table.record(Difficulty::Easy).is_empty());
    }

    #[test]
    fn fill_missing_aligns_level_with_key() {
        let mut inner = BTreeMap::new();
        inner.insert(Difficulty::Easy, won(Difficulty::Hard, 3, 1.0));
        let mut table = HighScoreTable(inner);
        table.fill_missing();

        assert_eq!(table.record(Difficulty::Easy).level, Difficulty::Easy);
        assert!(table.record(Difficulty::Hard).is_empty());
    }

    #[test]
    fn record_on_missing_key_is_empty() {
        let table = HighScoreTable(BTreeMap::new());
        assert!(table.record(Difficulty::Medium).is_empty());
    }

    #[test]
    fn insert_replaces_whole_record() {
        let mut table = HighScoreTable::empty();
        table.insert(won(Difficulty::Medium, 4, 12.0));
        table.insert(won(Difficulty::Medium, 3, 20.0));

        let record = table.record(Difficulty::Medium);
        assert_eq!(record.attempts, 3);
        assert!((record.duration_seconds - 20.0).abs() < f64::EPSILON);
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn validity_rejects_negative_or_nan_duration() {
        assert!(won(Difficulty::Easy, 1, 0.0).is_valid());
        assert!(!won(Difficulty::Easy, 1, -0.5).is_valid());
        assert!(!won(Difficulty::Easy, 1, f64::NAN).is_valid());
    }

    #[test]
    fn json_shape() {
        let mut table = HighScoreTable::empty();
        table.insert(won(Difficulty::Easy, 4, 12.5));

        let value = serde_json::to_value(&table).unwrap();
        assert_eq!(value["Easy"]["level"], "Easy");
        assert_eq!(value["Easy"]["attempts"], 4);
        assert_eq!(value["Easy"]["duration_seconds"], 12.5);
        assert_eq!(value["Easy"]["achieved_at"], "2026-10-19T09:30:00Z");
        assert!(value["Medium"]["achieved_at"].is_null());
    }

    #[test]
    fn parses_record_without_timestamp() {
        let json = r#"{"Hard": {"level": "Hard", "attempts": 0, "duration_seconds": 0}}"#;
        let table: HighScoreTable = serde_json::from_str(json).unwrap();
        assert!(table.record(Difficulty::Hard).is_empty());
    }
}

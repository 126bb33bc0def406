//! Difficulty levels and their attempt budgets

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Attempt budget for [`Difficulty::Easy`]
pub const CHANCES_EASY: u32 = 10;
/// Attempt budget for [`Difficulty::Medium`]
pub const CHANCES_MEDIUM: u32 = 5;
/// Attempt budget for [`Difficulty::Hard`]
pub const CHANCES_HARD: u32 = 3;

/// One of the three fixed difficulty tiers
///
/// Ordering follows the tiers (Easy < Medium < Hard), which is also the order
/// the high-score table is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// Error type for unrecognized difficulty tags
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DifficultyError {
    #[error("unknown difficulty '{0}', expected easy, medium or hard")]
    Invalid(String),
}

impl Difficulty {
    /// All difficulties in menu order
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Number of guesses a round at this difficulty allows
    #[inline]
    #[must_use]
    pub const fn attempt_budget(self) -> u32 {
        match self {
            Self::Easy => CHANCES_EASY,
            Self::Medium => CHANCES_MEDIUM,
            Self::Hard => CHANCES_HARD,
        }
    }

    /// Position in the difficulty menu (1-based)
    #[must_use]
    pub const fn menu_number(self) -> u8 {
        match self {
            Self::Easy => 1,
            Self::Medium => 2,
            Self::Hard => 3,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = DifficultyError;

    /// Parse a difficulty from its name (any case) or its menu number
    ///
    /// # Examples
    /// ```
    /// use guessing_game::core::Difficulty;
    ///
    /// assert_eq!("hard".parse::<Difficulty>().unwrap(), Difficulty::Hard);
    /// assert_eq!("2".parse::<Difficulty>().unwrap(), Difficulty::Medium);
    /// assert!("expert".parse::<Difficulty>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" | "1" => Ok(Self::Easy),
            "medium" | "2" => Ok(Self::Medium),
            "hard" | "3" => Ok(Self::Hard),
            _ => Err(DifficultyError::Invalid(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attempt_budgets() {
        assert_eq!(Difficulty::Easy.attempt_budget(), 10);
        assert_eq!(Difficulty::Medium.attempt_budget(), 5);
        assert_eq!(Difficulty::Hard.attempt_budget(), 3);
    }

    #[test]
    fn every_budget_is_positive() {
        for difficulty in Difficulty::ALL {
            assert!(difficulty.attempt_budget() >= 1, "{difficulty} has no attempts");
        }
    }

    #[test]
    fn parse_names_case_insensitive() {
        assert_eq!("Easy".parse::<Difficulty>(), Ok(Difficulty::Easy));
        assert_eq!("MEDIUM".parse::<Difficulty>(), Ok(Difficulty::Medium));
        assert_eq!(" hard ".parse::<Difficulty>(), Ok(Difficulty::Hard));
    }

    #[test]
    fn parse_menu_numbers() {
        for difficulty in Difficulty::ALL {
            let parsed: Difficulty = difficulty.menu_number().to_string().parse().unwrap();
            assert_eq!(parsed, difficulty);
        }
    }

    #[test]
    fn parse_unknown_fails_closed() {
        // No silent fallback to Medium
        assert_eq!(
            "expert".parse::<Difficulty>(),
            Err(DifficultyError::Invalid("expert".to_string()))
        );
        assert!("".parse::<Difficulty>().is_err());
        assert!("4".parse::<Difficulty>().is_err());
    }

    #[test]
    fn display_matches_serialized_tag() {
        for difficulty in Difficulty::ALL {
            let json = serde_json::to_string(&difficulty).unwrap();
            assert_eq!(json, format!("\"{difficulty}\""));
        }
    }

    #[test]
    fn ordering_follows_tiers() {
        assert!(Difficulty::Easy < Difficulty::Medium);
        assert!(Difficulty::Medium < Difficulty::Hard);
    }
}

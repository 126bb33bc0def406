//! Guess evaluation for a single round
//!
//! A [`Round`] owns the secret number, the valid range and the attempt budget.
//! It answers range checks and three-way comparisons, and draws randomized hint
//! intervals. It keeps no record of guesses or hint usage; that belongs to the
//! caller driving the round.

use rand::Rng;
use std::fmt;

/// Smallest number the game draws by default
pub const DEFAULT_MIN: i64 = 1;
/// Largest number the game draws by default
pub const DEFAULT_MAX: i64 = 100;

/// Narrowest hint band (before clamping to the range)
pub const HINT_WIDTH_MIN: i64 = 6;
/// Widest hint band
pub const HINT_WIDTH_MAX: i64 = 14;

/// Error type for invalid round parameters
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RoundError {
    #[error("empty range: minimum {min} is greater than maximum {max}")]
    EmptyRange { min: i64, max: i64 },
    #[error("secret {secret} is outside {min}..={max}")]
    SecretOutOfRange { secret: i64, min: i64, max: i64 },
    #[error("attempt budget must be at least 1")]
    ZeroBudget,
}

/// Outcome of comparing a guess against the secret
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Comparison {
    /// Guess is below the secret; aim higher
    Higher,
    /// Guess is above the secret; aim lower
    Lower,
    Match,
}

impl Comparison {
    #[inline]
    #[must_use]
    pub const fn is_match(self) -> bool {
        matches!(self, Self::Match)
    }
}

/// Parity of the secret, revealed alongside the hint interval
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parity {
    Even,
    Odd,
}

impl Parity {
    #[must_use]
    pub const fn of(n: i64) -> Self {
        if n % 2 == 0 { Self::Even } else { Self::Odd }
    }
}

impl fmt::Display for Parity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Even => f.write_str("even"),
            Self::Odd => f.write_str("odd"),
        }
    }
}

/// Everything a player learns from using their hint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hint {
    pub low: i64,
    pub high: i64,
    pub parity: Parity,
}

/// One playthrough: a fixed secret inside `min..=max` and an attempt budget
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    min: i64,
    max: i64,
    secret: i64,
    attempt_budget: u32,
}

impl Round {
    /// Create a round with a known secret
    ///
    /// # Errors
    /// Returns `RoundError` if the range is empty, the secret lies outside it,
    /// or the budget is zero.
    ///
    /// # Examples
    /// ```
    /// use guessing_game::core::{Comparison, Round};
    ///
    /// let round = Round::new(1, 100, 42, 5).unwrap();
    /// assert_eq!(round.compare(10), Comparison::Higher);
    /// assert_eq!(round.compare(42), Comparison::Match);
    ///
    /// assert!(Round::new(1, 100, 101, 5).is_err());
    /// ```
    pub const fn new(
        min: i64,
        max: i64,
        secret: i64,
        attempt_budget: u32,
    ) -> Result<Self, RoundError> {
        if min > max {
            return Err(RoundError::EmptyRange { min, max });
        }
        if secret < min || secret > max {
            return Err(RoundError::SecretOutOfRange { secret, min, max });
        }
        if attempt_budget == 0 {
            return Err(RoundError::ZeroBudget);
        }

        Ok(Self {
            min,
            max,
            secret,
            attempt_budget,
        })
    }

    /// Create a round with a secret drawn uniformly from `min..=max`
    ///
    /// # Errors
    /// Same conditions as [`Round::new`], minus the secret check.
    pub fn random<R: Rng + ?Sized>(
        min: i64,
        max: i64,
        attempt_budget: u32,
        rng: &mut R,
    ) -> Result<Self, RoundError> {
        if min > max {
            return Err(RoundError::EmptyRange { min, max });
        }
        Self::new(min, max, rng.random_range(min..=max), attempt_budget)
    }

    #[inline]
    #[must_use]
    pub const fn min(&self) -> i64 {
        self.min
    }

    #[inline]
    #[must_use]
    pub const fn max(&self) -> i64 {
        self.max
    }

    #[inline]
    #[must_use]
    pub const fn secret(&self) -> i64 {
        self.secret
    }

    #[inline]
    #[must_use]
    pub const fn attempt_budget(&self) -> u32 {
        self.attempt_budget
    }

    /// Check whether `n` is a legal guess for this round
    #[inline]
    #[must_use]
    pub const fn is_in_range(&self, n: i64) -> bool {
        n >= self.min && n <= self.max
    }

    /// Compare a guess against the secret
    #[must_use]
    pub const fn compare(&self, guess: i64) -> Comparison {
        if guess < self.secret {
            Comparison::Higher
        } else if guess > self.secret {
            Comparison::Lower
        } else {
            Comparison::Match
        }
    }

    #[must_use]
    pub const fn parity(&self) -> Parity {
        Parity::of(self.secret)
    }

    /// Draw a hint interval using the thread-local RNG
    #[must_use]
    pub fn hint_range(&self) -> (i64, i64) {
        self.hint_range_with(&mut rand::rng())
    }

    /// Draw a hint interval that contains the secret and stays inside the range
    ///
    /// # Algorithm
    /// 1. Pick a band width uniformly from `6..=14` and the secret's offset
    ///    inside the band uniformly from `1..width`
    /// 2. If the band starts below `min`, shift both ends up by the overflow;
    ///    if it then ends above `max`, shift both ends down by the overflow
    /// 3. For ranges narrower than the band, clamp the low end to `min`
    /// 4. Snap whichever end excludes the secret onto the secret
    ///
    /// Each call draws a fresh interval. The arithmetic runs in `i128`, so
    /// ranges touching `i64::MIN` or `i64::MAX` cannot overflow.
    pub fn hint_range_with<R: Rng + ?Sized>(&self, rng: &mut R) -> (i64, i64) {
        let width = rng.random_range(HINT_WIDTH_MIN..=HINT_WIDTH_MAX);
        let offset = rng.random_range(1..width);

        let (min, max, secret) = (
            i128::from(self.min),
            i128::from(self.max),
            i128::from(self.secret),
        );
        let mut low = secret - i128::from(offset);
        let mut high = low + i128::from(width);

        if low < min {
            let shift = min - low;
            low += shift;
            high += shift;
        }
        if high > max {
            let shift = high - max;
            low -= shift;
            high -= shift;
        }

        low = low.max(min);

        if low > secret {
            low = secret;
        }
        if high < secret {
            high = secret;
        }

        // Both ends now lie inside min..=max
        (low as i64, high as i64)
    }

    /// Draw a full hint (interval plus parity) using the thread-local RNG
    #[must_use]
    pub fn hint(&self) -> Hint {
        self.hint_with(&mut rand::rng())
    }

    pub fn hint_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Hint {
        let (low, high) = self.hint_range_with(rng);
        Hint {
            low,
            high,
            parity: self.parity(),
        }
    }
}

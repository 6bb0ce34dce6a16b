//! Difficulty levels.
//!
//! Difficulty fixes two things for a session: the wrong-guess budget and the
//! scoring multipliers (see `scoring`). The lowercase names double as the
//! wire form controllers receive from difficulty-selection buttons.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::GameError;

/// Game difficulty.
///
/// ```
/// use hangman_engine::core::Difficulty;
///
/// assert_eq!(Difficulty::Easy.max_wrong_guesses(), 8);
/// assert_eq!(Difficulty::Hard.max_wrong_guesses(), 6);
/// assert_eq!("medium".parse::<Difficulty>().unwrap(), Difficulty::Medium);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// The wrong-guess budget for this difficulty.
    ///
    /// A session is lost as soon as the number of distinct wrong letters
    /// reaches this value.
    #[must_use]
    pub const fn max_wrong_guesses(self) -> u8 {
        match self {
            Difficulty::Easy => 8,
            Difficulty::Medium => 7,
            Difficulty::Hard => 6,
        }
    }

    /// The lowercase name, as used in wire data and word-list file names.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    /// Iterate over all difficulties, easiest first.
    pub fn all() -> impl Iterator<Item = Difficulty> {
        [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard].into_iter()
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(GameError::UnknownDifficulty(other.to_string())),
        }
    }
}

//! Typed results the session hands back to the controller.
//!
//! Every mutating operation returns one of these. The controller renders
//! them into chat messages and keyboards; the engine never formats user
//! text beyond the masked word itself.

use serde::{Deserialize, Serialize};

/// Session lifecycle status.
///
/// Derived from the letter sets and the wrong-guess count, never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    /// Whether the game has ended.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Won | GameStatus::Lost)
    }
}

/// Follow-up prompt attached to a non-fatal wrong guess.
///
/// The offer order is fixed: the definition offer is emitted exactly once
/// per session (on the first wrong guess), hints afterwards while fewer
/// than two have been used, then nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Offer {
    /// Ask whether the player wants definitions and usage examples.
    Definition,
    /// Ask whether the player wants a random letter revealed.
    Hint,
}

/// Result of [`GameSession::guess_letter`](crate::session::GameSession::guess_letter).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GuessResult {
    /// The letter was already guessed correctly. No state change.
    AlreadyGuessed { letter: char },
    /// The letter was already tried and is wrong. No state change.
    AlreadyTried { letter: char },
    /// Correct guess, game continues.
    Continue { masked: String },
    /// Wrong guess, budget not yet exhausted.
    Wrong {
        /// Wrong guesses left before the game is lost.
        remaining: u8,
        masked: String,
        offer: Option<Offer>,
    },
    /// That guess completed the word.
    Won { word: String, points: i64 },
    /// That guess exhausted the wrong-guess budget.
    Lost { word: String, points: i64 },
}

/// Result of [`GameSession::request_hint`](crate::session::GameSession::request_hint).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum HintResult {
    /// A letter was revealed, game continues.
    Revealed { letter: char, masked: String },
    /// The reveal was the last distinct letter; the game is won.
    Won { word: String, points: i64 },
    /// Nothing left to reveal. Defensive; state unchanged.
    NoneAvailable,
}

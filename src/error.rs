//! Crate error type.
//!
//! Only caller-visible failures live here. Defensive anomalies (such as a
//! hint requested with nothing left to reveal) are ordinary result values on
//! the session operations, not errors.

use crate::core::{Difficulty, PlayerId};

/// Errors surfaced to the controller driving the engine.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// A guess that is not a single lowercase ASCII letter.
    #[error("invalid guess {input:?}: expected a single lowercase letter")]
    InvalidInput { input: char },

    /// An action attempted on a session that does not allow it
    /// (finished game, or `start` on a session already in play).
    #[error("action not allowed in the current game state")]
    InvalidState,

    /// The word source has no backing list for the requested difficulty.
    /// Fatal to session creation.
    #[error("no words available for {difficulty} difficulty")]
    WordSourceUnavailable { difficulty: Difficulty },

    /// A word violating the target-word invariant reached the engine.
    #[error("invalid word {word:?}: {reason}")]
    InvalidWord {
        word: String,
        reason: &'static str,
    },

    /// A difficulty name that is not `easy`, `medium`, or `hard`.
    #[error("unknown difficulty {0:?}")]
    UnknownDifficulty(String),

    /// An action routed to a player with no active game.
    #[error("no active game for {player}")]
    NoSession { player: PlayerId },
}

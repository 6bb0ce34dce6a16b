//! The game session state machine.
//!
//! `GameSession` owns all game rules for one player's active game. It is
//! driven by an outer controller that feeds it player actions and renders
//! the typed results; the session performs no I/O of its own.

mod game;
mod result;

pub use game::GameSession;
pub use result::{GameStatus, GuessResult, HintResult, Offer};

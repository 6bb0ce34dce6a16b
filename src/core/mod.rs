//! Core vocabulary types: players, difficulty, words, RNG.
//!
//! These are the building blocks the session and its collaborators share.
//! None of them perform I/O.

pub mod difficulty;
pub mod player;
pub mod rng;
pub mod word;

pub use difficulty::Difficulty;
pub use player::PlayerId;
pub use rng::{GameRng, GameRngState};
pub use word::TargetWord;

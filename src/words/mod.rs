//! Word supply.
//!
//! `WordSource` is the seam between the engine and wherever words actually
//! live (embedded lists, files, a database). The engine only ever draws one
//! uniform-random word per session from it.

pub mod embedded;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

use crate::core::{Difficulty, GameRng, TargetWord};
use crate::error::GameError;

/// Supplies the per-difficulty word lists games draw from.
///
/// `words_for` must return a non-empty list or fail with
/// `GameError::WordSourceUnavailable`.
pub trait WordSource {
    /// The backing list for a difficulty.
    fn words_for(&self, difficulty: Difficulty) -> Result<&[TargetWord], GameError>;

    /// Draw one word uniformly at random.
    fn draw(&self, difficulty: Difficulty, rng: &mut GameRng) -> Result<TargetWord, GameError> {
        let words = self.words_for(difficulty)?;
        rng.choose(words)
            .cloned()
            .ok_or(GameError::WordSourceUnavailable { difficulty })
    }
}

/// In-memory word source with one list per difficulty.
///
/// ```
/// use hangman_engine::core::{Difficulty, GameRng};
/// use hangman_engine::words::{StaticWordSource, WordSource};
///
/// let source = StaticWordSource::new()
///     .with_words(Difficulty::Easy, &["cat", "dog", "sun"]);
///
/// let mut rng = GameRng::new(7);
/// let word = source.draw(Difficulty::Easy, &mut rng).unwrap();
/// assert!(["cat", "dog", "sun"].contains(&word.as_str()));
///
/// assert!(source.draw(Difficulty::Hard, &mut rng).is_err());
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct StaticWordSource {
    lists: FxHashMap<Difficulty, Vec<TargetWord>>,
}

impl StaticWordSource {
    /// Create an empty source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A source backed by the built-in word lists.
    #[must_use]
    pub fn embedded() -> Self {
        Self::new()
            .with_words(Difficulty::Easy, embedded::EASY_WORDS)
            .with_words(Difficulty::Medium, embedded::MEDIUM_WORDS)
            .with_words(Difficulty::Hard, embedded::HARD_WORDS)
    }

    /// Add a list for a difficulty, skipping entries that fail the
    /// target-word invariant.
    #[must_use]
    pub fn with_words(mut self, difficulty: Difficulty, words: &[&str]) -> Self {
        let list = words
            .iter()
            .filter_map(|&w| TargetWord::new(w).ok())
            .collect();
        self.lists.insert(difficulty, list);
        self
    }

    /// Replace the list for a difficulty with already-validated words.
    pub fn insert(&mut self, difficulty: Difficulty, words: Vec<TargetWord>) {
        self.lists.insert(difficulty, words);
    }
}

impl WordSource for StaticWordSource {
    fn words_for(&self, difficulty: Difficulty) -> Result<&[TargetWord], GameError> {
        match self.lists.get(&difficulty) {
            Some(list) if !list.is_empty() => Ok(list),
            _ => Err(GameError::WordSourceUnavailable { difficulty }),
        }
    }
}

/// Parse a word-list file body: first whitespace token per line, entries
/// failing the target-word invariant skipped.
#[must_use]
pub fn parse_word_list(content: &str) -> Vec<TargetWord> {
    content
        .lines()
        .filter_map(|line| line.split_whitespace().next())
        .filter_map(|token| TargetWord::new(token).ok())
        .collect()
}

/// Load a word list from a file.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read.
pub fn load_words_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<TargetWord>> {
    Ok(parse_word_list(&fs::read_to_string(path)?))
}

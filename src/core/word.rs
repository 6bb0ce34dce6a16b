//! Target word representation.
//!
//! A `TargetWord` is validated at construction: ASCII lowercase alphabetic
//! and at least 3 letters long. Win detection and the word-length scoring
//! multiplier both work on the *distinct* letters of the word, so those are
//! first-class here alongside the masked rendering shown to the player.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::GameError;

/// Placeholder shown for unrevealed positions.
const MASK: char = '_';

/// A validated game word.
///
/// ```
/// use hangman_engine::core::TargetWord;
///
/// let word = TargetWord::new("cat").unwrap();
/// assert_eq!(word.as_str(), "cat");
/// assert_eq!(word.distinct_count(), 3);
///
/// // Mixed case is folded; anything else is rejected.
/// assert_eq!(TargetWord::new("Cat").unwrap().as_str(), "cat");
/// assert!(TargetWord::new("at").is_err());
/// assert!(TargetWord::new("c4t").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TargetWord {
    text: String,
}

impl TargetWord {
    /// Create a validated word, folding to lowercase first.
    ///
    /// # Errors
    ///
    /// Returns `GameError::InvalidWord` if the word is shorter than 3
    /// letters or contains anything other than ASCII letters.
    pub fn new(text: impl Into<String>) -> Result<Self, GameError> {
        let text: String = text.into().to_lowercase();

        if text.len() < 3 {
            return Err(GameError::InvalidWord {
                word: text,
                reason: "must be at least 3 letters",
            });
        }

        if !text.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(GameError::InvalidWord {
                word: text,
                reason: "must contain only ASCII letters",
            });
        }

        Ok(Self { text })
    }

    /// The word as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Number of letter positions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false: the invariant guarantees at least 3 letters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Whether the word contains the given letter.
    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        self.text.contains(letter)
    }

    /// The distinct letters of the word, in first-occurrence order.
    #[must_use]
    pub fn distinct_letters(&self) -> SmallVec<[char; 12]> {
        let mut seen = SmallVec::<[char; 12]>::new();
        for c in self.text.chars() {
            if !seen.contains(&c) {
                seen.push(c);
            }
        }
        seen
    }

    /// Number of distinct letters (drives the word-length multiplier).
    #[must_use]
    pub fn distinct_count(&self) -> usize {
        self.distinct_letters().len()
    }

    /// Distinct letters not yet in `revealed`, in first-occurrence order.
    ///
    /// This is the pool a hint draws from.
    #[must_use]
    pub fn unrevealed_letters(&self, revealed: &FxHashSet<char>) -> SmallVec<[char; 12]> {
        self.distinct_letters()
            .into_iter()
            .filter(|c| !revealed.contains(c))
            .collect()
    }

    /// Whether every distinct letter of the word is in `revealed`.
    #[must_use]
    pub fn is_fully_revealed(&self, revealed: &FxHashSet<char>) -> bool {
        self.text.chars().all(|c| revealed.contains(&c))
    }

    /// Masked rendering: revealed letters shown, the rest as `_`,
    /// positions joined with single spaces.
    ///
    /// ```
    /// use hangman_engine::core::TargetWord;
    /// use rustc_hash::FxHashSet;
    ///
    /// let word = TargetWord::new("cat").unwrap();
    /// let mut revealed = FxHashSet::default();
    /// revealed.insert('c');
    /// assert_eq!(word.masked(&revealed), "c _ _");
    /// ```
    #[must_use]
    pub fn masked(&self, revealed: &FxHashSet<char>) -> String {
        let mut out = String::with_capacity(self.text.len() * 2);
        for (i, c) in self.text.chars().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            out.push(if revealed.contains(&c) { c } else { MASK });
        }
        out
    }
}

impl TryFrom<String> for TargetWord {
    type Error = GameError;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        Self::new(text)
    }
}

impl From<TargetWord> for String {
    fn from(word: TargetWord) -> Self {
        word.text
    }
}

impl std::fmt::Display for TargetWord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

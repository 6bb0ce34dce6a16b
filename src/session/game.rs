//! The per-session state machine.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::core::{Difficulty, GameRng, TargetWord};
use crate::error::GameError;
use crate::scoring::{compute_points, Outcome};

use super::result::{GameStatus, GuessResult, HintResult, Offer};

/// One active game for one player.
///
/// The session encapsulates all game rules: guessed and wrong letter sets,
/// the wrong-guess budget, hint and definition bookkeeping, and the points
/// computed at game end. Each mutating operation returns a description of
/// what happened for the controller to render; the session itself performs
/// no I/O.
///
/// A finished session rejects further guesses and hints with
/// [`GameError::InvalidState`]; play continues only by replacing the
/// session wholesale (see `GameManager::play_again`).
///
/// ```
/// use hangman_engine::core::{Difficulty, GameRng, TargetWord};
/// use hangman_engine::session::{GameSession, GuessResult};
///
/// let word = TargetWord::new("cat").unwrap();
/// let mut session = GameSession::new(word, Difficulty::Medium, GameRng::new(42));
///
/// assert_eq!(session.start().unwrap(), "_ _ _");
/// assert_eq!(
///     session.guess_letter('c').unwrap(),
///     GuessResult::Continue { masked: "c _ _".to_string() },
/// );
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameSession {
    word: TargetWord,
    difficulty: Difficulty,
    guessed: FxHashSet<char>,
    wrong: FxHashSet<char>,
    wrong_guess_count: u8,
    hints_used: u8,
    definition_offered: bool,
    used_definition: bool,
    rng: GameRng,
}

impl GameSession {
    /// Create a fresh session for an already-drawn word.
    ///
    /// The word is drawn by the caller (see `WordSource::draw`) so the
    /// session stays free of collaborators. The RNG should be a fork
    /// dedicated to this session.
    #[must_use]
    pub fn new(word: TargetWord, difficulty: Difficulty, rng: GameRng) -> Self {
        Self {
            word,
            difficulty,
            guessed: FxHashSet::default(),
            wrong: FxHashSet::default(),
            wrong_guess_count: 0,
            hints_used: 0,
            definition_offered: false,
            used_definition: false,
            rng,
        }
    }

    /// The initial masked display.
    ///
    /// # Errors
    ///
    /// `GameError::InvalidState` if any guess, hint, or offer has already
    /// happened — a session is started once, right after creation.
    pub fn start(&self) -> Result<String, GameError> {
        if !self.is_fresh() {
            return Err(GameError::InvalidState);
        }
        Ok(self.masked_word())
    }

    fn is_fresh(&self) -> bool {
        self.guessed.is_empty()
            && self.wrong.is_empty()
            && self.hints_used == 0
            && !self.definition_offered
            && !self.used_definition
    }

    /// Guess a single letter.
    ///
    /// # Errors
    ///
    /// - `GameError::InvalidInput` for anything outside `a..=z`
    /// - `GameError::InvalidState` if the game is already over
    pub fn guess_letter(&mut self, letter: char) -> Result<GuessResult, GameError> {
        if !letter.is_ascii_lowercase() {
            return Err(GameError::InvalidInput { input: letter });
        }
        if self.status().is_terminal() {
            return Err(GameError::InvalidState);
        }

        if self.guessed.contains(&letter) {
            return Ok(GuessResult::AlreadyGuessed { letter });
        }
        if self.wrong.contains(&letter) {
            return Ok(GuessResult::AlreadyTried { letter });
        }

        if self.word.contains(letter) {
            self.guessed.insert(letter);
            debug!(%letter, masked = %self.masked_word(), "correct guess");

            if self.word.is_fully_revealed(&self.guessed) {
                return Ok(GuessResult::Won {
                    word: self.word.as_str().to_string(),
                    points: self.final_points(Outcome::Won),
                });
            }
            Ok(GuessResult::Continue {
                masked: self.masked_word(),
            })
        } else {
            self.wrong.insert(letter);
            self.wrong_guess_count += 1;
            debug!(%letter, remaining = self.remaining_guesses(), "wrong guess");

            if self.wrong_guess_count >= self.difficulty.max_wrong_guesses() {
                return Ok(GuessResult::Lost {
                    word: self.word.as_str().to_string(),
                    points: self.final_points(Outcome::Lost),
                });
            }
            let offer = self.next_offer();
            Ok(GuessResult::Wrong {
                remaining: self.remaining_guesses(),
                masked: self.masked_word(),
                offer,
            })
        }
    }

    /// The follow-up prompt for a survivable wrong guess.
    ///
    /// Strictly ordered: the definition offer is emitted exactly once per
    /// session (latched when emitted, whether or not the player responds),
    /// then hints while fewer than two have been used, then nothing.
    fn next_offer(&mut self) -> Option<Offer> {
        if !self.definition_offered {
            self.definition_offered = true;
            Some(Offer::Definition)
        } else if self.hints_used < 2 {
            Some(Offer::Hint)
        } else {
            None
        }
    }

    /// Reveal one unguessed letter, chosen uniformly among the distinct
    /// letters of the word not yet guessed.
    ///
    /// If the reveal exhausts the distinct unguessed letters the game is
    /// won on the spot, with the hint counted in the score.
    ///
    /// # Errors
    ///
    /// `GameError::InvalidState` if the game is already over.
    pub fn request_hint(&mut self) -> Result<HintResult, GameError> {
        if self.status().is_terminal() {
            return Err(GameError::InvalidState);
        }

        let available = self.word.unrevealed_letters(&self.guessed);
        let Some(&letter) = self.rng.choose(&available) else {
            warn!(word = %self.word, "hint requested with nothing left to reveal");
            return Ok(HintResult::NoneAvailable);
        };

        self.guessed.insert(letter);
        self.hints_used += 1;
        debug!(%letter, hints_used = self.hints_used, "hint revealed");

        if self.word.unrevealed_letters(&self.guessed).is_empty() {
            return Ok(HintResult::Won {
                word: self.word.as_str().to_string(),
                points: self.final_points(Outcome::Won),
            });
        }
        Ok(HintResult::Revealed {
            letter,
            masked: self.masked_word(),
        })
    }

    /// Record the player's answer to the definition offer.
    ///
    /// Accepting marks the definition path as taken; the actual dictionary
    /// call happens outside the session, and scoring is unaffected either
    /// way. Declining changes nothing.
    ///
    /// # Errors
    ///
    /// `GameError::InvalidState` if the game is already over.
    pub fn definition_response(&mut self, accepted: bool) -> Result<bool, GameError> {
        if self.status().is_terminal() {
            return Err(GameError::InvalidState);
        }
        if accepted {
            self.used_definition = true;
        }
        Ok(accepted)
    }

    /// Current status, derived from the letter sets and wrong-guess count.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        if self.word.is_fully_revealed(&self.guessed) {
            GameStatus::Won
        } else if self.wrong_guess_count >= self.difficulty.max_wrong_guesses() {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        }
    }

    /// Masked view of the word: guessed letters shown, the rest as `_`,
    /// positions joined with single spaces.
    #[must_use]
    pub fn masked_word(&self) -> String {
        self.word.masked(&self.guessed)
    }

    fn final_points(&self, outcome: Outcome) -> i64 {
        let points = compute_points(
            outcome,
            self.difficulty,
            self.hints_used,
            self.word.distinct_count(),
        );
        info!(word = %self.word, ?outcome, points, "game over");
        points
    }

    // === Accessors ===

    /// The target word.
    #[must_use]
    pub fn word(&self) -> &TargetWord {
        &self.word
    }

    /// The session difficulty.
    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Correctly guessed letters, hint reveals included.
    #[must_use]
    pub fn guessed_letters(&self) -> &FxHashSet<char> {
        &self.guessed
    }

    /// Letters tried that are not in the word.
    #[must_use]
    pub fn wrong_letters(&self) -> &FxHashSet<char> {
        &self.wrong
    }

    /// Number of wrong guesses so far.
    #[must_use]
    pub fn wrong_guess_count(&self) -> u8 {
        self.wrong_guess_count
    }

    /// Wrong guesses left before the game is lost.
    #[must_use]
    pub fn remaining_guesses(&self) -> u8 {
        self.difficulty
            .max_wrong_guesses()
            .saturating_sub(self.wrong_guess_count)
    }

    /// Hints used so far.
    #[must_use]
    pub fn hints_used(&self) -> u8 {
        self.hints_used
    }

    /// Whether the player accepted the definition offer this session.
    #[must_use]
    pub fn used_definition(&self) -> bool {
        self.used_definition
    }
}

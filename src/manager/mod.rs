//! Per-player game context.
//!
//! `GameManager` is the piece a chat controller drives directly: it keeps
//! one session per active player, draws words from the injected source,
//! settles points into the score store exactly once per finished game, and
//! performs the dictionary lookup when a player accepts the definition
//! offer. It owns no transport — the controller serializes actions per
//! player and renders the returned results.

use rustc_hash::FxHashMap;
use tracing::info;

use crate::core::{Difficulty, GameRng, PlayerId};
use crate::error::GameError;
use crate::lookup::{DefinitionLookup, WordDefinition};
use crate::session::{GameSession, GuessResult, HintResult};
use crate::store::{ScoreEntry, ScoreStore};
use crate::words::WordSource;

/// A player's active game plus the display name used for score records.
#[derive(Clone, Debug)]
struct PlayerGame {
    name: String,
    session: GameSession,
}

/// Controller-owned registry of active games and their collaborators.
///
/// ```
/// use hangman_engine::core::{Difficulty, GameRng, PlayerId};
/// use hangman_engine::lookup::StaticDefinitions;
/// use hangman_engine::manager::GameManager;
/// use hangman_engine::store::MemoryScoreStore;
/// use hangman_engine::words::StaticWordSource;
///
/// let mut manager = GameManager::new(
///     StaticWordSource::embedded(),
///     MemoryScoreStore::new(),
///     StaticDefinitions::new(),
///     GameRng::new(42),
/// );
///
/// let player = PlayerId::new(1);
/// let display = manager.start_game(player, "alice", Difficulty::Easy).unwrap();
/// assert!(display.contains('_'));
/// ```
#[derive(Debug)]
pub struct GameManager<W, S, D> {
    source: W,
    store: S,
    lookup: D,
    rng: GameRng,
    games: FxHashMap<PlayerId, PlayerGame>,
}

impl<W, S, D> GameManager<W, S, D>
where
    W: WordSource,
    S: ScoreStore,
    D: DefinitionLookup,
{
    /// Create a manager around the three collaborators.
    ///
    /// Pass `GameRng::from_entropy()` in production; tests pass explicit
    /// seeds. Every session gets its own fork of this generator.
    pub fn new(source: W, store: S, lookup: D, rng: GameRng) -> Self {
        Self {
            source,
            store,
            lookup,
            rng,
            games: FxHashMap::default(),
        }
    }

    /// Start a new game for a player, replacing any existing one.
    ///
    /// Returns the initial masked display.
    ///
    /// # Errors
    ///
    /// `GameError::WordSourceUnavailable` if the difficulty has no words.
    pub fn start_game(
        &mut self,
        player: PlayerId,
        name: impl Into<String>,
        difficulty: Difficulty,
    ) -> Result<String, GameError> {
        let word = self.source.draw(difficulty, &mut self.rng)?;
        let session = GameSession::new(word, difficulty, self.rng.fork());
        let display = session.start()?;

        info!(%player, %difficulty, "new game");
        self.games.insert(
            player,
            PlayerGame {
                name: name.into(),
                session,
            },
        );
        Ok(display)
    }

    /// Route a letter guess to the player's session.
    ///
    /// A terminal result settles the points into the score store — this is
    /// the one call site, hit exactly once per finished game.
    ///
    /// # Errors
    ///
    /// `GameError::NoSession` if the player has no active game, plus
    /// whatever the session itself rejects.
    pub fn guess(&mut self, player: PlayerId, letter: char) -> Result<GuessResult, GameError> {
        let game = self
            .games
            .get_mut(&player)
            .ok_or(GameError::NoSession { player })?;
        let result = game.session.guess_letter(letter)?;
        let name = game.name.clone();

        match &result {
            GuessResult::Won { points, .. } | GuessResult::Lost { points, .. } => {
                self.settle(player, &name, *points);
            }
            _ => {}
        }
        Ok(result)
    }

    /// Route a hint request to the player's session.
    ///
    /// A hint-triggered win settles points the same way a guessed win does.
    ///
    /// # Errors
    ///
    /// `GameError::NoSession` if the player has no active game, plus
    /// whatever the session itself rejects.
    pub fn request_hint(&mut self, player: PlayerId) -> Result<HintResult, GameError> {
        let game = self
            .games
            .get_mut(&player)
            .ok_or(GameError::NoSession { player })?;
        let result = game.session.request_hint()?;
        let name = game.name.clone();

        if let HintResult::Won { points, .. } = &result {
            self.settle(player, &name, *points);
        }
        Ok(result)
    }

    /// Record the player's answer to the definition offer.
    ///
    /// On acceptance, performs the dictionary lookup and returns its result
    /// for the controller to render (`None` if the backend does not know
    /// the word). Declining returns `None` and changes nothing.
    ///
    /// # Errors
    ///
    /// `GameError::NoSession` if the player has no active game, plus
    /// whatever the session itself rejects.
    pub fn definition_response(
        &mut self,
        player: PlayerId,
        accepted: bool,
    ) -> Result<Option<WordDefinition>, GameError> {
        let game = self
            .games
            .get_mut(&player)
            .ok_or(GameError::NoSession { player })?;
        game.session.definition_response(accepted)?;

        if !accepted {
            return Ok(None);
        }
        let word = game.session.word().as_str().to_string();
        Ok(self.lookup.lookup(&word))
    }

    /// Replace the player's session with a fresh one of the same difficulty.
    ///
    /// The new word is drawn independently and may repeat. No score effect.
    ///
    /// # Errors
    ///
    /// `GameError::NoSession` if the player has no game to replay;
    /// `GameError::WordSourceUnavailable` if the word list went away (the
    /// old session is left untouched in that case).
    pub fn play_again(&mut self, player: PlayerId) -> Result<String, GameError> {
        let difficulty = self
            .games
            .get(&player)
            .ok_or(GameError::NoSession { player })?
            .session
            .difficulty();

        let word = self.source.draw(difficulty, &mut self.rng)?;
        let session = GameSession::new(word, difficulty, self.rng.fork());
        let display = session.start()?;

        info!(%player, %difficulty, "play again");
        let game = self
            .games
            .get_mut(&player)
            .ok_or(GameError::NoSession { player })?;
        game.session = session;
        Ok(display)
    }

    /// Drop the player's session (abandonment). No score effect.
    ///
    /// Returns whether a session existed.
    pub fn end_game(&mut self, player: PlayerId) -> bool {
        self.games.remove(&player).is_some()
    }

    /// Whether the player has an active (possibly finished) session.
    #[must_use]
    pub fn has_game(&self, player: PlayerId) -> bool {
        self.games.contains_key(&player)
    }

    /// The player's session, for rendering current state.
    #[must_use]
    pub fn session(&self, player: PlayerId) -> Option<&GameSession> {
        self.games.get(&player).map(|game| &game.session)
    }

    /// The player's cumulative score.
    #[must_use]
    pub fn score_of(&self, player: PlayerId) -> Option<i64> {
        self.store.get_score(player)
    }

    /// The score table, descending.
    #[must_use]
    pub fn top_scores(&self, limit: usize) -> Vec<ScoreEntry> {
        self.store.top_scores(limit)
    }

    /// The underlying score store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    fn settle(&mut self, player: PlayerId, name: &str, points: i64) {
        self.store.add_points(player, name, points);
        info!(%player, points, "score settled");
    }
}

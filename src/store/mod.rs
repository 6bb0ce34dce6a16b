//! Cumulative score persistence.
//!
//! The engine settles points through `ScoreStore` exactly once per finished
//! game — never on restart, never mid-game. `MemoryScoreStore` is the
//! reference implementation; bots back this trait with their database.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// One row of the score table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub name: String,
    pub score: i64,
}

/// Persistence seam for cumulative player scores.
pub trait ScoreStore {
    /// Add `points` (which may be negative) to the player's total,
    /// creating the record if it does not exist yet.
    fn add_points(&mut self, player: PlayerId, name: &str, points: i64);

    /// The player's cumulative score, if any games were settled.
    fn get_score(&self, player: PlayerId) -> Option<i64>;

    /// The top `limit` entries, descending by score.
    fn top_scores(&self, limit: usize) -> Vec<ScoreEntry>;
}

/// In-memory score store.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct MemoryScoreStore {
    scores: FxHashMap<PlayerId, ScoreEntry>,
}

impl MemoryScoreStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of players with a score.
    #[must_use]
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// Whether no game has been settled yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

impl ScoreStore for MemoryScoreStore {
    fn add_points(&mut self, player: PlayerId, name: &str, points: i64) {
        // The name is fixed at first settlement; later games only move the score.
        self.scores
            .entry(player)
            .and_modify(|entry| entry.score += points)
            .or_insert_with(|| ScoreEntry {
                name: name.to_string(),
                score: points,
            });
    }

    fn get_score(&self, player: PlayerId) -> Option<i64> {
        self.scores.get(&player).map(|entry| entry.score)
    }

    fn top_scores(&self, limit: usize) -> Vec<ScoreEntry> {
        let mut entries: Vec<_> = self.scores.values().cloned().collect();
        entries.sort_by(|a, b| b.score.cmp(&a.score).then_with(|| a.name.cmp(&b.name)));
        entries.truncate(limit);
        entries
    }
}

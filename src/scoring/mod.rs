//! End-of-game points computation.
//!
//! A pure function of the outcome, difficulty, hints used, and the number of
//! distinct letters in the target word. The tables are deliberately
//! asymmetric between wins and losses: a loss on an easy word costs more
//! than a loss on a hard one, hints are cheap on a win and expensive on a
//! loss, and the length bonus rewards long words on a win but short words on
//! a loss (offsetting the wrong-guess budget asymmetry).
//!
//! ## Formula
//!
//! ```text
//! magnitude = 10 * difficulty_mul * hints_mul * length_mul
//! points    = +round(magnitude)  on a win
//!             -round(magnitude)  on a loss
//! ```
//!
//! Rounding is ties-to-even: the one reachable tie in the tables is
//! magnitude 22.5 (medium loss, one hint, more than 3 distinct letters),
//! which rounds to 22. No clamping is applied.

use serde::{Deserialize, Serialize};

use crate::core::Difficulty;

/// How a game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Won,
    Lost,
}

/// Compute the signed points for a finished game.
///
/// `distinct_letters` is the number of distinct letters in the target word,
/// not its length. `hints_used` outside `0..=2` contributes a neutral 1.0
/// multiplier.
///
/// ```
/// use hangman_engine::core::Difficulty;
/// use hangman_engine::scoring::{compute_points, Outcome};
///
/// // 10 * 2.0 * 1.5 * 1.2 = 36
/// assert_eq!(compute_points(Outcome::Won, Difficulty::Hard, 0, 5), 36);
///
/// // -(10 * 2.0 * 2.0 * 1.2) = -48
/// assert_eq!(compute_points(Outcome::Lost, Difficulty::Easy, 2, 2), -48);
/// ```
#[must_use]
pub fn compute_points(
    outcome: Outcome,
    difficulty: Difficulty,
    hints_used: u8,
    distinct_letters: usize,
) -> i64 {
    let difficulty_mul = match (outcome, difficulty) {
        (Outcome::Won, Difficulty::Easy) => 1.2,
        (Outcome::Won, Difficulty::Medium) => 1.6,
        (Outcome::Won, Difficulty::Hard) => 2.0,
        (Outcome::Lost, Difficulty::Easy) => 2.0,
        (Outcome::Lost, Difficulty::Medium) => 1.5,
        (Outcome::Lost, Difficulty::Hard) => 1.2,
    };

    let hints_mul = match (outcome, hints_used) {
        (Outcome::Won, 0) => 1.5,
        (Outcome::Won, 1) => 1.2,
        (Outcome::Won, 2) => 1.0,
        (Outcome::Lost, 0) => 1.0,
        (Outcome::Lost, 1) => 1.5,
        (Outcome::Lost, 2) => 2.0,
        _ => 1.0,
    };

    let length_mul = match outcome {
        Outcome::Won if distinct_letters >= 3 => 1.2,
        Outcome::Lost if distinct_letters <= 3 => 1.2,
        _ => 1.0,
    };

    let magnitude = (10.0_f64 * difficulty_mul * hints_mul * length_mul).round_ties_even() as i64;

    match outcome {
        Outcome::Won => magnitude,
        Outcome::Lost => -magnitude,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_won_table_long_word() {
        // distinct >= 3, so the 1.2 length bonus applies throughout.
        assert_eq!(compute_points(Outcome::Won, Difficulty::Easy, 0, 5), 22); // 21.6
        assert_eq!(compute_points(Outcome::Won, Difficulty::Easy, 1, 5), 17); // 17.28
        assert_eq!(compute_points(Outcome::Won, Difficulty::Easy, 2, 5), 14); // 14.4
        assert_eq!(compute_points(Outcome::Won, Difficulty::Medium, 0, 5), 29); // 28.8
        assert_eq!(compute_points(Outcome::Won, Difficulty::Medium, 1, 5), 23); // 23.04
        assert_eq!(compute_points(Outcome::Won, Difficulty::Medium, 2, 5), 19); // 19.2
        assert_eq!(compute_points(Outcome::Won, Difficulty::Hard, 0, 5), 36);
        assert_eq!(compute_points(Outcome::Won, Difficulty::Hard, 1, 5), 29); // 28.8
        assert_eq!(compute_points(Outcome::Won, Difficulty::Hard, 2, 5), 24);
    }

    #[test]
    fn test_won_short_word_no_bonus() {
        // distinct < 3: length multiplier is 1.0.
        assert_eq!(compute_points(Outcome::Won, Difficulty::Easy, 0, 2), 18);
        assert_eq!(compute_points(Outcome::Won, Difficulty::Hard, 0, 2), 30);
    }

    #[test]
    fn test_lost_table_short_word() {
        // distinct <= 3, so the 1.2 penalty bonus applies.
        assert_eq!(compute_points(Outcome::Lost, Difficulty::Easy, 0, 3), -24);
        assert_eq!(compute_points(Outcome::Lost, Difficulty::Easy, 2, 2), -48);
        assert_eq!(compute_points(Outcome::Lost, Difficulty::Medium, 0, 3), -18);
        assert_eq!(compute_points(Outcome::Lost, Difficulty::Hard, 0, 3), -14); // 14.4
        assert_eq!(compute_points(Outcome::Lost, Difficulty::Hard, 2, 3), -29); // 28.8
    }

    #[test]
    fn test_lost_long_word_no_bonus() {
        assert_eq!(compute_points(Outcome::Lost, Difficulty::Easy, 0, 5), -20);
        assert_eq!(compute_points(Outcome::Lost, Difficulty::Easy, 2, 5), -40);
        assert_eq!(compute_points(Outcome::Lost, Difficulty::Hard, 1, 5), -18);
    }

    #[test]
    fn test_ties_round_to_even() {
        // 10 * 1.5 * 1.5 * 1.0 = 22.5 -> 22, the only reachable tie.
        assert_eq!(compute_points(Outcome::Lost, Difficulty::Medium, 1, 5), -22);
    }

    #[test]
    fn test_hints_out_of_range_are_neutral() {
        // Any hints_used outside 0..=2 maps to a 1.0 multiplier.
        assert_eq!(
            compute_points(Outcome::Won, Difficulty::Hard, 3, 5),
            compute_points(Outcome::Won, Difficulty::Hard, 200, 5)
        );
        assert_eq!(compute_points(Outcome::Won, Difficulty::Hard, 3, 5), 24); // 10*2.0*1.0*1.2
    }

    #[test]
    fn test_sign_symmetry() {
        // Same tables, opposite sign, never zero.
        for difficulty in Difficulty::all() {
            for hints in 0..=3u8 {
                for distinct in [2usize, 3, 5, 8] {
                    let won = compute_points(Outcome::Won, difficulty, hints, distinct);
                    let lost = compute_points(Outcome::Lost, difficulty, hints, distinct);
                    assert!(won > 0);
                    assert!(lost < 0);
                }
            }
        }
    }
}

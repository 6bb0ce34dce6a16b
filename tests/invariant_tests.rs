//! Property tests for the session invariants.
//!
//! Random words and guess sequences, checked at every step.

use proptest::prelude::*;

use hangman_engine::core::{Difficulty, GameRng, TargetWord};
use hangman_engine::session::{GameSession, GameStatus};

fn arb_difficulty() -> impl Strategy<Value = Difficulty> {
    prop_oneof![
        Just(Difficulty::Easy),
        Just(Difficulty::Medium),
        Just(Difficulty::Hard),
    ]
}

fn arb_guesses() -> impl Strategy<Value = Vec<char>> {
    proptest::collection::vec(proptest::char::range('a', 'z'), 0..40)
}

proptest! {
    /// The correct and wrong letter sets never intersect, the wrong-guess
    /// count always equals the wrong set's size, and the budget is never
    /// exceeded.
    #[test]
    fn letter_sets_stay_consistent(
        word in "[a-z]{3,10}",
        guesses in arb_guesses(),
        difficulty in arb_difficulty(),
        seed in any::<u64>(),
    ) {
        let mut session = GameSession::new(
            TargetWord::new(word).unwrap(),
            difficulty,
            GameRng::new(seed),
        );

        for letter in guesses {
            if session.status().is_terminal() {
                break;
            }
            let _ = session.guess_letter(letter);

            prop_assert!(session.guessed_letters().is_disjoint(session.wrong_letters()));
            prop_assert_eq!(
                session.wrong_guess_count() as usize,
                session.wrong_letters().len()
            );
            prop_assert!(session.wrong_guess_count() <= difficulty.max_wrong_guesses());

            // Guessed letters are always a subset of the word's letters,
            // wrong letters never appear in the word.
            for &c in session.guessed_letters() {
                prop_assert!(session.word().contains(c));
            }
            for &c in session.wrong_letters() {
                prop_assert!(!session.word().contains(c));
            }
        }
    }

    /// The masked view always shows one position per letter of the word,
    /// revealing exactly the guessed letters.
    #[test]
    fn masked_word_matches_guesses(
        word in "[a-z]{3,10}",
        guesses in arb_guesses(),
        difficulty in arb_difficulty(),
        seed in any::<u64>(),
    ) {
        let mut session = GameSession::new(
            TargetWord::new(word).unwrap(),
            difficulty,
            GameRng::new(seed),
        );
        for letter in guesses {
            if session.status().is_terminal() {
                break;
            }
            let _ = session.guess_letter(letter);
        }

        let masked = session.masked_word();
        let positions: Vec<&str> = masked.split(' ').collect();
        prop_assert_eq!(positions.len(), session.word().len());

        for (shown, c) in positions.iter().zip(session.word().as_str().chars()) {
            if session.guessed_letters().contains(&c) {
                let c_str = c.to_string();
                prop_assert_eq!(*shown, c_str.as_str());
            } else {
                prop_assert_eq!(*shown, "_");
            }
        }
    }

    /// The derived status matches its definition, and the two terminal
    /// conditions never hold at once.
    #[test]
    fn status_matches_definition(
        word in "[a-z]{3,10}",
        guesses in arb_guesses(),
        difficulty in arb_difficulty(),
        seed in any::<u64>(),
    ) {
        let mut session = GameSession::new(
            TargetWord::new(word).unwrap(),
            difficulty,
            GameRng::new(seed),
        );

        for letter in guesses {
            if session.status().is_terminal() {
                break;
            }
            let _ = session.guess_letter(letter);

            let fully_revealed = session.word().is_fully_revealed(session.guessed_letters());
            let budget_spent =
                session.wrong_guess_count() >= difficulty.max_wrong_guesses();

            prop_assert!(!(fully_revealed && budget_spent));
            match session.status() {
                GameStatus::Won => prop_assert!(fully_revealed),
                GameStatus::Lost => prop_assert!(budget_spent),
                GameStatus::InProgress => {
                    prop_assert!(!fully_revealed);
                    prop_assert!(!budget_spent);
                }
            }
        }
    }

    /// Repeating a letter that was already tried changes nothing.
    #[test]
    fn repeated_guesses_are_noops(
        word in "[a-z]{3,10}",
        letter in proptest::char::range('a', 'z'),
        difficulty in arb_difficulty(),
        seed in any::<u64>(),
    ) {
        let mut session = GameSession::new(
            TargetWord::new(word).unwrap(),
            difficulty,
            GameRng::new(seed),
        );

        let _ = session.guess_letter(letter);
        if session.status().is_terminal() {
            // A one-distinct-letter word can be won on the first guess.
            return Ok(());
        }

        let guessed_before = session.guessed_letters().clone();
        let wrong_before = session.wrong_letters().clone();
        let count_before = session.wrong_guess_count();
        let masked_before = session.masked_word();

        let _ = session.guess_letter(letter).unwrap();

        prop_assert_eq!(session.guessed_letters(), &guessed_before);
        prop_assert_eq!(session.wrong_letters(), &wrong_before);
        prop_assert_eq!(session.wrong_guess_count(), count_before);
        prop_assert_eq!(session.masked_word(), masked_before);
    }

    /// Hints only ever reveal letters of the word, and win detection via
    /// hints agrees with the fully-revealed check.
    #[test]
    fn hints_reveal_word_letters(
        word in "[a-z]{3,10}",
        hint_count in 0usize..12,
        difficulty in arb_difficulty(),
        seed in any::<u64>(),
    ) {
        use hangman_engine::session::HintResult;

        let mut session = GameSession::new(
            TargetWord::new(word).unwrap(),
            difficulty,
            GameRng::new(seed),
        );

        for _ in 0..hint_count {
            if session.status().is_terminal() {
                break;
            }
            match session.request_hint().unwrap() {
                HintResult::Revealed { letter, .. } => {
                    prop_assert!(session.word().contains(letter));
                    prop_assert!(!session.word().is_fully_revealed(session.guessed_letters()));
                }
                HintResult::Won { .. } => {
                    prop_assert!(session.word().is_fully_revealed(session.guessed_letters()));
                    prop_assert_eq!(session.status(), GameStatus::Won);
                }
                HintResult::NoneAvailable => {
                    // Unreachable while in progress: there is always a
                    // letter left to reveal before the game is won.
                    prop_assert!(false, "no hint available in a live game");
                }
            }
        }
    }
}

//! Built-in word lists.
//!
//! Small curated lists so the engine works out of the box; bots with bigger
//! vocabularies load their own files via `load_words_file` or implement
//! `WordSource` directly.

/// Short, common words. Generous wrong-guess budget territory.
pub const EASY_WORDS: &[&str] = &[
    "cat", "dog", "sun", "hat", "map", "cup", "bed", "fox", "key", "pen", "box", "car", "star",
    "fish", "bird", "cake", "tree", "milk", "door", "ring", "frog", "ship", "lamp", "rain",
    "snow", "moon", "book", "shoe", "kite", "duck", "corn", "leaf", "sock", "bell", "nest",
    "coin",
];

/// Everyday words with a few more letters to find.
pub const MEDIUM_WORDS: &[&str] = &[
    "garden", "window", "planet", "bridge", "orange", "yellow", "jungle", "rocket", "castle",
    "silver", "winter", "summer", "guitar", "pencil", "market", "bottle", "camera", "island",
    "pillow", "turtle", "monkey", "dragon", "forest", "cherry", "flower", "basket", "ladder",
    "mirror", "puzzle", "violin", "wallet", "candle", "desert", "magnet", "tunnel", "anchor",
];

/// Rare letters and repeated patterns. Classic gallows material.
pub const HARD_WORDS: &[&str] = &[
    "rhythm", "quartz", "sphinx", "oxygen", "wizard", "galaxy", "jigsaw", "zephyr", "vortex",
    "gazebo", "gizmo", "glyph", "haiku", "hyphen", "ivory", "jukebox", "kayak", "khaki",
    "luxury", "nymph", "onyx", "pixel", "polka", "squawk", "swivel", "topaz", "unzip", "waltz",
    "xylophone", "yacht", "zigzag", "zombie", "banjo", "cobweb", "fjord", "mystify",
];

#[cfg(test)]
mod tests {
    use crate::core::TargetWord;

    #[test]
    fn test_every_embedded_word_is_valid() {
        for list in [super::EASY_WORDS, super::MEDIUM_WORDS, super::HARD_WORDS] {
            for &word in list {
                assert!(TargetWord::new(word).is_ok(), "bad embedded word {word:?}");
            }
        }
    }
}

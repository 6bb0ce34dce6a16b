//! Player identification.
//!
//! One active game belongs to exactly one player. The id is the chat/player
//! identity issued by the messaging platform, so it is a signed 64-bit value
//! rather than a small index.

use serde::{Deserialize, Serialize};

/// Chat/player identifier as issued by the messaging platform.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub i64);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> i64 {
        self.0
    }
}

impl From<i64> for PlayerId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_and_raw() {
        let id = PlayerId::new(42);
        assert_eq!(id.raw(), 42);
        assert_eq!(id, PlayerId(42));

        // Chat ids can be negative (group chats on some platforms).
        let group = PlayerId::new(-1001234);
        assert_eq!(group.raw(), -1001234);
    }

    #[test]
    fn test_from_i64() {
        let id: PlayerId = 7.into();
        assert_eq!(id, PlayerId::new(7));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", PlayerId(42)), "Player(42)");
    }

    #[test]
    fn test_serialization() {
        let id = PlayerId(123);
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: PlayerId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}

//! The two seats at the table.

use serde::{Deserialize, Serialize};

/// Player in the game.
///
/// Iteration order (via [`strum::IntoEnumIterator`]) is `Player1` then
/// `Player2`, which is also the order win evaluation checks them in.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::Display,
)]
pub enum Player {
    /// First player (always moves first).
    #[strum(to_string = "Player 1")]
    Player1,
    /// Second player.
    #[strum(to_string = "Player 2")]
    Player2,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::Player1 => Player::Player2,
            Player::Player2 => Player::Player1,
        }
    }

    /// Board mark for text rendering.
    pub fn mark(self) -> char {
        match self {
            Player::Player1 => 'X',
            Player::Player2 => 'O',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_opponent_flips() {
        assert_eq!(Player::Player1.opponent(), Player::Player2);
        assert_eq!(Player::Player2.opponent(), Player::Player1);
    }

    #[test]
    fn test_iteration_order() {
        let order: Vec<Player> = Player::iter().collect();
        assert_eq!(order, vec![Player::Player1, Player::Player2]);
    }

    #[test]
    fn test_display() {
        assert_eq!(Player::Player2.to_string(), "Player 2");
    }
}

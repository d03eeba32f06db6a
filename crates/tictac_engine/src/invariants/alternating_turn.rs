//! Alternating turn invariant: Player 1, Player 2, Player 1, ...

use super::Invariant;
use crate::{GameEngine, Player};

/// Invariant: players alternate turns, Player 1 first.
///
/// Also requires the engine's current player to match the parity of the
/// history length.
pub struct AlternatingTurnInvariant;

impl Invariant<GameEngine> for AlternatingTurnInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let alternates = engine
            .history()
            .iter()
            .enumerate()
            .all(|(i, m)| (m.player == Player::Player1) == (i % 2 == 0));

        let expected_next = if engine.history().len() % 2 == 0 {
            Player::Player1
        } else {
            Player::Player2
        };

        alternates && engine.current_player() == expected_next
    }

    fn description() -> &'static str {
        "Players alternate turns (Player 1, Player 2, ...)"
    }
}

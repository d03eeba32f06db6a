//! First-class invariants for the move history.
//!
//! Invariants are logical properties that must hold after every accepted
//! move. The engine asserts them in debug builds; they can also be checked
//! independently.

mod alternating_turn;
mod unique_tile;

pub use alternating_turn::AlternatingTurnInvariant;
pub use unique_tile::UniqueTileInvariant;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of [`Invariant`]s.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Every history invariant as one composable set.
pub type HistoryInvariants = (AlternatingTurnInvariant, UniqueTileInvariant);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameEngine, Move, MoveHistory, Player, Tile};

    fn tile(n: u8) -> Tile {
        Tile::new(n).expect("valid tile")
    }

    #[test]
    fn test_holds_for_new_game() {
        let engine = GameEngine::new();
        assert!(HistoryInvariants::check_all(&engine).is_ok());
    }

    #[test]
    fn test_holds_after_moves() {
        let engine = GameEngine::replay([1, 5, 9, 3].map(tile));
        assert!(HistoryInvariants::check_all(&engine).is_ok());
    }

    #[test]
    fn test_reports_every_violation() {
        let history: MoveHistory = [
            Move::new(Player::Player1, tile(5)),
            Move::new(Player::Player1, tile(5)),
        ]
        .into_iter()
        .collect();
        let engine = GameEngine::from_parts(Player::Player1, history);

        let violations = HistoryInvariants::check_all(&engine).unwrap_err();
        assert_eq!(violations.len(), 2);
    }
}

//! The game engine: turn management, move recording and evaluation.

use crate::invariants::{HistoryInvariants, InvariantSet};
use crate::rules::winning_line;
use crate::{BOARD, GameResult, Move, MoveHistory, Player, Tile};
use serde::Serialize;
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

/// Authoritative state of one game.
///
/// The engine has a single owner (the active game session). Callers mutate
/// it through [`apply_move`](Self::apply_move) and [`restart`](Self::restart)
/// and ask for the outcome with [`evaluate`](Self::evaluate) after each
/// mutation. The result is never cached, so it cannot go stale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameEngine {
    current_player: Player,
    history: MoveHistory,
}

impl GameEngine {
    /// Creates a new game with Player 1 to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            current_player: Player::Player1,
            history: MoveHistory::new(),
        }
    }

    /// Builds a game by applying `tiles` in order.
    ///
    /// Tiles that are already claimed are skipped exactly as
    /// [`apply_move`](Self::apply_move) skips them.
    #[instrument(skip(tiles))]
    pub fn replay(tiles: impl IntoIterator<Item = Tile>) -> Self {
        let mut engine = Self::new();
        for tile in tiles {
            engine.apply_move(tile);
        }
        engine
    }

    /// Returns the player whose turn it is.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the move history.
    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    /// Returns the player who claimed `tile`, if anyone.
    pub fn owner_of(&self, tile: Tile) -> Option<Player> {
        self.history.find(tile).map(|m| m.player)
    }

    /// Checks whether `tile` has been claimed.
    pub fn is_claimed(&self, tile: Tile) -> bool {
        self.history.contains_tile(tile)
    }

    /// Claims `tile` for the current player and passes the turn.
    ///
    /// Selecting a tile that is already claimed does nothing: the history
    /// and the current player stay as they are and `None` is returned.
    /// Otherwise the recorded move is returned.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn apply_move(&mut self, tile: Tile) -> Option<Move> {
        if self.history.contains_tile(tile) {
            debug!("Tile already claimed, ignoring");
            return None;
        }

        let action = Move::new(self.current_player, tile);
        self.history.push(action);
        self.current_player = self.current_player.opponent();

        debug_assert!(
            HistoryInvariants::check_all(&*self).is_ok(),
            "History invariants violated"
        );

        debug!(moves = self.history.len(), "Move recorded");
        Some(action)
    }

    /// Discards the history and gives the first turn back to Player 1.
    #[instrument(skip(self), fields(moves = self.history.len()))]
    pub fn restart(&mut self) {
        self.history.clear();
        self.current_player = Player::Player1;
        debug!("Game restarted");
    }

    /// Computes the game result from the history.
    ///
    /// Player 1 is checked before Player 2. Returns `None` while nobody
    /// has completed a line, including when the board is full.
    #[instrument(skip(self), fields(moves = self.history.len()))]
    pub fn evaluate(&self) -> Option<GameResult> {
        let result = Player::iter().find_map(|player| {
            winning_line(self.history.claimed_by(player))
                .map(|(line, tiles)| GameResult::new(player, line, tiles))
        });

        if let Some(result) = &result {
            debug!(%result, "Winning line found");
        }
        result
    }

    #[cfg(test)]
    pub(crate) fn from_parts(current_player: Player, history: MoveHistory) -> Self {
        Self {
            current_player,
            history,
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for GameEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (r, row) in BOARD.iter().enumerate() {
            for (c, tile) in row.iter().enumerate() {
                match self.owner_of(*tile) {
                    Some(player) => write!(f, "{}", player.mark())?,
                    None => write!(f, "{}", tile)?,
                }
                if c < 2 {
                    write!(f, "|")?;
                }
            }
            if r < 2 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tile(n: u8) -> Tile {
        Tile::new(n).expect("valid tile")
    }

    #[test]
    fn test_new_game() {
        let engine = GameEngine::new();
        assert_eq!(engine.current_player(), Player::Player1);
        assert!(engine.history().is_empty());
        assert_eq!(engine.evaluate(), None);
    }

    #[test]
    fn test_apply_move_returns_recorded_move() {
        let mut engine = GameEngine::new();
        assert_eq!(
            engine.apply_move(tile(5)),
            Some(Move::new(Player::Player1, tile(5)))
        );
        assert_eq!(engine.owner_of(tile(5)), Some(Player::Player1));
        assert!(engine.is_claimed(tile(5)));
        assert!(!engine.is_claimed(tile(1)));
    }

    #[test]
    fn test_display_board() {
        let engine = GameEngine::replay([1, 5].map(tile));
        assert_eq!(engine.to_string(), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
    }
}

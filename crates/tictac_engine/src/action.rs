//! Moves and the history they form.
//!
//! A move is a recorded fact: once in the history it never changes.

use super::{Player, Tile, TileSet};
use derive_new::new;
use serde::{Deserialize, Serialize};

/// A player claiming a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The tile claimed.
    pub tile: Tile,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.tile)
    }
}

/// Chronological record of accepted moves.
///
/// The history does not enforce turn order itself; the engine only ever
/// pushes moves for the player whose turn it is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MoveHistory {
    moves: Vec<Move>,
}

impl MoveHistory {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of recorded moves.
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Returns true if no move has been recorded.
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Moves in the order they were played.
    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }

    /// Iterates moves in the order they were played.
    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }

    /// Returns the move that claimed `tile`, if any.
    pub fn find(&self, tile: Tile) -> Option<&Move> {
        self.moves.iter().find(|m| m.tile == tile)
    }

    /// Checks whether `tile` has been claimed.
    pub fn contains_tile(&self, tile: Tile) -> bool {
        self.find(tile).is_some()
    }

    /// Tiles claimed by `player`.
    pub fn claimed_by(&self, player: Player) -> TileSet {
        self.moves
            .iter()
            .filter(|m| m.player == player)
            .map(|m| m.tile)
            .collect()
    }

    pub(crate) fn push(&mut self, action: Move) {
        self.moves.push(action);
    }

    pub(crate) fn clear(&mut self) {
        self.moves.clear();
    }
}

impl<'a> IntoIterator for &'a MoveHistory {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
impl FromIterator<Move> for MoveHistory {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Self {
        Self {
            moves: iter.into_iter().collect(),
        }
    }
}

//! Evaluation output: which line won and who owns it.

use super::{Player, Tile};
use serde::{Deserialize, Serialize};

/// Shape of a winning line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum LineKind {
    /// A horizontal line.
    Row,
    /// A vertical line.
    Column,
    /// The 1-5-9 diagonal.
    DiagonalLeft,
    /// The 3-5-7 diagonal.
    DiagonalRight,
}

/// A completed line and the player who completed it.
///
/// Only exists once someone has won; "no winner yet" is `None` at the
/// call site rather than an empty result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameResult {
    winner: Player,
    line: LineKind,
    winning_tiles: [Tile; 3],
}

impl GameResult {
    pub(crate) fn new(winner: Player, line: LineKind, winning_tiles: [Tile; 3]) -> Self {
        Self {
            winner,
            line,
            winning_tiles,
        }
    }

    /// The player who completed the line.
    pub fn winner(&self) -> Player {
        self.winner
    }

    /// Which kind of line was completed.
    pub fn line(&self) -> LineKind {
        self.line
    }

    /// The three tiles of the line, in board order.
    pub fn winning_tiles(&self) -> [Tile; 3] {
        self.winning_tiles
    }

    /// Checks whether `tile` is part of the winning line.
    pub fn contains(&self, tile: Tile) -> bool {
        self.winning_tiles.contains(&tile)
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [a, b, c] = self.winning_tiles;
        write!(f, "{} wins ({} {}-{}-{})", self.winner, self.line, a, b, c)
    }
}

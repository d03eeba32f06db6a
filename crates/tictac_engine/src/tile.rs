//! Tiles, the board layout and tile sets.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// One of the nine board cells, numbered 1-9 in row-major order.
///
/// A `Tile` can only be built from a number in `1..=9`, so every engine
/// operation taking a tile is infallible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Tile(u8);

/// The fixed 3x3 board:
///
/// ```text
/// 1 2 3
/// 4 5 6
/// 7 8 9
/// ```
pub const BOARD: [[Tile; 3]; 3] = [
    [Tile(1), Tile(2), Tile(3)],
    [Tile(4), Tile(5), Tile(6)],
    [Tile(7), Tile(8), Tile(9)],
];

impl Tile {
    /// All nine tiles in board order.
    pub const ALL: [Tile; 9] = [
        Tile(1),
        Tile(2),
        Tile(3),
        Tile(4),
        Tile(5),
        Tile(6),
        Tile(7),
        Tile(8),
        Tile(9),
    ];

    /// Creates a tile from its number.
    ///
    /// # Errors
    ///
    /// Returns [`TileError::OutOfRange`] unless `number` is in `1..=9`.
    #[instrument]
    pub fn new(number: u8) -> Result<Self, TileError> {
        if (1..=9).contains(&number) {
            Ok(Self(number))
        } else {
            Err(TileError::OutOfRange(number))
        }
    }

    /// Returns the tile number (1-9).
    pub fn number(self) -> u8 {
        self.0
    }

    /// Zero-based row on the board.
    pub fn row(self) -> usize {
        usize::from(self.0 - 1) / 3
    }

    /// Zero-based column on the board.
    pub fn column(self) -> usize {
        usize::from(self.0 - 1) % 3
    }

    /// Returns the tile at a zero-based board coordinate.
    pub fn at(row: usize, column: usize) -> Option<Self> {
        BOARD.get(row).and_then(|r| r.get(column)).copied()
    }
}

impl TryFrom<u8> for Tile {
    type Error = TileError;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        Self::new(number)
    }
}

impl From<Tile> for u8 {
    fn from(tile: Tile) -> Self {
        tile.0
    }
}

impl FromStr for Tile {
    type Err = TileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let number: u8 = s
            .trim()
            .parse()
            .map_err(|_| TileError::Parse(s.to_string()))?;
        Self::new(number)
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error building a [`Tile`] from outside input.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum TileError {
    /// The number is not a board tile.
    #[display("Tile {} is outside 1-9", _0)]
    OutOfRange(u8),

    /// The text is not a number.
    #[display("'{}' is not a tile number", _0)]
    Parse(String),
}

impl std::error::Error for TileError {}

/// Order-independent set of tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TileSet(u16);

impl TileSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self(0)
    }

    /// Adds a tile to the set.
    pub fn insert(&mut self, tile: Tile) {
        self.0 |= 1 << tile.0;
    }

    /// Checks membership.
    pub fn contains(self, tile: Tile) -> bool {
        self.0 & (1 << tile.0) != 0
    }

    /// Number of tiles in the set.
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns true if the set has no tiles.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Tiles present in both sets.
    pub fn intersection(self, other: TileSet) -> TileSet {
        TileSet(self.0 & other.0)
    }

    /// Iterates tiles in board order.
    pub fn iter(self) -> impl Iterator<Item = Tile> {
        Tile::ALL.into_iter().filter(move |tile| self.contains(*tile))
    }
}

impl FromIterator<Tile> for TileSet {
    fn from_iter<I: IntoIterator<Item = Tile>>(iter: I) -> Self {
        let mut set = TileSet::new();
        for tile in iter {
            set.insert(tile);
        }
        set
    }
}

impl From<[Tile; 3]> for TileSet {
    fn from(line: [Tile; 3]) -> Self {
        line.into_iter().collect()
    }
}

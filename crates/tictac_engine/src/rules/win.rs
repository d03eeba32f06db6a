//! Win detection over a single player's claimed tiles.

use crate::{BOARD, LineKind, Tile, TileSet};
use tracing::instrument;

/// The 1-5-9 diagonal.
const DIAGONAL_LEFT: [Tile; 3] = [BOARD[0][0], BOARD[1][1], BOARD[2][2]];

/// The 3-5-7 diagonal.
const DIAGONAL_RIGHT: [Tile; 3] = [BOARD[0][2], BOARD[1][1], BOARD[2][0]];

fn fully_claimed(claimed: TileSet, line: [Tile; 3]) -> bool {
    claimed.intersection(TileSet::from(line)).len() == 3
}

/// Returns the first board row (top to bottom) fully covered by `claimed`.
#[instrument]
pub fn row_winner(claimed: TileSet) -> Option<[Tile; 3]> {
    BOARD.into_iter().find(|row| fully_claimed(claimed, *row))
}

/// Returns the first board column (left to right) fully covered by `claimed`.
#[instrument]
pub fn column_winner(claimed: TileSet) -> Option<[Tile; 3]> {
    (0..3).find_map(|column| {
        let marked: Vec<Tile> = BOARD
            .iter()
            .map(|row| row[column])
            .filter(|tile| claimed.contains(*tile))
            .collect();
        <[Tile; 3]>::try_from(marked).ok()
    })
}

/// Returns a diagonal fully covered by `claimed`, checking 1-5-9 first.
#[instrument]
pub fn diagonal_winner(claimed: TileSet) -> Option<[Tile; 3]> {
    [DIAGONAL_LEFT, DIAGONAL_RIGHT]
        .into_iter()
        .find(|diagonal| fully_claimed(claimed, *diagonal))
}

/// Finds a winning line in `claimed`, preferring rows, then columns, then
/// diagonals.
///
/// Sets with fewer than three tiles are rejected without inspecting lines.
#[instrument]
pub fn winning_line(claimed: TileSet) -> Option<(LineKind, [Tile; 3])> {
    if claimed.len() < 3 {
        return None;
    }

    if let Some(tiles) = row_winner(claimed) {
        return Some((LineKind::Row, tiles));
    }

    if let Some(tiles) = column_winner(claimed) {
        return Some((LineKind::Column, tiles));
    }

    diagonal_winner(claimed).map(|tiles| {
        let kind = if tiles.contains(&BOARD[2][2]) {
            LineKind::DiagonalLeft
        } else {
            LineKind::DiagonalRight
        };
        (kind, tiles)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiles(numbers: &[u8]) -> TileSet {
        numbers
            .iter()
            .map(|n| Tile::new(*n).expect("valid tile"))
            .collect()
    }

    fn line(numbers: [u8; 3]) -> [Tile; 3] {
        numbers.map(|n| Tile::new(n).expect("valid tile"))
    }

    #[test]
    fn test_no_winner_empty() {
        assert_eq!(winning_line(TileSet::new()), None);
    }

    #[test]
    fn test_no_winner_incomplete() {
        assert_eq!(winning_line(tiles(&[1, 2])), None);
        assert_eq!(winning_line(tiles(&[1, 2, 4, 9])), None);
    }

    #[test]
    fn test_each_row() {
        for row in [[1, 2, 3], [4, 5, 6], [7, 8, 9]] {
            assert_eq!(row_winner(tiles(&row)), Some(line(row)));
            assert_eq!(winning_line(tiles(&row)), Some((LineKind::Row, line(row))));
        }
    }

    #[test]
    fn test_each_column() {
        for column in [[1, 4, 7], [2, 5, 8], [3, 6, 9]] {
            assert_eq!(column_winner(tiles(&column)), Some(line(column)));
            assert_eq!(
                winning_line(tiles(&column)),
                Some((LineKind::Column, line(column)))
            );
        }
    }

    #[test]
    fn test_diagonal_naming() {
        assert_eq!(
            winning_line(tiles(&[9, 5, 1])),
            Some((LineKind::DiagonalLeft, line([1, 5, 9])))
        );
        assert_eq!(
            winning_line(tiles(&[7, 5, 3])),
            Some((LineKind::DiagonalRight, line([3, 5, 7])))
        );
    }

    #[test]
    fn test_row_beats_column() {
        // Top row and left column share tile 1.
        assert_eq!(
            winning_line(tiles(&[1, 2, 3, 4, 7])),
            Some((LineKind::Row, line([1, 2, 3])))
        );
    }

    #[test]
    fn test_column_beats_diagonal() {
        assert_eq!(
            winning_line(tiles(&[1, 4, 7, 5, 9])),
            Some((LineKind::Column, line([1, 4, 7])))
        );
    }
}

//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;
use tictac_engine::Tile;

/// Moves the board cursor with the arrow keys, stopping at the edges.
pub fn move_cursor(cursor: Tile, key: KeyCode) -> Tile {
    let (row, column) = (cursor.row(), cursor.column());

    let target = match key {
        KeyCode::Left => column.checked_sub(1).map(|c| (row, c)),
        KeyCode::Right => Some((row, column + 1)),
        KeyCode::Up => row.checked_sub(1).map(|r| (r, column)),
        KeyCode::Down => Some((row + 1, column)),
        _ => None,
    };

    target
        .and_then(|(row, column)| Tile::at(row, column))
        .unwrap_or(cursor)
}

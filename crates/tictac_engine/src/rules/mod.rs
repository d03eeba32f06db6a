//! Game rules for tic-tac-toe.
//!
//! Pure functions over a player's claimed tiles. Rules are kept apart from
//! the engine's state so they can be tested one line shape at a time.

pub mod win;

pub use win::{column_winner, diagonal_winner, row_winner, winning_line};

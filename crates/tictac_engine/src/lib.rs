//! Tic-tac-toe game engine.
//!
//! Owns turn order and move history for one game and evaluates the board
//! for a winning line. It has no UI, I/O or network dependency; a front-end
//! maps user input to [`GameEngine::apply_move`] and renders
//! [`GameEngine::evaluate`].
//!
//! # Example
//!
//! ```
//! use tictac_engine::{GameEngine, LineKind, Player, Tile};
//!
//! let mut engine = GameEngine::new();
//! for n in [1, 2, 5, 3, 9] {
//!     engine.apply_move(Tile::new(n)?);
//! }
//!
//! let result = engine.evaluate().expect("diagonal completed");
//! assert_eq!(result.winner(), Player::Player1);
//! assert_eq!(result.line(), LineKind::DiagonalLeft);
//! # Ok::<(), tictac_engine::TileError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod engine;
pub mod invariants;
mod outcome;
mod player;
pub mod rules;
mod tile;

pub use action::{Move, MoveHistory};
pub use engine::GameEngine;
pub use outcome::{GameResult, LineKind};
pub use player::Player;
pub use tile::{BOARD, Tile, TileError, TileSet};

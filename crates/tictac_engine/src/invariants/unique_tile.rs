//! Unique tile invariant: a tile is claimed at most once.

use super::Invariant;
use crate::{GameEngine, TileSet};

/// Invariant: no tile appears twice in the history.
pub struct UniqueTileInvariant;

impl Invariant<GameEngine> for UniqueTileInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let distinct: TileSet = engine.history().iter().map(|m| m.tile).collect();
        distinct.len() == engine.history().len()
    }

    fn description() -> &'static str {
        "Each tile is claimed at most once"
    }
}

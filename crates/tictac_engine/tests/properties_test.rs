//! Property tests for turn management and evaluation.

use proptest::prelude::*;
use tictac_engine::invariants::{HistoryInvariants, InvariantSet};
use tictac_engine::{GameEngine, Player, Tile};

fn tiles() -> impl Strategy<Value = Vec<Tile>> {
    prop::collection::vec(1u8..=9, 0..24)
        .prop_map(|numbers| numbers.into_iter().map(|n| Tile::new(n).unwrap()).collect())
}

proptest! {
    #[test]
    fn history_counts_accepted_moves(tiles in tiles()) {
        let mut engine = GameEngine::new();
        let mut accepted = 0;
        for tile in tiles {
            if engine.apply_move(tile).is_some() {
                accepted += 1;
            }
        }
        prop_assert_eq!(engine.history().len(), accepted);
        prop_assert!(engine.history().len() <= 9);
    }

    #[test]
    fn turns_alternate_from_player_one(tiles in tiles()) {
        let engine = GameEngine::replay(tiles);
        for (i, m) in engine.history().iter().enumerate() {
            prop_assert_eq!(m.player == Player::Player1, i % 2 == 0);
        }
        prop_assert!(HistoryInvariants::check_all(&engine).is_ok());
    }

    #[test]
    fn repeating_a_move_changes_nothing(tiles in tiles(), extra in 1u8..=9) {
        let tile = Tile::new(extra).unwrap();
        let mut once = GameEngine::replay(tiles);
        once.apply_move(tile);
        let mut twice = once.clone();
        twice.apply_move(tile);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn evaluate_is_pure(tiles in tiles()) {
        let engine = GameEngine::replay(tiles);
        let snapshot = engine.clone();
        let first = engine.evaluate();
        let second = engine.evaluate();
        prop_assert_eq!(first, second);
        prop_assert_eq!(engine, snapshot);
    }

    #[test]
    fn restart_clears_result(tiles in tiles()) {
        let mut engine = GameEngine::replay(tiles);
        engine.restart();
        prop_assert!(engine.history().is_empty());
        prop_assert_eq!(engine.current_player(), Player::Player1);
        prop_assert_eq!(engine.evaluate(), None);
    }

    #[test]
    fn winning_tiles_belong_to_winner(tiles in tiles()) {
        let engine = GameEngine::replay(tiles);
        if let Some(result) = engine.evaluate() {
            for tile in result.winning_tiles() {
                prop_assert_eq!(engine.owner_of(tile), Some(result.winner()));
            }
        }
    }
}

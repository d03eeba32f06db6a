//! Tests for screen key handling and transitions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tictac::{CreditsScreen, GameScreen, HomeScreen, Roster, Screen, ScreenTransition};
use tictac_engine::{LineKind, Player, Tile};

fn press(screen: &mut impl Screen, code: KeyCode) -> ScreenTransition {
    screen.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn type_text(screen: &mut impl Screen, text: &str) {
    for c in text.chars() {
        assert_eq!(press(screen, KeyCode::Char(c)), ScreenTransition::Stay);
    }
}

fn tile(n: u8) -> Tile {
    Tile::new(n).expect("valid tile")
}

#[test]
fn test_home_new_game_requires_both_names() {
    let mut home = HomeScreen::new();

    // "New Game" is selected first.
    assert_eq!(press(&mut home, KeyCode::Enter), ScreenTransition::Stay);
    assert!(home.setup().is_some());

    type_text(&mut home, "Ada");
    assert_eq!(press(&mut home, KeyCode::Enter), ScreenTransition::Stay);
    let error = home.setup().as_ref().and_then(|s| s.error().clone());
    assert_eq!(error.as_deref(), Some("Please enter both names"));

    press(&mut home, KeyCode::Tab);
    type_text(&mut home, " Grace ");
    assert_eq!(
        press(&mut home, KeyCode::Enter),
        ScreenTransition::GoToGame {
            player1: "Ada".to_string(),
            player2: "Grace".to_string(),
        }
    );
}

#[test]
fn test_home_setup_cancel_and_quit() {
    let mut home = HomeScreen::new();

    press(&mut home, KeyCode::Enter);
    // 'q' is a name character while the dialog is open.
    assert_eq!(press(&mut home, KeyCode::Char('q')), ScreenTransition::Stay);
    assert_eq!(press(&mut home, KeyCode::Esc), ScreenTransition::Stay);
    assert!(home.setup().is_none());

    assert_eq!(press(&mut home, KeyCode::Char('q')), ScreenTransition::Quit);
}

#[test]
fn test_home_menu_navigation() {
    let mut home = HomeScreen::new();

    press(&mut home, KeyCode::Down);
    assert_eq!(press(&mut home, KeyCode::Enter), ScreenTransition::GoToCredits);

    press(&mut home, KeyCode::Down);
    assert_eq!(press(&mut home, KeyCode::Enter), ScreenTransition::Quit);

    // Wraps from the last option back to "New Game".
    press(&mut home, KeyCode::Down);
    press(&mut home, KeyCode::Enter);
    assert!(home.setup().is_some());
}

#[test]
fn test_game_digit_keys_claim_tiles() {
    let mut game = GameScreen::new(Roster::new("Ada", "Grace"));

    for c in ['1', '2', '5', '3'] {
        press(&mut game, KeyCode::Char(c));
    }
    assert!(game.result().is_none());
    assert_eq!(game.engine().current_player(), Player::Player1);

    press(&mut game, KeyCode::Char('9'));

    let result = game.result().as_ref().expect("diagonal won");
    assert_eq!(result.winner(), Player::Player1);
    assert_eq!(result.line(), LineKind::DiagonalLeft);
    assert_eq!(game.roster().profile(result.winner()).display_name(), "Ada");
}

#[test]
fn test_game_cursor_claims_with_enter() {
    let mut game = GameScreen::new(Roster::default());
    assert_eq!(*game.cursor(), tile(5));

    press(&mut game, KeyCode::Up);
    press(&mut game, KeyCode::Left);
    assert_eq!(*game.cursor(), tile(1));

    press(&mut game, KeyCode::Enter);
    assert_eq!(game.engine().owner_of(tile(1)), Some(Player::Player1));

    // Same tile again does nothing.
    press(&mut game, KeyCode::Char(' '));
    assert_eq!(game.engine().history().len(), 1);
    assert_eq!(game.engine().current_player(), Player::Player2);
}

#[test]
fn test_game_ignores_non_tile_characters() {
    let mut game = GameScreen::new(Roster::default());

    press(&mut game, KeyCode::Char('0'));
    press(&mut game, KeyCode::Char('x'));
    assert!(game.engine().history().is_empty());
}

#[test]
fn test_victory_overlay_blocks_moves_and_restarts() {
    let mut game = GameScreen::new(Roster::default());
    for c in ['1', '4', '2', '5', '3'] {
        press(&mut game, KeyCode::Char(c));
    }
    assert!(game.result().is_some());

    press(&mut game, KeyCode::Char('9'));
    assert_eq!(game.engine().history().len(), 5);

    assert_eq!(press(&mut game, KeyCode::Char('r')), ScreenTransition::Stay);
    assert!(game.result().is_none());
    assert!(game.engine().history().is_empty());
    assert_eq!(game.engine().current_player(), Player::Player1);
}

#[test]
fn test_victory_overlay_quit_goes_home() {
    let mut game = GameScreen::new(Roster::default());
    for c in ['1', '2', '4', '5', '7'] {
        press(&mut game, KeyCode::Char(c));
    }
    assert_eq!(
        game.result().as_ref().map(|r| r.line()),
        Some(LineKind::Column)
    );
    assert_eq!(press(&mut game, KeyCode::Char('q')), ScreenTransition::GoToHome);
}

#[test]
fn test_full_board_keeps_playing_screen() {
    let mut game = GameScreen::new(Roster::default());
    for c in ['1', '2', '3', '5', '4', '6', '8', '7', '9'] {
        press(&mut game, KeyCode::Char(c));
    }
    assert_eq!(game.engine().history().len(), 9);
    assert!(game.result().is_none());
    assert_eq!(press(&mut game, KeyCode::Esc), ScreenTransition::GoToHome);
}

#[test]
fn test_credits_screen_loads_from_channel() {
    let (tx, rx) = tokio::sync::mpsc::unbounded_channel();
    let mut credits = CreditsScreen::from_channel(rx);

    credits.update();
    assert!(credits.credits().is_none());

    tx.send(vec!["Dale Barbara".to_string()]).expect("receiver alive");
    credits.update();
    assert_eq!(
        credits.credits().as_deref(),
        Some(&["Dale Barbara".to_string()][..])
    );

    assert_eq!(press(&mut credits, KeyCode::Esc), ScreenTransition::GoToHome);
}

//! Tictac - two-player tic-tac-toe in the terminal.
//!
//! The game rules live in [`tictac_engine`]. This crate is the front-end
//! around it.
//!
//! # Architecture
//!
//! - **TUI**: home, game and credits screens driven by [`AppController`]
//! - **Roster**: player names and icons, kept out of the engine
//! - **Credits**: background HTTP fetch of the credits list
//! - **Config**: optional `tictac.toml` plus environment overrides

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod credits;
mod roster;
mod tui;

// Crate-level exports - Configuration
pub use config::{AppConfig, CREDITS_URL_ENV, ConfigError};

// Crate-level exports - Credits
pub use credits::{CreditsClient, CreditsError, decode_cast_credits, decode_character_name};

// Crate-level exports - Roster
pub use roster::{
    DEFAULT_PLAYER1_NAME, DEFAULT_PLAYER2_NAME, PlayerProfile, Roster, SetupError,
    validate_names,
};

// Crate-level exports - Terminal UI
pub use tui::{
    AppController, CreditsScreen, GameScreen, HomeScreen, Screen, ScreenTransition, SetupDialog,
    move_cursor, run_tui, strike,
};

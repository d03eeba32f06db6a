//! Screen implementations for the screen state machine.

mod credits;
mod game;
mod home;

pub use credits::CreditsScreen;
pub use game::GameScreen;
pub use home::{HomeScreen, SetupDialog};

//! Who sits in each seat: display names and icons.
//!
//! Presentation-only data. The engine knows players as [`Player`] values
//! and never sees names.

use derive_getters::Getters;
use derive_more::{Display, Error};
use tictac_engine::Player;
use tracing::{debug, instrument};

/// Name shown for Player 1 when none was entered.
pub const DEFAULT_PLAYER1_NAME: &str = "Player 1";

/// Name shown for Player 2 when none was entered.
pub const DEFAULT_PLAYER2_NAME: &str = "Player 2";

/// How one player is shown on screen.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct PlayerProfile {
    display_name: String,
    icon: char,
}

/// Mapping from [`Player`] to [`PlayerProfile`].
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Roster {
    player1: PlayerProfile,
    player2: PlayerProfile,
}

impl Roster {
    /// Builds a roster, trimming names and substituting defaults for blank ones.
    #[instrument]
    pub fn new(player1: &str, player2: &str) -> Self {
        let roster = Self {
            player1: PlayerProfile {
                display_name: name_or_default(player1, DEFAULT_PLAYER1_NAME),
                icon: 'X',
            },
            player2: PlayerProfile {
                display_name: name_or_default(player2, DEFAULT_PLAYER2_NAME),
                icon: 'O',
            },
        };
        debug!(?roster, "Roster created");
        roster
    }

    /// Returns the profile for `player`.
    pub fn profile(&self, player: Player) -> &PlayerProfile {
        match player {
            Player::Player1 => &self.player1,
            Player::Player2 => &self.player2,
        }
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::new("", "")
    }
}

fn name_or_default(name: &str, default: &str) -> String {
    match name.trim() {
        "" => default.to_string(),
        trimmed => trimmed.to_string(),
    }
}

/// Setup dialog rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum SetupError {
    /// At least one name is blank.
    #[display("Please enter both names")]
    MissingNames,
}

/// Checks the names typed into the new-game dialog.
///
/// Both names must be non-empty after trimming. Returns the trimmed names.
#[instrument]
pub fn validate_names(player1: &str, player2: &str) -> Result<(String, String), SetupError> {
    let (player1, player2) = (player1.trim(), player2.trim());
    if player1.is_empty() || player2.is_empty() {
        debug!("Rejecting setup with a blank name");
        return Err(SetupError::MissingNames);
    }
    Ok((player1.to_string(), player2.to_string()))
}

//! Player identity and game outcomes.
//!
//! ## Player
//!
//! Exactly two players share the grid: RED and GREEN. The automated
//! opponent, when enabled, always plays RED.
//!
//! ## Winner
//!
//! Three-way outcome of a finished game. A game still in progress
//! carries `Option<Winner>::None`.

use serde::{Deserialize, Serialize};

/// One of the two competing players.
///
/// Serialized as `"red"` / `"green"` so saved games stay readable.
///
/// ```
/// use duel_2048::core::Player;
///
/// assert_eq!(Player::Red.opponent(), Player::Green);
/// assert_eq!(Player::Green.opponent(), Player::Red);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    Red,
    Green,
}

impl Player {
    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::Red => Player::Green,
            Player::Green => Player::Red,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::Red => write!(f, "red"),
            Player::Green => write!(f, "green"),
        }
    }
}

/// Outcome of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Winner {
    Red,
    Green,
    Draw,
}

impl Winner {
    /// Check whether a specific player won.
    #[must_use]
    pub const fn is_winner(self, player: Player) -> bool {
        matches!(
            (self, player),
            (Winner::Red, Player::Red) | (Winner::Green, Player::Green)
        )
    }
}

impl From<Player> for Winner {
    fn from(player: Player) -> Self {
        match player {
            Player::Red => Winner::Red,
            Player::Green => Winner::Green,
        }
    }
}

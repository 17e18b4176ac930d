//! The move engine: game state plus the slide-and-merge state machine.
//!
//! ## Key Types
//!
//! - `GameState`: grid + turn + scores + termination flags; the unit that
//!   is cloned for simulation and saved for resume
//! - `SavedGame`: serialized form of a `GameState`
//!
//! The move algorithm itself lives in `moves` as further methods on
//! `GameState` (`apply_move`, `moves_available`, `add_random_tile`).

pub mod moves;
pub mod state;

pub use state::{GameState, SavedGame, BOT_PLAYER, START_TILES, WINNING_TILE};

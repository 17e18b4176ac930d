//! # duel-2048
//!
//! Rules engine and opponent decision procedure for a two-player
//! competitive variant of 2048: RED and GREEN alternate turns sliding
//! tiles on a shared grid, merges score for the player whose turn it is,
//! a 2048 tile wins on the spot, and at exhaustion the larger max tile
//! wins (score as tiebreak, then draw).
//!
//! ## Design Principles
//!
//! 1. **Pure state transitions**: the move engine mutates exactly the
//!    `GameState` it is given. Simulation works on clones, never on the
//!    live game.
//!
//! 2. **Deterministic by seed**: all randomness flows through a forkable
//!    `GameRng`, so games, searches, and resumed sessions replay exactly.
//!
//! 3. **Capabilities over globals**: persistence and display are narrow
//!    traits injected into the session; the core schedules nothing and
//!    renders nothing itself.
//!
//! ## Modules
//!
//! - `core`: players, outcomes, coordinates, directions, RNG
//! - `grid`: tiles and the square grid container
//! - `engine`: `GameState` and the slide-and-merge move algorithm
//! - `policy`: one-ply heuristic search for the automated player
//! - `session`: driver-facing entry points, persistence, rendering
//!
//! ## Example
//!
//! ```
//! use duel_2048::session::{GameSession, MemoryStore, NullRenderer};
//!
//! let mut session = GameSession::new(4, true, 42, MemoryStore::new(), NullRenderer);
//!
//! // GREEN (the human) opens; 3 = left.
//! session.slide(3);
//!
//! // The driver decides when the bot thinks; the move itself is synchronous.
//! if session.is_bot_turn() {
//!     session.bot_move();
//! }
//! ```

pub mod core;
pub mod engine;
pub mod grid;
pub mod policy;
pub mod session;

// Re-export commonly used types
pub use crate::core::{Direction, GameRng, GameRngState, Player, Position, Winner};
pub use crate::engine::{GameState, SavedGame, BOT_PLAYER, START_TILES, WINNING_TILE};
pub use crate::grid::{Grid, GridSnapshot, Tile, TileSnapshot};
pub use crate::policy::OnePlyPolicy;
pub use crate::session::{GameSession, MemoryStore, NullRenderer, Persistence, RenderFrame, Renderer};

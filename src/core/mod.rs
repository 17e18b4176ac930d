//! Core types: players, outcomes, coordinates, directions, RNG.
//!
//! The fundamental building blocks shared by the grid, the move engine,
//! and the opponent policy.

pub mod direction;
pub mod player;
pub mod rng;

pub use direction::{Direction, Position};
pub use player::{Player, Winner};
pub use rng::{GameRng, GameRngState};

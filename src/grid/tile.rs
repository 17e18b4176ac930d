//! Tiles: the numbered pieces on the grid.
//!
//! A tile knows its value, its current coordinate, and which player owns
//! it. Two transient fields exist purely so a display layer can animate
//! the last move: `previous_position` (where the tile was before the
//! move) and `merged_from` (the two tiles that combined into this one).
//! Both are cleared at the start of every move and never serialized.

use serde::{Deserialize, Serialize};

use crate::core::{Player, Position};

/// A single numbered piece.
///
/// Owned by the grid cell it occupies; the stored `position` always
/// matches that cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tile {
    /// Current coordinate on the grid.
    pub position: Position,

    /// Tile value, a positive power of two.
    pub value: u32,

    /// The player who most recently created or merged into this tile.
    pub player: Player,

    /// Coordinate before the current move, for animation. Cleared (reset
    /// to the current position) when a move begins.
    pub previous_position: Option<Position>,

    /// The pair of tiles that combined into this one during the current
    /// move. The recorded tiles are plain value copies whose own
    /// `merged_from` is always `None`: a tile merges at most once per move.
    pub merged_from: Option<Box<[Tile; 2]>>,
}

impl Tile {
    /// Create a fresh tile with no move history.
    #[must_use]
    pub fn new(position: Position, value: u32, player: Player) -> Self {
        Self {
            position,
            value,
            player,
            previous_position: None,
            merged_from: None,
        }
    }

    /// Record the current position as the pre-move position.
    pub fn save_position(&mut self) {
        self.previous_position = Some(self.position);
    }

    /// Move the tile's recorded coordinate.
    pub fn update_position(&mut self, position: Position) {
        self.position = position;
    }

    /// Capture the persistent fields of this tile.
    #[must_use]
    pub fn snapshot(&self) -> TileSnapshot {
        TileSnapshot {
            x: self.position.x,
            y: self.position.y,
            value: self.value,
            player: self.player,
        }
    }
}

/// Serialized form of a tile: coordinate, value, owner.
///
/// Move-transient fields (`previous_position`, `merged_from`) are display
/// state and deliberately absent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileSnapshot {
    pub x: usize,
    pub y: usize,
    pub value: u32,
    pub player: Player,
}

impl From<&TileSnapshot> for Tile {
    fn from(snapshot: &TileSnapshot) -> Self {
        Tile::new(
            Position::new(snapshot.x, snapshot.y),
            snapshot.value,
            snapshot.player,
        )
    }
}

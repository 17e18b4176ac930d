//! Grid coordinates and slide directions.
//!
//! ## Coordinate convention
//!
//! `x` is the column, `y` is the row, both `0..size`. `(0, 0)` is the
//! top-left cell and `y` grows downward, so `Up` is the `(0, -1)` vector.
//!
//! ## Direction encoding
//!
//! External drivers address directions by index: 0 = up, 1 = right,
//! 2 = down, 3 = left. The input layer's "no direction" sentinel (-1) and
//! any out-of-range index map to `None` and are dropped silently upstream.

use serde::{Deserialize, Serialize};

/// A cell coordinate on the grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Column, `0..size`.
    pub x: usize,
    /// Row, `0..size`.
    pub y: usize,
}

impl Position {
    /// Create a position.
    #[must_use]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// The neighboring coordinate one step along `vector`, in signed space.
    ///
    /// Returned as `(i32, i32)` because the step may leave the grid;
    /// bounds are checked by [`crate::grid::Grid::within_bounds`].
    #[must_use]
    pub fn step(self, vector: (i32, i32)) -> (i32, i32) {
        (self.x as i32 + vector.0, self.y as i32 + vector.1)
    }
}

/// One of the four slide directions.
///
/// ```
/// use duel_2048::core::Direction;
///
/// assert_eq!(Direction::from_index(1), Some(Direction::Right));
/// assert_eq!(Direction::from_index(-1), None);
/// assert_eq!(Direction::Up.vector(), (0, -1));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// All directions in index order. Scans over this array give the
    /// deterministic 0,1,2,3 tie-break order the opponent policy relies on.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// Decode a driver-supplied direction index.
    ///
    /// Returns `None` for the -1 sentinel and anything else out of range.
    #[must_use]
    pub const fn from_index(index: i32) -> Option<Self> {
        match index {
            0 => Some(Direction::Up),
            1 => Some(Direction::Right),
            2 => Some(Direction::Down),
            3 => Some(Direction::Left),
            _ => None,
        }
    }

    /// The 0..=3 index of this direction.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Direction::Up => 0,
            Direction::Right => 1,
            Direction::Down => 2,
            Direction::Left => 3,
        }
    }

    /// Unit offset of tile travel for this direction.
    #[must_use]
    pub const fn vector(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Up => write!(f, "up"),
            Direction::Right => write!(f, "right"),
            Direction::Down => write!(f, "down"),
            Direction::Left => write!(f, "left"),
        }
    }
}

//! The grid: a fixed-size square container of optional tiles.
//!
//! Cells are stored as a flat `Vec<Option<Tile>>` indexed `x * size + y`,
//! the same column-major `cells[x][y]` addressing the rest of the engine
//! uses. Iteration order is therefore always x-outer, y-inner, which keeps
//! every full-grid scan deterministic.
//!
//! ## Invariants
//!
//! - Each occupied cell holds exactly one tile, and that tile's stored
//!   coordinate equals the cell coordinate.
//! - A grid is owned by exactly one game; simulation works on deep clones.

pub mod tile;

pub use tile::{Tile, TileSnapshot};

use serde::{Deserialize, Serialize};

use crate::core::{GameRng, Position};

/// Square container of optional tiles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Option<Tile>>,
}

impl Grid {
    /// Create an empty grid with the given side length.
    #[must_use]
    pub fn new(size: usize) -> Self {
        assert!(size >= 2, "Grid must be at least 2x2");
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    /// Rebuild a grid from its serialized cells.
    #[must_use]
    pub fn from_snapshot(snapshot: &GridSnapshot) -> Self {
        let mut grid = Grid::new(snapshot.size);
        for cell in snapshot.cells.iter().flatten() {
            grid.insert_tile(Tile::from(cell));
        }
        grid
    }

    /// Side length of the grid.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    fn index(&self, position: Position) -> usize {
        position.x * self.size + position.y
    }

    // === Placement ===

    /// Write a tile into the cell named by its own coordinate.
    ///
    /// Overwrites silently; callers guarantee the cell was empty or is
    /// being replaced intentionally (the merge path).
    pub fn insert_tile(&mut self, tile: Tile) {
        let index = self.index(tile.position);
        self.cells[index] = Some(tile);
    }

    /// Clear the cell at the given coordinate, returning its tile.
    pub fn remove_tile(&mut self, position: Position) -> Option<Tile> {
        let index = self.index(position);
        self.cells[index].take()
    }

    /// Relocate the tile at `from` to the empty cell `to`, updating the
    /// tile's recorded coordinate. No-op when `from` is empty.
    pub fn move_tile(&mut self, from: Position, to: Position) {
        if let Some(mut tile) = self.remove_tile(from) {
            tile.update_position(to);
            self.insert_tile(tile);
        }
    }

    // === Queries ===

    /// The tile at a coordinate, if any.
    #[must_use]
    pub fn cell_content(&self, position: Position) -> Option<&Tile> {
        self.cells[self.index(position)].as_ref()
    }

    /// Is the cell at this coordinate empty?
    #[must_use]
    pub fn cell_available(&self, position: Position) -> bool {
        self.cell_content(position).is_none()
    }

    /// Is any cell empty?
    #[must_use]
    pub fn cells_available(&self) -> bool {
        self.cells.iter().any(Option::is_none)
    }

    /// All empty coordinates, in x-outer, y-inner order.
    #[must_use]
    pub fn available_cells(&self) -> Vec<Position> {
        let mut cells = Vec::new();
        self.for_each_cell(|position, tile| {
            if tile.is_none() {
                cells.push(position);
            }
        });
        cells
    }

    /// Uniform random pick among the empty cells.
    ///
    /// Returns `None` when the grid is full; callers check
    /// [`cells_available`](Grid::cells_available) first.
    #[must_use]
    pub fn random_available_cell(&self, rng: &mut GameRng) -> Option<Position> {
        rng.choose(&self.available_cells()).copied()
    }

    /// Check a signed coordinate against the grid bounds and convert it.
    #[must_use]
    pub fn position_at(&self, (x, y): (i32, i32)) -> Option<Position> {
        if self.within_bounds((x, y)) {
            Some(Position::new(x as usize, y as usize))
        } else {
            None
        }
    }

    /// Is the signed coordinate on the grid?
    #[must_use]
    pub fn within_bounds(&self, (x, y): (i32, i32)) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.size && (y as usize) < self.size
    }

    // === Traversal ===

    /// Visit every cell in deterministic x-outer, y-inner order.
    pub fn for_each_cell(&self, mut visitor: impl FnMut(Position, Option<&Tile>)) {
        for x in 0..self.size {
            for y in 0..self.size {
                let position = Position::new(x, y);
                visitor(position, self.cell_content(position));
            }
        }
    }

    /// Visit every occupied cell mutably, in the same deterministic order.
    ///
    /// Used at the start of a move to reset the per-move transient fields.
    pub fn for_each_tile_mut(&mut self, mut visitor: impl FnMut(&mut Tile)) {
        for cell in &mut self.cells {
            if let Some(tile) = cell {
                visitor(tile);
            }
        }
    }

    /// Iterate over all tiles currently on the grid.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.cells.iter().flatten()
    }

    // === Serialization ===

    /// Capture size plus the flat cell list.
    #[must_use]
    pub fn snapshot(&self) -> GridSnapshot {
        GridSnapshot {
            size: self.size,
            cells: self
                .cells
                .iter()
                .map(|cell| cell.as_ref().map(Tile::snapshot))
                .collect(),
        }
    }
}

/// Serialized grid: side length plus one entry per cell in x-outer,
/// y-inner order, each either empty or `{x, y, value, player}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSnapshot {
    pub size: usize,
    pub cells: Vec<Option<TileSnapshot>>,
}

//! The slide-and-merge move algorithm.
//!
//! One call to [`GameState::apply_move`] is one complete move: slide every
//! tile as far as it goes, merge equal pairs (at most once per tile),
//! score the merges for the turn player, spawn one new tile, detect
//! termination, and hand the turn over. The traversal order is fixed so
//! the same state and direction always produce the same result.
//!
//! ## Traversal order
//!
//! Tiles farthest along the direction of travel are processed first; the
//! x and y visit sequences are `0..size`, reversed on an axis when the
//! direction vector's component on that axis is +1. That single rule is
//! what makes multi-tile slides converge in one pass and pins down which
//! pair merges when three equal tiles line up.

use crate::core::{Direction, Player, Position};
use crate::grid::Tile;

use super::state::{GameState, WINNING_TILE};

impl GameState {
    /// Slide all tiles in `direction` for the turn player.
    ///
    /// `forced` bypasses the bot-turn guard on the human input path; the
    /// opponent policy uses it to replay its chosen direction.
    ///
    /// Returns whether any tile changed coordinates. A `false` return is a
    /// no-op: no spawn, no turn switch, no termination check, and scores,
    /// deltas, and flags are untouched.
    pub fn apply_move(&mut self, direction: Direction, forced: bool) -> bool {
        if !forced && self.is_bot_turn() {
            return false;
        }
        if self.is_terminated() {
            return false;
        }

        let red_before = self.red_score;
        let green_before = self.green_score;

        self.prepare_tiles();

        let vector = direction.vector();
        let (xs, ys) = self.build_traversals(vector);
        let mut moved = false;

        for &x in &xs {
            for &y in &ys {
                let cell = Position::new(x, y);
                if self.grid.cell_available(cell) {
                    continue;
                }

                let (farthest, next) = self.find_farthest_position(cell, vector);
                let value = self.grid.cell_content(cell).map_or(0, |t| t.value);

                let merge_target = next
                    .and_then(|n| self.grid.cell_content(n))
                    // One merge per tile per move: a freshly merged tile
                    // cannot be merged into again.
                    .filter(|t| t.value == value && t.merged_from.is_none())
                    .map(|t| t.position);

                if let Some(target) = merge_target {
                    self.merge_tiles(cell, target);
                    moved = true;
                } else if farthest != cell {
                    self.grid.move_tile(cell, farthest);
                    moved = true;
                }
            }
        }

        if moved {
            self.add_random_tile(self.turn);
            self.recompute_max_tiles();

            self.red_score_change = self.red_score - red_before;
            self.green_score_change = self.green_score - green_before;

            if !self.moves_available() {
                self.winner = Some(self.exhaustion_winner());
                self.over = true;
            }

            self.turn = self.turn.opponent();
        }

        moved
    }

    /// Combine the tile at `cell` into the equal-valued tile at `target`.
    ///
    /// The merged tile belongs to the turn player regardless of who owned
    /// either source tile; capturing an opponent pair is a legitimate play
    /// and feeds the max-tile bookkeeping used at game over.
    fn merge_tiles(&mut self, cell: Position, target: Position) {
        let mut moving = self
            .grid
            .remove_tile(cell)
            .expect("merge source cell is occupied");
        let absorbed = self
            .grid
            .remove_tile(target)
            .expect("merge target cell is occupied");

        // Converge the source tile onto the target for animation.
        moving.update_position(target);

        let mut merged = Tile::new(target, moving.value * 2, self.turn);
        merged.merged_from = Some(Box::new([moving, absorbed]));
        let merged_value = merged.value;
        self.grid.insert_tile(merged);

        match self.turn {
            Player::Red => self.red_score += merged_value,
            Player::Green => self.green_score += merged_value,
        }

        // The mighty 2048 tile.
        if merged_value == WINNING_TILE {
            self.winner = Some(self.turn.into());
            self.won = true;
        }
    }

    /// Clear merge markers and save every tile's pre-move position.
    fn prepare_tiles(&mut self) {
        self.grid.for_each_tile_mut(|tile| {
            tile.merged_from = None;
            tile.save_position();
        });
    }

    /// Visit sequences for both axes, farthest-first along the direction
    /// of travel.
    fn build_traversals(&self, vector: (i32, i32)) -> (Vec<usize>, Vec<usize>) {
        let mut xs: Vec<usize> = (0..self.size).collect();
        let mut ys: Vec<usize> = (0..self.size).collect();

        if vector.0 == 1 {
            xs.reverse();
        }
        if vector.1 == 1 {
            ys.reverse();
        }

        (xs, ys)
    }

    /// Walk from `cell` along `vector` over empty cells.
    ///
    /// Returns the farthest empty position reachable and the first blocked
    /// in-bounds cell beyond it (`None` when the walk ran off the grid).
    fn find_farthest_position(
        &self,
        cell: Position,
        vector: (i32, i32),
    ) -> (Position, Option<Position>) {
        let mut previous = cell;

        loop {
            match self.grid.position_at(previous.step(vector)) {
                Some(next) if self.grid.cell_available(next) => previous = next,
                next => return (previous, next),
            }
        }
    }

    /// Spawn one random tile for `player`: 90% a 2, 10% a 4, uniformly at
    /// random among the empty cells. Silently skipped on a full grid.
    pub fn add_random_tile(&mut self, player: Player) {
        if !self.grid.cells_available() {
            return;
        }

        let value = if self.rng.gen_bool(0.9) { 2 } else { 4 };
        if let Some(cell) = self.grid.random_available_cell(&mut self.rng) {
            self.grid.insert_tile(Tile::new(cell, value, player));
        }
    }

    /// Rescan the grid for each player's largest tile.
    fn recompute_max_tiles(&mut self) {
        self.max_red = 0;
        self.max_green = 0;

        for tile in self.grid.tiles() {
            match tile.player {
                Player::Red => self.max_red = self.max_red.max(tile.value),
                Player::Green => self.max_green = self.max_green.max(tile.value),
            }
        }
    }

    /// Can any move still change the grid?
    #[must_use]
    pub fn moves_available(&self) -> bool {
        self.grid.cells_available() || self.tile_matches_available()
    }

    /// Do any two orthogonally adjacent cells hold equal tiles?
    #[must_use]
    pub fn tile_matches_available(&self) -> bool {
        for x in 0..self.size {
            for y in 0..self.size {
                let cell = Position::new(x, y);
                let Some(tile) = self.grid.cell_content(cell) else {
                    continue;
                };

                for direction in Direction::ALL {
                    let neighbor = self
                        .grid
                        .position_at(cell.step(direction.vector()))
                        .and_then(|n| self.grid.cell_content(n));

                    if neighbor.is_some_and(|other| other.value == tile.value) {
                        return true;
                    }
                }
            }
        }

        false
    }

    /// Winner at exhaustion: higher max tile, then higher score, then draw.
    fn exhaustion_winner(&self) -> crate::core::Winner {
        use crate::core::Winner;

        if self.max_green > self.max_red {
            Winner::Green
        } else if self.max_green < self.max_red {
            Winner::Red
        } else if self.red_score > self.green_score {
            Winner::Red
        } else if self.red_score < self.green_score {
            Winner::Green
        } else {
            Winner::Draw
        }
    }
}

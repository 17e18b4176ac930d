//! One-ply heuristic opponent policy.
//!
//! The automated player (RED) evaluates all four directions by simulating
//! one full move on a throwaway clone of the game, then picks the
//! direction with the strictly best resulting evaluation. "Strictly" is
//! load-bearing: the comparison starts from the evaluation of the
//! current, unmoved state, so a direction is chosen only when it beats
//! doing nothing. When no direction improves on standing still, the
//! policy falls back to the lowest-numbered direction that changes the
//! grid at all; when even that fails, there is no move to make.
//!
//! ## Evaluation
//!
//! `(own max tile × 300 + own score) − (opponent max tile × 300 +
//! opponent score) − adjacency potential`. The adjacency term charges the
//! acting player for every equal-valued neighbor pair left on the grid:
//! each is a merge the opponent may take next turn, so its would-be merge
//! value (doubled tile value, at the same ×300 weight) counts against the
//! position.

use smallvec::SmallVec;

use crate::core::{Direction, Player};
use crate::engine::GameState;
use crate::grid::Grid;

/// Weight of a max-tile point relative to a score point.
const MAX_TILE_WEIGHT: i64 = 300;

/// One-ply lookahead policy for the automated player.
#[derive(Clone, Copy, Debug, Default)]
pub struct OnePlyPolicy;

impl OnePlyPolicy {
    /// Pick a direction for the automated player, or `None` when no
    /// direction changes the grid.
    ///
    /// Takes `&mut GameState` because each candidate simulation forks the
    /// live RNG; the state is otherwise untouched. Returns `None` when
    /// invoked off-turn.
    pub fn choose(&self, state: &mut GameState) -> Option<Direction> {
        if !state.is_bot_turn() {
            return None;
        }

        let mut best_direction = None;
        let mut best_score = evaluate(state);
        let mut usable: SmallVec<[Direction; 4]> = SmallVec::new();

        for direction in Direction::ALL {
            let mut sim = state.clone_state();
            sim.apply_move(direction, true);

            // A direction that leaves it still the bot's turn was a no-op.
            if sim.is_bot_turn() {
                continue;
            }
            usable.push(direction);

            let score = evaluate(&sim);
            if score > best_score {
                best_direction = Some(direction);
                best_score = score;
            }
        }

        best_direction.or_else(|| usable.first().copied())
    }
}

/// Net evaluation of a position from the automated player's side.
#[must_use]
pub fn evaluate(state: &GameState) -> i64 {
    let own = position_score(state, Player::Red);
    let opponent = position_score(state, Player::Green);
    own - opponent - adjacency_potential(&state.grid)
}

fn position_score(state: &GameState, player: Player) -> i64 {
    i64::from(state.max_tile(player)) * MAX_TILE_WEIGHT + i64::from(state.score(player))
}

/// Total merge value left on the table: for every right-neighbor and
/// down-neighbor pair of equal tiles, the merged value at max-tile weight.
///
/// Only forward neighbors are counted so no pair is counted twice.
#[must_use]
pub fn adjacency_potential(grid: &Grid) -> i64 {
    let size = grid.size();
    let mut potential = 0;

    grid.for_each_cell(|position, tile| {
        let Some(tile) = tile else { return };

        for neighbor in [(position.x + 1, position.y), (position.x, position.y + 1)] {
            if neighbor.0 >= size || neighbor.1 >= size {
                continue;
            }
            let other = grid.cell_content(crate::core::Position::new(neighbor.0, neighbor.1));
            if other.is_some_and(|o| o.value == tile.value) {
                potential += i64::from(tile.value) * 2 * MAX_TILE_WEIGHT;
            }
        }
    });

    potential
}

//! Game state: the unit that is copied for simulation and saved for resume.
//!
//! `GameState` aggregates the grid, whose turn it is, both players' scores
//! and max tiles, and the termination flags. It is the only thing the move
//! engine mutates, which keeps every operation reentrant: the opponent
//! policy searches on [`clone_state`] copies and never touches the live
//! game until a direction is chosen.
//!
//! [`clone_state`]: GameState::clone_state

use serde::{Deserialize, Serialize};

use crate::core::{GameRng, GameRngState, Player, Winner};
use crate::grid::{Grid, GridSnapshot};

/// Number of starting tiles placed per player.
pub const START_TILES: usize = 1;

/// Merging up to this value wins the game on the spot.
pub const WINNING_TILE: u32 = 2048;

/// The automated player in bot games.
pub const BOT_PLAYER: Player = Player::Red;

/// Complete state of one game in progress.
#[derive(Clone, Debug)]
pub struct GameState {
    /// Side length of the grid.
    pub size: usize,

    /// The shared grid.
    pub grid: Grid,

    /// Whose move is currently being applied.
    pub turn: Player,

    /// No legal moves remain; the winner has been determined.
    pub over: bool,

    /// A 2048 tile was merged.
    pub won: bool,

    /// Set when the game ends, by either the 2048 merge or exhaustion.
    pub winner: Option<Winner>,

    /// RED's accumulated merge score. Monotonically non-decreasing.
    pub red_score: u32,

    /// GREEN's accumulated merge score. Monotonically non-decreasing.
    pub green_score: u32,

    /// Largest RED-owned tile currently on the grid.
    pub max_red: u32,

    /// Largest GREEN-owned tile currently on the grid.
    pub max_green: u32,

    /// RED's score delta from the most recent grid-changing move.
    pub red_score_change: u32,

    /// GREEN's score delta from the most recent grid-changing move.
    pub green_score_change: u32,

    /// Whether RED is the automated player. Fixed at game creation.
    pub play_with_bot: bool,

    /// Deterministic RNG driving tile spawns.
    pub rng: GameRng,
}

impl GameState {
    /// Start a fresh game: empty grid, one RED then one GREEN start tile,
    /// GREEN to move.
    #[must_use]
    pub fn new(size: usize, play_with_bot: bool, seed: u64) -> Self {
        let mut state = Self {
            size,
            grid: Grid::new(size),
            turn: Player::Green,
            over: false,
            won: false,
            winner: None,
            red_score: 0,
            green_score: 0,
            max_red: 0,
            max_green: 0,
            red_score_change: 0,
            green_score_change: 0,
            play_with_bot,
            rng: GameRng::new(seed),
        };

        for _ in 0..START_TILES {
            state.add_random_tile(Player::Red);
            state.add_random_tile(Player::Green);
        }

        state
    }

    /// True once the game has ended, by win or exhaustion.
    ///
    /// A terminated state accepts no further moves until restart.
    #[must_use]
    pub fn is_terminated(&self) -> bool {
        self.over || self.winner.is_some()
    }

    /// Is it the automated player's turn to act?
    #[must_use]
    pub fn is_bot_turn(&self) -> bool {
        self.play_with_bot && self.turn == BOT_PLAYER
    }

    /// A player's accumulated merge score.
    #[must_use]
    pub fn score(&self, player: Player) -> u32 {
        match player {
            Player::Red => self.red_score,
            Player::Green => self.green_score,
        }
    }

    /// A player's largest tile currently on the grid.
    #[must_use]
    pub fn max_tile(&self, player: Player) -> u32 {
        match player {
            Player::Red => self.max_red,
            Player::Green => self.max_green,
        }
    }

    /// Full-value copy for simulation.
    ///
    /// The grid is deep-cloned and the RNG forked, so a simulated move's
    /// spawn neither mutates the live game nor consumes its next spawn.
    /// Takes `&mut self` because forking advances the fork counter.
    #[must_use]
    pub fn clone_state(&mut self) -> Self {
        Self {
            size: self.size,
            grid: self.grid.clone(),
            turn: self.turn,
            over: self.over,
            won: self.won,
            winner: self.winner,
            red_score: self.red_score,
            green_score: self.green_score,
            max_red: self.max_red,
            max_green: self.max_green,
            red_score_change: self.red_score_change,
            green_score_change: self.green_score_change,
            play_with_bot: self.play_with_bot,
            rng: self.rng.fork(),
        }
    }

    // === Serialization ===

    /// Capture this game for persistence.
    #[must_use]
    pub fn save(&self) -> SavedGame {
        SavedGame {
            size: self.size,
            grid: self.grid.snapshot(),
            over: self.over,
            won: self.won,
            turn: self.turn,
            winner: self.winner,
            red_score: self.red_score,
            green_score: self.green_score,
            max_red: self.max_red,
            max_green: self.max_green,
            red_score_change: self.red_score_change,
            green_score_change: self.green_score_change,
            play_with_bot: self.play_with_bot,
            rng: self.rng.state(),
        }
    }

    /// Resume a game from a saved capture.
    ///
    /// A loaded state is assumed well-formed; malformed persisted data is
    /// the persistence collaborator's concern.
    #[must_use]
    pub fn from_saved(saved: &SavedGame) -> Self {
        Self {
            size: saved.size,
            grid: Grid::from_snapshot(&saved.grid),
            turn: saved.turn,
            over: saved.over,
            won: saved.won,
            winner: saved.winner,
            red_score: saved.red_score,
            green_score: saved.green_score,
            max_red: saved.max_red,
            max_green: saved.max_green,
            red_score_change: saved.red_score_change,
            green_score_change: saved.green_score_change,
            play_with_bot: saved.play_with_bot,
            rng: GameRng::from_state(&saved.rng),
        }
    }
}

/// Serialized form of a [`GameState`]: the descriptive scalars, the grid as
/// size + flat cell list, and the RNG checkpoint so a resumed game
/// continues the same spawn sequence.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedGame {
    pub size: usize,
    pub grid: GridSnapshot,
    pub over: bool,
    pub won: bool,
    pub turn: Player,
    pub winner: Option<Winner>,
    pub red_score: u32,
    pub green_score: u32,
    pub max_red: u32,
    pub max_green: u32,
    pub red_score_change: u32,
    pub green_score_change: u32,
    pub play_with_bot: bool,
    pub rng: GameRngState,
}

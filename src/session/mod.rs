//! Game sessions: the driver-facing surface of the core.
//!
//! A `GameSession` owns one live [`GameState`] plus the two injected
//! capabilities the core consumes: a [`Persistence`] store and a
//! [`Renderer`]. The session is what an input layer talks to — it gates
//! human moves, replays the opponent policy's choice, and pushes a render
//! notification plus a save (or clear, once the game is over) after every
//! state-changing move.
//!
//! Scheduling is deliberately absent: `is_bot_turn` and `bot_move` are
//! separate synchronous operations, and *when* the bot moves relative to
//! rendering is the driver's decision.

pub mod store;

pub use store::{MemoryStore, Persistence};

use crate::core::{Direction, Player, Winner};
use crate::engine::{GameState, SavedGame};
use crate::grid::Grid;
use crate::policy::OnePlyPolicy;

/// Storage key for bot games.
const BOT_STORAGE_KEY: &str = "gameStateBot";

/// Storage key for two-human games.
const HUMAN_STORAGE_KEY: &str = "gameState";

/// Descriptive fields pushed to the renderer alongside the grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderFrame {
    pub over: bool,
    pub won: bool,
    pub terminated: bool,
    pub turn: Player,
    pub winner: Option<Winner>,
    pub red_score: u32,
    pub green_score: u32,
    pub max_red: u32,
    pub max_green: u32,
    pub red_score_change: u32,
    pub green_score_change: u32,
    pub play_with_bot: bool,
}

impl RenderFrame {
    fn of(state: &GameState) -> Self {
        Self {
            over: state.over,
            won: state.won,
            terminated: state.is_terminated(),
            turn: state.turn,
            winner: state.winner,
            red_score: state.red_score,
            green_score: state.green_score,
            max_red: state.max_red,
            max_green: state.max_green,
            red_score_change: state.red_score_change,
            green_score_change: state.green_score_change,
            play_with_bot: state.play_with_bot,
        }
    }
}

/// Display capability: one notification per state change.
///
/// The core makes no assumption about what the implementation does with
/// the grid; a test renderer may simply record the frames.
pub trait Renderer {
    fn render(&mut self, grid: &Grid, frame: &RenderFrame);
}

/// Renderer that discards every notification.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render(&mut self, _grid: &Grid, _frame: &RenderFrame) {}
}

/// One live game wired to its persistence and display collaborators.
pub struct GameSession<P: Persistence, R: Renderer> {
    state: GameState,
    store: P,
    renderer: R,
    policy: OnePlyPolicy,
}

impl<P: Persistence, R: Renderer> GameSession<P, R> {
    /// Open a session: resume the saved game for this mode when the store
    /// has one, otherwise start fresh. Renders once either way.
    pub fn new(size: usize, play_with_bot: bool, seed: u64, store: P, renderer: R) -> Self {
        let key = storage_key(play_with_bot);
        let state = match store.load(key) {
            Some(saved) => GameState::from_saved(&saved),
            None => GameState::new(size, play_with_bot, seed),
        };

        let mut session = Self {
            state,
            store,
            renderer,
            policy: OnePlyPolicy,
        };
        session.actuate();
        session
    }

    /// The live state, read-only. Drivers inspect this to detect no-ops
    /// and termination.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Storage key for this session's mode.
    #[must_use]
    pub fn storage_key(&self) -> &'static str {
        storage_key(self.state.play_with_bot)
    }

    /// Human input path: slide in the direction named by `index`.
    ///
    /// The -1 sentinel, out-of-range indices, moves during the bot's
    /// turn, and moves after termination are all silent no-ops. Returns
    /// whether the grid changed.
    pub fn slide(&mut self, index: i32) -> bool {
        match Direction::from_index(index) {
            Some(direction) => self.apply(direction, false),
            None => false,
        }
    }

    /// Is it the automated player's turn?
    #[must_use]
    pub fn is_bot_turn(&self) -> bool {
        self.state.is_bot_turn()
    }

    /// Compute and apply the automated player's move now.
    ///
    /// Returns the direction played, or `None` when it is not the bot's
    /// turn or no direction changes the grid.
    pub fn bot_move(&mut self) -> Option<Direction> {
        let direction = self.policy.choose(&mut self.state)?;
        self.apply(direction, true);
        Some(direction)
    }

    /// Clear the saved game and start over in the same mode.
    ///
    /// The fresh game's seed is forked from the old RNG, so restarting is
    /// deterministic per session without replaying the same opening.
    pub fn restart(&mut self) {
        let key = self.storage_key();
        self.store.clear(key);

        let seed = self.state.rng.fork().state().seed;
        self.state = GameState::new(self.state.size, self.state.play_with_bot, seed);
        self.actuate();
    }

    fn apply(&mut self, direction: Direction, forced: bool) -> bool {
        let moved = self.state.apply_move(direction, forced);
        if moved {
            self.actuate();
        }
        moved
    }

    /// Persist and render the current state.
    ///
    /// A finished (`over`) game is cleared from the store rather than
    /// saved; a won game stays saved so the final board survives reload.
    fn actuate(&mut self) {
        let key = self.storage_key();
        if self.state.over {
            self.store.clear(key);
        } else {
            self.store.save(key, &self.state.save());
        }

        let frame = RenderFrame::of(&self.state);
        self.renderer.render(&self.state.grid, &frame);
    }
}

fn storage_key(play_with_bot: bool) -> &'static str {
    if play_with_bot {
        BOT_STORAGE_KEY
    } else {
        HUMAN_STORAGE_KEY
    }
}

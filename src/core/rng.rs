//! Deterministic random number generation with forking for simulation.
//!
//! Tile spawning is the only source of randomness in the game, but it has
//! to satisfy three callers at once:
//!
//! - **Live games**: same seed, same spawn sequence, reproducible games.
//! - **Opponent search**: cloning the state for a simulated move must not
//!   advance the live game's spawn sequence, so clones get a [`fork`].
//! - **Persistence**: a resumed game continues the exact spawn sequence it
//!   would have produced without the save/load round-trip, via O(1)
//!   [`state`]/[`from_state`] checkpointing.
//!
//! [`fork`]: GameRng::fork
//! [`state`]: GameRng::state
//! [`from_state`]: GameRng::from_state

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Deterministic, forkable RNG backing tile spawns.
///
/// ChaCha8 keeps the stream position as a plain counter, which is what
/// makes checkpointing O(1) no matter how many values were drawn.
///
/// ```
/// use duel_2048::core::GameRng;
///
/// let mut rng = GameRng::new(42);
/// let mut sim = rng.fork();
///
/// // Forks are independent branches: drawing from one leaves the other
/// // untouched, and the same fork counter always yields the same branch.
/// let mut rng2 = GameRng::new(42);
/// let mut sim2 = rng2.fork();
/// assert_eq!(sim.gen_range_usize(0..1000), sim2.gen_range_usize(0..1000));
/// ```
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Fork this RNG to create an independent branch.
    ///
    /// Each fork produces a different but deterministic sequence. Used when
    /// cloning a state for a simulated move, so the simulation's spawn does
    /// not consume the live game's next spawn.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self
            .seed
            .wrapping_add(self.fork_counter.wrapping_mul(0x9E37_79B9_7F4A_7C15));
        Self {
            inner: ChaCha8Rng::seed_from_u64(fork_seed),
            seed: fork_seed,
            fork_counter: 0,
        }
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Generate a random boolean with given probability of true.
    ///
    /// The spawn-value draw: `gen_bool(0.9)` picks a 2, otherwise a 4.
    pub fn gen_bool(&mut self, probability: f64) -> bool {
        self.inner.gen_bool(probability)
    }

    /// Choose a uniform random element from a slice.
    ///
    /// Returns `None` for an empty slice; the spawn-cell pick over the
    /// empty cells of the grid.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }

    /// Capture the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
            fork_counter: self.fork_counter,
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
            fork_counter: state.fork_counter,
        }
    }
}

/// Serializable RNG checkpoint, carried inside a saved game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed.
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter).
    pub word_pos: u128,
    /// Fork counter for deterministic branching.
    pub fork_counter: u64,
}

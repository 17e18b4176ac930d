//! Persistence capability for saved games.
//!
//! The core never talks to a storage medium directly; it is handed a
//! `Persistence` implementation at construction and calls it at setup,
//! after every state-changing move, and on restart. Stores deal in
//! [`SavedGame`] values keyed by string; how (or whether) the bytes reach
//! a durable medium is the store's business.

use rustc_hash::FxHashMap;

use crate::engine::SavedGame;

/// Narrow storage contract consumed by [`GameSession`](super::GameSession).
pub trait Persistence {
    /// Fetch the saved game under `key`, or `None` when absent or
    /// unreadable. A corrupt entry is treated as absent; the core then
    /// starts a fresh game.
    fn load(&self, key: &str) -> Option<SavedGame>;

    /// Store a saved game under `key`, replacing any previous entry.
    fn save(&mut self, key: &str, state: &SavedGame);

    /// Drop the entry under `key`, if any.
    fn clear(&mut self, key: &str);
}

/// In-memory store: bincode-encoded entries in a hash map.
///
/// The stand-in used when no durable storage is wired up, and the store
/// every test runs against. Encoding through bincode keeps the contract
/// honest: what comes back out went through the full serialization
/// round-trip, not a shared reference.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: FxHashMap<String, Vec<u8>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Is the store empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Persistence for MemoryStore {
    fn load(&self, key: &str) -> Option<SavedGame> {
        let bytes = self.entries.get(key)?;
        bincode::deserialize(bytes).ok()
    }

    fn save(&mut self, key: &str, state: &SavedGame) {
        if let Ok(bytes) = bincode::serialize(state) {
            self.entries.insert(key.to_string(), bytes);
        }
    }

    fn clear(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

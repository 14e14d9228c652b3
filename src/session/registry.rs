//! Session registry: one game per chat channel (or any other key).
//!
//! The registry belongs to the adapter. Each session sits behind its own
//! mutex so a whole command (check phase, reveal, resolve) runs as one
//! critical section.

use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use rustc_hash::FxHashMap;
use tracing::info;

use super::game::GameSession;
use crate::board::WordDeck;
use crate::core::{GameRng, Result, SessionConfig};

/// A session shared between command handlers.
pub type SharedSession = Arc<Mutex<GameSession>>;

/// Lock a shared session.
///
/// Engine operations never leave a session half-updated, so a poisoned
/// lock is recovered instead of propagated.
pub fn lock(session: &SharedSession) -> MutexGuard<'_, GameSession> {
    session.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Maps session keys to live games.
///
/// Holds the word deck loaded once for every session, and a master RNG
/// whose forks seed new sessions.
///
/// ## Example
///
/// ```
/// use std::sync::Arc;
/// use codenames_engine::board::WordDeck;
/// use codenames_engine::core::SessionConfig;
/// use codenames_engine::session::{lock, Phase, SessionRegistry};
///
/// let words: Vec<String> = (0..30).map(|i| format!("w{i}")).collect();
/// let mut registry = SessionRegistry::new(Arc::new(WordDeck::new(words).unwrap()), SessionConfig::default());
///
/// let game = registry.get_or_create("#codenames");
/// assert_eq!(lock(&game).phase(), Phase::Setup);
/// assert_eq!(registry.len(), 1);
/// ```
#[derive(Debug)]
pub struct SessionRegistry {
    deck: Arc<WordDeck>,
    config: SessionConfig,
    rng: GameRng,
    sessions: FxHashMap<String, SharedSession>,
}

impl SessionRegistry {
    #[must_use]
    pub fn new(deck: Arc<WordDeck>, config: SessionConfig) -> Self {
        let rng = GameRng::from_seed_or_entropy(config.seed);
        Self {
            deck,
            config,
            rng,
            sessions: FxHashMap::default(),
        }
    }

    /// Load the deck from disk and build an empty registry.
    pub fn from_deck_file(path: impl AsRef<Path>, config: SessionConfig) -> Result<Self> {
        let deck = WordDeck::load(path)?;
        Ok(Self::new(Arc::new(deck), config))
    }

    #[must_use]
    pub fn deck(&self) -> &Arc<WordDeck> {
        &self.deck
    }

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    fn spawn(&mut self) -> SharedSession {
        let rng = self.rng.fork();
        Arc::new(Mutex::new(GameSession::with_rng(
            Arc::clone(&self.deck),
            self.config.clone(),
            rng,
        )))
    }

    /// The session for `key`, created in `Setup` if missing.
    pub fn get_or_create(&mut self, key: &str) -> SharedSession {
        if let Some(session) = self.sessions.get(key) {
            return Arc::clone(session);
        }
        let session = self.spawn();
        self.sessions.insert(key.to_string(), Arc::clone(&session));
        info!(key, "session created");
        session
    }

    /// Replace the session for `key` with a fresh one.
    pub fn setup(&mut self, key: &str) -> SharedSession {
        let session = self.spawn();
        self.sessions.insert(key.to_string(), Arc::clone(&session));
        info!(key, "session set up");
        session
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<SharedSession> {
        self.sessions.get(key).cloned()
    }

    /// Discard a session, e.g. after an inactivity timeout.
    pub fn remove(&mut self, key: &str) -> Option<SharedSession> {
        let removed = self.sessions.remove(key);
        if removed.is_some() {
            info!(key, "session removed");
        }
        removed
    }

    /// Run `f` against the session for `key` while holding its lock.
    pub fn with_session<R>(&mut self, key: &str, f: impl FnOnce(&mut GameSession) -> R) -> R {
        let session = self.get_or_create(key);
        let mut guard = lock(&session);
        f(&mut guard)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.sessions.keys().map(String::as_str)
    }
}

//! Session state.
//!
//! A [`Session`] owns everything that must not leak between users: the
//! used-set store, the draw history, starred prompts and the seed text. It is
//! an explicit value passed to the service, never a global. Hosts serving
//! several users keep one session per user in a [`SessionRegistry`]; handing
//! out `&mut Session` keeps each session to one writer at a time.

mod history;
mod store;

pub use history::{Favorites, HistoryEntry, SessionHistory};
pub use store::{InMemoryUsedSetStore, UsedSetStore};

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use uuid::Uuid;

/// Unique session identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    /// Wraps an existing identifier (for example a web session cookie).
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generates a random identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SessionId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// State for one user session.
///
/// Generic over the used-set backend; the default keeps it in memory.
#[derive(Debug, Clone)]
pub struct Session<S: UsedSetStore = InMemoryUsedSetStore> {
    id: SessionId,
    used: S,
    history: SessionHistory,
    favorites: Favorites,
    seed_text: String,
}

impl Session {
    /// Creates a session with a fresh identifier and empty state.
    #[must_use]
    pub fn new() -> Self {
        Self::with_id(SessionId::generate())
    }

    /// Creates an empty session with the given identifier.
    #[must_use]
    pub fn with_id(id: SessionId) -> Self {
        Self::with_store(id, InMemoryUsedSetStore::new())
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: UsedSetStore> Session<S> {
    /// Creates a session backed by a custom used-set store.
    pub fn with_store(id: SessionId, used: S) -> Self {
        tracing::debug!(session_id = %id, "Session started");
        Self {
            id,
            used,
            history: SessionHistory::new(),
            favorites: Favorites::new(),
            seed_text: String::new(),
        }
    }

    /// Returns the session identifier.
    #[must_use]
    pub const fn id(&self) -> &SessionId {
        &self.id
    }

    /// Returns the used-set store.
    #[must_use]
    pub const fn used(&self) -> &S {
        &self.used
    }

    /// Returns the used-set store mutably.
    pub const fn used_mut(&mut self) -> &mut S {
        &mut self.used
    }

    /// Forgets every served prompt in every mode and level.
    ///
    /// History and favorites are kept.
    pub fn reset_used(&mut self) {
        self.used.reset_all();
        tracing::info!(session_id = %self.id, "Reset used prompts");
        metrics::counter!("session_resets_total").increment(1);
    }

    /// Returns the draw history.
    #[must_use]
    pub const fn history(&self) -> &SessionHistory {
        &self.history
    }

    /// Returns the draw history mutably.
    pub const fn history_mut(&mut self) -> &mut SessionHistory {
        &mut self.history
    }

    /// Returns the starred prompts.
    #[must_use]
    pub const fn favorites(&self) -> &Favorites {
        &self.favorites
    }

    /// Returns the starred prompts mutably.
    pub const fn favorites_mut(&mut self) -> &mut Favorites {
        &mut self.favorites
    }

    /// Returns the seed text the user entered, empty if none.
    #[must_use]
    pub fn seed_text(&self) -> &str {
        &self.seed_text
    }

    /// Sets the seed text.
    pub fn set_seed_text(&mut self, seed: impl Into<String>) {
        self.seed_text = seed.into();
    }

    /// Returns the seed text as optional seed material.
    #[must_use]
    pub fn seed_material(&self) -> Option<&str> {
        Some(self.seed_text.as_str()).filter(|s| !s.is_empty())
    }
}

/// Sessions keyed by identifier.
///
/// Each session's state is independent; nothing is shared between entries.
#[derive(Debug, Default)]
pub struct SessionRegistry {
    sessions: HashMap<SessionId, Session>,
}

impl SessionRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the session for `id`, creating it on first use.
    pub fn get_or_create(&mut self, id: &SessionId) -> &mut Session {
        self.sessions
            .entry(id.clone())
            .or_insert_with(|| Session::with_id(id.clone()))
    }

    /// Returns the session for `id` if it exists.
    pub fn get_mut(&mut self, id: &SessionId) -> Option<&mut Session> {
        self.sessions.get_mut(id)
    }

    /// Ends a session, dropping its state.
    pub fn end(&mut self, id: &SessionId) -> Option<Session> {
        let removed = self.sessions.remove(id);
        if removed.is_some() {
            tracing::debug!(session_id = %id, "Session ended");
        }
        removed
    }

    /// Returns the number of live sessions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Returns true if there are no live sessions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

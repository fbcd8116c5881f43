//! Used-set storage.
//!
//! Records which item identities have already been served, per
//! [`DedupKey`]. The record only grows; the one way to shrink it is a
//! whole-store reset.

use crate::models::{DedupKey, ItemHash};
use std::collections::{HashMap, HashSet};

/// Trait for used-set storage backends.
///
/// A backend only needs get/insert/delete-all semantics keyed by
/// [`DedupKey`], so it can sit on top of whatever key-value store a host
/// keeps per user session. Individual entries are never removed.
pub trait UsedSetStore {
    /// Returns the used set for a key, creating an empty one on first access.
    fn get_used(&mut self, key: &DedupKey) -> &HashSet<ItemHash>;

    /// Marks one item identity as used under a key.
    fn mark_used(&mut self, key: &DedupKey, hash: ItemHash);

    /// Clears every key.
    fn reset_all(&mut self);
}

/// In-memory used-set store owned by a single session.
///
/// Not persisted; dropped with its session.
#[derive(Debug, Default, Clone)]
pub struct InMemoryUsedSetStore {
    used: HashMap<DedupKey, HashSet<ItemHash>>,
}

impl InMemoryUsedSetStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns how many identities are recorded under a key.
    #[must_use]
    pub fn used_count(&self, key: &DedupKey) -> usize {
        self.used.get(key).map_or(0, HashSet::len)
    }

    /// Returns true if the identity has been served under the key.
    #[must_use]
    pub fn is_used(&self, key: &DedupKey, hash: ItemHash) -> bool {
        self.used.get(key).is_some_and(|set| set.contains(&hash))
    }

    /// Returns the number of keys with a (possibly empty) set.
    #[must_use]
    pub fn key_count(&self) -> usize {
        self.used.len()
    }

    /// Returns true if no key has been touched since creation or reset.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.used.is_empty()
    }
}

impl UsedSetStore for InMemoryUsedSetStore {
    fn get_used(&mut self, key: &DedupKey) -> &HashSet<ItemHash> {
        self.used.entry(key.clone()).or_default()
    }

    fn mark_used(&mut self, key: &DedupKey, hash: ItemHash) {
        self.used.entry(key.clone()).or_default().insert(hash);
    }

    fn reset_all(&mut self) {
        let keys = self.used.len();
        self.used.clear();
        tracing::debug!(keys, "Cleared used-set store");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_used_creates_empty_set() {
        let mut store = InMemoryUsedSetStore::new();
        let key = DedupKey::from("aa36:beginner");

        assert!(store.is_empty());
        assert!(store.get_used(&key).is_empty());
        assert_eq!(store.key_count(), 1);

        // Idempotent
        assert!(store.get_used(&key).is_empty());
        assert_eq!(store.key_count(), 1);
    }

    #[test]
    fn test_mark_used_creates_key() {
        let mut store = InMemoryUsedSetStore::new();
        let key = DedupKey::from("villain:criminal");

        store.mark_used(&key, ItemHash::from_raw(7));

        assert_eq!(store.used_count(&key), 1);
        assert!(store.is_used(&key, ItemHash::from_raw(7)));
        assert!(store.get_used(&key).contains(&ItemHash::from_raw(7)));
    }

    #[test]
    fn test_mark_used_is_set_semantics() {
        let mut store = InMemoryUsedSetStore::new();
        let key = DedupKey::from("k");

        store.mark_used(&key, ItemHash::from_raw(1));
        store.mark_used(&key, ItemHash::from_raw(1));

        assert_eq!(store.used_count(&key), 1);
    }

    #[test]
    fn test_keys_are_isolated() {
        let mut store = InMemoryUsedSetStore::new();
        let a = DedupKey::from("A:beginner");
        let b = DedupKey::from("B:advanced");

        store.mark_used(&a, ItemHash::from_raw(42));

        assert!(store.is_used(&a, ItemHash::from_raw(42)));
        assert!(!store.is_used(&b, ItemHash::from_raw(42)));
        assert!(store.get_used(&b).is_empty());
    }

    #[test]
    fn test_reset_all_clears_every_key() {
        let mut store = InMemoryUsedSetStore::new();
        let a = DedupKey::from("a");
        let b = DedupKey::from("b");
        store.mark_used(&a, ItemHash::from_raw(1));
        store.mark_used(&b, ItemHash::from_raw(2));

        store.reset_all();

        assert!(store.is_empty());
        assert_eq!(store.used_count(&a), 0);
        assert_eq!(store.used_count(&b), 0);
    }
}

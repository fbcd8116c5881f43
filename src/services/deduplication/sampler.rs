//! Deduplicating sampler.
//!
//! Draws a batch from a pool while skipping items already served under the
//! same [`DedupKey`]. When too few unused items remain, the batch is topped
//! up from the whole pool so the caller still gets a full batch, never with a
//! repeat inside the batch itself.

use crate::models::{ContentIdentity, DedupKey, ItemHash};
use crate::session::UsedSetStore;
use rand::Rng;
use rand::seq::index;
use std::collections::HashSet;
use tracing::instrument;

/// Samples up to `n` items from `pool` for `key`, recording them as used.
///
/// # How it works
///
/// 1. Collects unused candidates (first occurrence per identity).
/// 2. If at least `n` remain, draws `n` of them without replacement.
/// 3. Otherwise takes every candidate, then draws from a copy of the full
///    pool, keeping each pick only if it is not already in the batch, until
///    the batch holds `n` items or the copy is empty.
/// 4. Marks every returned item as used under `key`.
///
/// Items come back in draw order. If the pool holds fewer than `n` distinct
/// items the result is short; an empty pool yields an empty result.
///
/// # Example
///
/// ```rust
/// use icebreaker::services::deduplication::sample;
/// use icebreaker::{DedupKey, InMemoryUsedSetStore};
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let pool = ["a", "b", "c", "d"];
/// let key = DedupKey::from("k");
/// let mut store = InMemoryUsedSetStore::new();
/// let mut rng = ChaCha8Rng::seed_from_u64(42);
///
/// let first = sample(&pool, 3, &mut rng, &key, &mut store);
/// assert_eq!(first.len(), 3);
///
/// let second = sample(&pool, 1, &mut rng, &key, &mut store);
/// assert!(!first.contains(&second[0]));
/// ```
#[instrument(
    skip(pool, rng, store),
    fields(operation = "sample", pool_size = pool.len(), dedup_key = %key)
)]
pub fn sample<T, R, S>(pool: &[T], n: usize, rng: &mut R, key: &DedupKey, store: &mut S) -> Vec<T>
where
    T: ContentIdentity + Clone,
    R: Rng + ?Sized,
    S: UsedSetStore + ?Sized,
{
    let used = store.get_used(key);
    let mut seen_candidates = HashSet::new();
    let candidates: Vec<&T> = pool
        .iter()
        .filter(|item| {
            let hash = item.content_hash();
            !used.contains(&hash) && seen_candidates.insert(hash)
        })
        .collect();

    let chosen: Vec<T> = if candidates.len() >= n {
        index::sample(rng, candidates.len(), n)
            .into_iter()
            .map(|idx| candidates[idx].clone())
            .collect()
    } else {
        tracing::debug!(
            candidates = candidates.len(),
            requested = n,
            "Unused pool exhausted, refilling from full pool"
        );
        metrics::counter!("sampler_refill_total").increment(1);
        refill_from_pool(pool, candidates, n, rng)
    };

    for item in &chosen {
        store.mark_used(key, item.content_hash());
    }

    if chosen.len() < n {
        tracing::debug!(
            returned = chosen.len(),
            requested = n,
            "Pool smaller than requested batch, returning short"
        );
    }
    metrics::counter!("prompts_sampled_total").increment(u64::try_from(chosen.len()).unwrap_or(0));

    chosen
}

/// Tops up `candidates` with random picks from the whole pool.
///
/// Each pick leaves the refill set whether or not it is accepted, so the loop
/// ends after at most `pool.len()` iterations.
fn refill_from_pool<T, R>(pool: &[T], candidates: Vec<&T>, n: usize, rng: &mut R) -> Vec<T>
where
    T: ContentIdentity + Clone,
    R: Rng + ?Sized,
{
    let mut chosen: Vec<T> = candidates.into_iter().cloned().collect();
    let mut in_batch: HashSet<ItemHash> = chosen.iter().map(ContentIdentity::content_hash).collect();
    let mut refill: Vec<&T> = pool.iter().collect();

    while chosen.len() < n && !refill.is_empty() {
        let pick = refill.remove(rng.random_range(0..refill.len()));
        if in_batch.insert(pick.content_hash()) {
            chosen.push(pick.clone());
        }
    }

    chosen
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::InMemoryUsedSetStore;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    const POOL: [&str; 4] = ["a", "b", "c", "d"];

    fn distinct(items: &[&str]) -> bool {
        let set: HashSet<_> = items.iter().collect();
        set.len() == items.len()
    }

    #[test]
    fn test_draws_requested_count() {
        let mut store = InMemoryUsedSetStore::new();
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let key = DedupKey::from("k");

        let chosen = sample(&POOL, 3, &mut rng, &key, &mut store);

        assert_eq!(chosen.len(), 3);
        assert!(distinct(&chosen));
        assert_eq!(store.used_count(&key), 3);
    }

    #[test]
    fn test_remaining_item_served_next() {
        let mut store = InMemoryUsedSetStore::new();
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let key = DedupKey::from("k");

        let first = sample(&POOL, 3, &mut rng, &key, &mut store);
        let leftover: Vec<&str> = POOL.iter().copied().filter(|s| !first.contains(s)).collect();
        assert_eq!(leftover.len(), 1);

        let second = sample(&POOL, 1, &mut rng, &key, &mut store);
        assert_eq!(second, leftover);
    }

    #[test]
    fn test_refill_keeps_unused_and_avoids_batch_duplicates() {
        let mut store = InMemoryUsedSetStore::new();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let key = DedupKey::from("k");

        let first = sample(&POOL, 3, &mut rng, &key, &mut store);
        let leftover = POOL.iter().copied().find(|s| !first.contains(s)).unwrap();

        let second = sample(&POOL, 3, &mut rng, &key, &mut store);

        assert_eq!(second.len(), 3);
        assert!(distinct(&second));
        // The one unused item always leads the refilled batch
        assert_eq!(second[0], leftover);
    }

    #[test]
    fn test_short_return_when_pool_too_small() {
        let mut store = InMemoryUsedSetStore::new();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let key = DedupKey::from("k");

        let chosen = sample(&POOL, 10, &mut rng, &key, &mut store);

        assert_eq!(chosen.len(), 4);
        assert!(distinct(&chosen));
    }

    #[test]
    fn test_empty_pool_returns_empty() {
        let mut store = InMemoryUsedSetStore::new();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let key = DedupKey::from("k");
        let pool: [&str; 0] = [];

        assert!(sample(&pool, 3, &mut rng, &key, &mut store).is_empty());
        assert_eq!(store.used_count(&key), 0);
    }

    #[test]
    fn test_zero_count_returns_empty() {
        let mut store = InMemoryUsedSetStore::new();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let key = DedupKey::from("k");

        assert!(sample(&POOL, 0, &mut rng, &key, &mut store).is_empty());
        assert_eq!(store.used_count(&key), 0);
    }

    #[test]
    fn test_duplicate_text_in_pool_never_repeats_in_batch() {
        let mut store = InMemoryUsedSetStore::new();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let key = DedupKey::from("k");
        let pool = ["same", "same", "other"];

        let chosen = sample(&pool, 2, &mut rng, &key, &mut store);

        assert_eq!(chosen.len(), 2);
        assert!(distinct(&chosen));
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let key = DedupKey::from("k");
        let mut store_a = InMemoryUsedSetStore::new();
        let mut store_b = InMemoryUsedSetStore::new();
        let mut rng_a = ChaCha8Rng::seed_from_u64(99);
        let mut rng_b = ChaCha8Rng::seed_from_u64(99);

        let a = sample(&POOL, 2, &mut rng_a, &key, &mut store_a);
        let b = sample(&POOL, 2, &mut rng_b, &key, &mut store_b);

        assert_eq!(a, b);
    }

    #[test]
    fn test_owned_strings() {
        let pool: Vec<String> = POOL.iter().map(|s| (*s).to_string()).collect();
        let mut store = InMemoryUsedSetStore::new();
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let key = DedupKey::from("k");

        let chosen = sample(&pool, 2, &mut rng, &key, &mut store);

        assert_eq!(chosen.len(), 2);
        assert!(store.is_used(&key, chosen[0].content_hash()));
    }
}

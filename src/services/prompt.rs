//! Prompt service.
//!
//! Wires the seed resolver, the catalog and the deduplicating sampler
//! together for one session.

use crate::catalog;
use crate::models::{DedupKey, Mode};
use crate::services::deduplication::sample;
use crate::services::seed::{generator, resolve_seed};
use crate::session::{HistoryEntry, Session, UsedSetStore};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A request for one batch of prompts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptRequest {
    /// Conversation mode.
    pub mode: Mode,
    /// Level key; unknown keys fall back to the mode's default pool.
    pub level: String,
    /// Batch size. Defaults to the mode's batch size.
    pub count: Option<usize>,
    /// Seed material. `None` or empty draws non-deterministically.
    pub seed: Option<String>,
    /// Dedup domain. Defaults to `"{mode}:{level}"`.
    pub dedup_key: Option<DedupKey>,
}

impl PromptRequest {
    /// Creates a request with default count, no seed and the default key.
    #[must_use]
    pub fn new(mode: Mode, level: impl Into<String>) -> Self {
        Self {
            mode,
            level: level.into(),
            count: None,
            seed: None,
            dedup_key: None,
        }
    }

    /// Sets the batch size.
    #[must_use]
    pub const fn with_count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }

    /// Sets the seed material.
    #[must_use]
    pub fn with_seed(mut self, seed: impl Into<String>) -> Self {
        self.seed = Some(seed.into());
        self
    }

    /// Sets an explicit dedup key.
    #[must_use]
    pub fn with_dedup_key(mut self, key: DedupKey) -> Self {
        self.dedup_key = Some(key);
        self
    }

    /// Returns the effective batch size.
    #[must_use]
    pub fn effective_count(&self) -> usize {
        self.count.unwrap_or_else(|| self.mode.default_batch_size())
    }

    /// Returns the effective dedup key.
    #[must_use]
    pub fn effective_dedup_key(&self) -> DedupKey {
        self.dedup_key
            .clone()
            .unwrap_or_else(|| DedupKey::for_selection(self.mode, &self.level))
    }
}

/// One served batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptBatch {
    /// Mode of the request.
    pub mode: Mode,
    /// Level as requested.
    pub level: String,
    /// Dedup domain the prompts were recorded under.
    pub dedup_key: DedupKey,
    /// Prompts in draw order.
    pub prompts: Vec<String>,
    /// Whether the draw used a seeded generator.
    pub seeded: bool,
}

/// Service that serves deduplicated prompt batches.
///
/// Stateless; all state lives in the [`Session`] passed to each call.
#[derive(Debug, Clone, Copy, Default)]
pub struct PromptService;

impl PromptService {
    /// Creates a new prompt service.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Draws a batch for the request and records it in the session.
    ///
    /// Seed material on the request wins over the session's seed text. The
    /// batch may be shorter than requested when the pool holds fewer distinct
    /// prompts; an empty batch means there is nothing to show.
    #[instrument(
        skip(self, session, request),
        fields(
            operation = "sample_prompts",
            session_id = %session.id(),
            mode = %request.mode,
            level = %request.level
        )
    )]
    pub fn sample_prompts<S: UsedSetStore>(
        &self,
        session: &mut Session<S>,
        request: PromptRequest,
    ) -> PromptBatch {
        let count = request.effective_count();
        let dedup_key = request.effective_dedup_key();
        let seed_material = request
            .seed
            .as_deref()
            .or_else(|| session.seed_material())
            .filter(|s| !s.is_empty());
        let seed = resolve_seed(seed_material);
        let mut rng = generator(seed);

        if !catalog::is_known_level(request.mode, &request.level) {
            tracing::debug!(
                level = %request.level,
                "Unrecognized level, using the mode's fallback pool"
            );
        }
        let pool = catalog::resolve_pool(request.mode, &request.level);

        let chosen = sample(pool, count, &mut rng, &dedup_key, session.used_mut());
        let prompts: Vec<String> = chosen.into_iter().map(str::to_string).collect();

        if prompts.is_empty() {
            tracing::warn!(dedup_key = %dedup_key, "No prompts available");
        } else {
            session.history_mut().record(HistoryEntry {
                timestamp: Utc::now(),
                mode: request.mode,
                level: request.level.clone(),
                dedup_key: dedup_key.clone(),
                prompts: prompts.clone(),
            });
        }

        tracing::info!(
            dedup_key = %dedup_key,
            requested = count,
            returned = prompts.len(),
            seeded = seed.is_some(),
            "Served prompt batch"
        );
        metrics::counter!(
            "prompt_batches_total",
            "mode" => request.mode.as_str()
        )
        .increment(1);

        PromptBatch {
            mode: request.mode,
            level: request.level,
            dedup_key,
            prompts,
            seeded: seed.is_some(),
        }
    }
}

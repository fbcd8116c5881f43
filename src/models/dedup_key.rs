//! Deduplication domain keys.

use super::Mode;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies one independent deduplication domain.
///
/// Built from a mode and level as `"{mode}:{level}"`. Keys are opaque
/// strings, so callers may also supply their own via [`DedupKey::new`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DedupKey(String);

impl DedupKey {
    /// Creates a key from an arbitrary string.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Composes the key for a mode and level.
    ///
    /// The level is used verbatim, including unrecognized levels, so an
    /// unknown level gets its own domain even though it shares the fallback
    /// pool.
    #[must_use]
    pub fn for_selection(mode: Mode, level: &str) -> Self {
        Self(format!("{}:{level}", mode.as_str()))
    }

    /// Returns the key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DedupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DedupKey {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for DedupKey {
    fn from(s: String) -> Self {
        Self(s)
    }
}

//! Item identity.
//!
//! Items are plain text. Their identity for deduplication is a 64-bit prefix
//! of the SHA-256 digest of the text, so two items with equal text are the
//! same item regardless of where they live. A prefix collision makes two
//! different items count as one; that is accepted.

use crate::services::deduplication::ContentHasher;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity hash of an item's text content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemHash(u64);

impl ItemHash {
    /// Wraps a raw hash value.
    #[must_use]
    pub const fn from_raw(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw hash value.
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ItemHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

/// Capability to derive an [`ItemHash`] from content.
pub trait ContentIdentity {
    /// Returns the identity hash of this item.
    fn content_hash(&self) -> ItemHash;
}

impl ContentIdentity for str {
    fn content_hash(&self) -> ItemHash {
        ItemHash(ContentHasher::hash_prefix_u64(self))
    }
}

impl ContentIdentity for String {
    fn content_hash(&self) -> ItemHash {
        self.as_str().content_hash()
    }
}

impl<T: ContentIdentity + ?Sized> ContentIdentity for &T {
    fn content_hash(&self) -> ItemHash {
        (**self).content_hash()
    }
}

//! Content hashing utility for deduplication and seeding.
//!
//! This module provides SHA256-based content hashing. The same derivation
//! backs both item identity and seed resolution: hash the UTF-8 bytes, keep
//! the first 16 hex characters (64 bits) of the digest.
//!
//! Text is hashed verbatim. Two prompts that differ only in case or spacing
//! are different prompts.

use sha2::{Digest, Sha256};

/// Number of hex characters kept when a digest is narrowed to 64 bits.
pub const PREFIX_HEX_LEN: usize = 16;

/// Content hasher for deduplication.
///
/// # Example
///
/// ```rust
/// use icebreaker::services::deduplication::ContentHasher;
///
/// let hash = ContentHasher::hash("hello");
/// assert_eq!(hash.len(), 64); // SHA256 produces 64 hex chars
/// assert_eq!(ContentHasher::hex_prefix(&hash), "2cf24dba5fb0a30e");
/// assert_eq!(ContentHasher::hash_prefix_u64("hello"), 0x2cf2_4dba_5fb0_a30e);
/// ```
pub struct ContentHasher;

impl ContentHasher {
    /// Computes the lowercase hex-encoded SHA256 hash of the content.
    #[must_use]
    pub fn hash(content: &str) -> String {
        hex::encode(Self::digest(content))
    }

    /// Returns the leading 16 hex characters of a hex hash.
    ///
    /// If the hash is shorter than 16 bytes, or byte 16 is not a char
    /// boundary, returns the full input.
    #[must_use]
    pub fn hex_prefix(hash: &str) -> &str {
        let prefix_len = hash.len().min(PREFIX_HEX_LEN);
        hash.get(..prefix_len).unwrap_or(hash)
    }

    /// Computes the digest and reads its first 64 bits as an unsigned integer.
    ///
    /// Equivalent to parsing [`Self::hex_prefix`] of [`Self::hash`] as base 16.
    #[must_use]
    pub fn hash_prefix_u64(content: &str) -> u64 {
        let digest = Self::digest(content);
        let mut prefix = [0u8; 8];
        prefix.copy_from_slice(&digest[..8]);
        u64::from_be_bytes(prefix)
    }

    fn digest(content: &str) -> [u8; 32] {
        let mut hasher = Sha256::new();
        hasher.update(content.as_bytes());
        hasher.finalize().into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_produces_64_char_hex() {
        let hash = ContentHasher::hash("test content");
        assert_eq!(hash.len(), 64);
        assert!(hash.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_same_content_same_hash() {
        let text = "If you could change anything about the way you were raised?";
        let hash1 = ContentHasher::hash(text);
        let hash2 = ContentHasher::hash(text);
        assert_eq!(hash1, hash2);
    }

    #[test]
    fn test_no_normalization() {
        assert_ne!(ContentHasher::hash("Hello"), ContentHasher::hash("hello"));
        assert_ne!(ContentHasher::hash("a b"), ContentHasher::hash("a  b"));
    }

    #[test]
    fn test_prefix_matches_parsed_hex() {
        for content in ["hello", "", "数据库", "What is your most treasured memory?"] {
            let hash = ContentHasher::hash(content);
            let parsed = u64::from_str_radix(ContentHasher::hex_prefix(&hash), 16).unwrap();
            assert_eq!(parsed, ContentHasher::hash_prefix_u64(content));
        }
    }

    #[test]
    fn test_hex_prefix_short_hash() {
        assert_eq!(ContentHasher::hex_prefix("abc"), "abc");
    }

    #[test]
    fn test_hex_prefix_multibyte_input() {
        let text = "数据库数据库";
        assert_eq!(text.len(), 18);
        assert_eq!(ContentHasher::hex_prefix(text), text);
        assert_eq!(ContentHasher::hex_prefix("aéééééééé"), "aéééééééé");
    }

    #[test]
    fn test_empty_content() {
        // sha256("") = e3b0c44298fc1c14...
        assert_eq!(ContentHasher::hash_prefix_u64(""), 0xe3b0_c442_98fc_1c14);
    }
}

//! Session-scoped deduplicating sampling.
//!
//! This module provides the pieces that keep a prompt from being shown twice
//! in one session:
//! 1. **Content hashing**: SHA256 digest narrowed to a 64-bit identity
//! 2. **Sampling**: uniform draw without replacement that skips used items
//! 3. **Refill**: full-pool top-up once the unused items run out
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                           sample()                             │
//! │  ┌──────────────┐  ┌──────────────┐  ┌───────────────────────┐ │
//! │  │ Content      │  │ Used-set     │  │ Refill                │ │
//! │  │ Hasher       │  │ filter       │  │ (exhaustion fallback) │ │
//! │  │              │  │              │  │                       │ │
//! │  │ SHA256 →     │  │ UsedSetStore │  │ full pool, no repeats │ │
//! │  │ 64-bit id    │  │ per DedupKey │  │ inside one batch      │ │
//! │  └──────────────┘  └──────────────┘  └───────────────────────┘ │
//! └────────────────────────────────────────────────────────────────┘
//! ```

mod hasher;
mod sampler;

pub use hasher::{ContentHasher, PREFIX_HEX_LEN};
pub use sampler::sample;

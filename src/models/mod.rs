//! Data models for icebreaker.
//!
//! This module contains the core value types shared by the catalog, the
//! sampler and the session layer.

mod dedup_key;
mod item;
mod mode;

pub use dedup_key::DedupKey;
pub use item::{ContentIdentity, ItemHash};
pub use mode::Mode;

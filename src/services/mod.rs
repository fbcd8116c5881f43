//! Business logic services.
//!
//! Services resolve seeds, pick pools and run the deduplicating sampler on
//! behalf of a session.

pub mod deduplication;
mod prompt;
mod seed;

pub use prompt::{PromptBatch, PromptRequest, PromptService};
pub use seed::{Generator, generator, resolve_seed, resolve_seed_bytes};

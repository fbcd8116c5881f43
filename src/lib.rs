//! # Icebreaker
//!
//! Session-scoped, deduplicating conversation prompt sampler.
//!
//! Icebreaker hands out small batches of conversation prompts (questions,
//! debate topics, role-play setups) drawn at random from static pools. Within
//! one session a prompt is never shown twice for the same mode and level until
//! the pool runs dry, at which point previously served prompts are refilled.
//!
//! ## Features
//!
//! - Reproducible draws from an arbitrary seed string (SHA-256 derived)
//! - Per `mode:level` deduplication with global reset
//! - Exhaustion-tolerant refill that never repeats within a batch
//! - Explicit session objects and a registry for multi-user hosting
//!
//! ## Example
//!
//! ```rust
//! use icebreaker::{Mode, PromptRequest, PromptService, Session};
//!
//! let service = PromptService::new();
//! let mut session = Session::new();
//!
//! let batch = service.sample_prompts(&mut session, PromptRequest::new(Mode::Aa36, "beginner"));
//! assert_eq!(batch.prompts.len(), 3);
//! ```

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
#![forbid(unsafe_code)]
#![allow(clippy::multiple_crate_versions)]

use thiserror::Error as ThisError;

pub mod catalog;
pub mod cli;
pub mod config;
pub mod models;
pub mod observability;
pub mod services;
pub mod session;

pub use config::IcebreakerConfig;
pub use models::{ContentIdentity, DedupKey, ItemHash, Mode};
pub use services::{
    Generator, PromptBatch, PromptRequest, PromptService, resolve_seed, resolve_seed_bytes,
};
pub use session::{InMemoryUsedSetStore, Session, SessionId, SessionRegistry, UsedSetStore};

/// Error type for icebreaker operations.
///
/// # Error Variant Triggers
///
/// | Variant | Raised When |
/// |---------|-------------|
/// | `InvalidInput` | Seed material is not UTF-8, unknown mode names, malformed CLI values |
/// | `OperationFailed` | Config file IO/parse errors, log file setup, history export |
#[derive(Debug, ThisError)]
pub enum Error {
    /// Invalid input was provided.
    ///
    /// Raised when:
    /// - Seed material bytes are not valid UTF-8
    /// - A mode name does not match any known mode
    /// - A numeric setting cannot be parsed
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// An operation failed.
    ///
    /// Raised when:
    /// - The configuration file cannot be read or parsed
    /// - The log file cannot be opened
    /// - Logging is initialized twice
    /// - History export cannot be serialized or written
    #[error("operation '{operation}' failed: {cause}")]
    OperationFailed {
        /// The operation that failed.
        operation: String,
        /// The underlying cause.
        cause: String,
    },
}

/// Result type alias for icebreaker operations.
pub type Result<T> = std::result::Result<T, Error>;

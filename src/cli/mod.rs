//! CLI command implementations.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `draw` | Draw one batch of prompts in a fresh session |
//! | `modes` | List modes, their levels and how to play |
//! | `play` | Interactive session over stdin |
//!
//! # Example Usage
//!
//! ```bash
//! # Three warm-up questions
//! icebreaker draw --mode aa36 --level beginner
//!
//! # Same batch every time
//! icebreaker draw --mode ittaku --seed team-offsite --format json
//!
//! # Interactive session
//! icebreaker play --mode villain
//! ```

mod draw;
mod modes;
mod play;

pub use draw::{DrawOptions, cmd_draw, draw_batch, write_batch_json, write_batch_text};
pub use modes::{ModeInfo, cmd_modes, get_all_modes, write_modes_json, write_modes_text};
pub use play::{PlayCommand, PlayOptions, PlaySession, cmd_play};

use crate::services::resolve_seed_bytes;
use crate::{Error, Result};
use std::ffi::OsStr;
use std::str::FromStr;

/// Output format for non-interactive commands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Plain text (default).
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

impl FromStr for OutputFormat {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Text,
        })
    }
}

/// Converts a raw seed argument to seed text.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if the argument is not valid UTF-8.
pub fn seed_text(raw: &OsStr) -> Result<String> {
    resolve_seed_bytes(Some(raw.as_encoded_bytes()))?;
    Ok(raw.to_string_lossy().into_owned())
}

/// Maps an output error onto the crate error type.
#[allow(clippy::needless_pass_by_value)]
pub(crate) fn output_error(e: std::io::Error) -> Error {
    Error::OperationFailed {
        operation: "write_output".to_string(),
        cause: e.to_string(),
    }
}

//! CLI command for drawing a single batch.

use super::{OutputFormat, output_error};
use crate::models::Mode;
use crate::services::{PromptBatch, PromptRequest, PromptService};
use crate::session::Session;
use crate::{Error, Result};
use std::io::{self, Write};

/// Options for one draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawOptions {
    /// Mode to draw from.
    pub mode: Mode,
    /// Level key.
    pub level: String,
    /// Batch size; `None` uses the mode's default.
    pub count: Option<usize>,
    /// Seed material.
    pub seed: Option<String>,
}

impl DrawOptions {
    fn into_request(self) -> PromptRequest {
        let mut request = PromptRequest::new(self.mode, self.level);
        request.count = self.count;
        request.seed = self.seed.filter(|s| !s.is_empty());
        request
    }
}

/// Draws one batch in a fresh session.
#[must_use]
pub fn draw_batch(options: DrawOptions) -> PromptBatch {
    let mut session = Session::new();
    PromptService::new().sample_prompts(&mut session, options.into_request())
}

/// Writes a batch as a numbered list.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_batch_text<W: Write>(writer: &mut W, batch: &PromptBatch) -> io::Result<()> {
    if batch.prompts.is_empty() {
        writeln!(writer, "No prompts available for {}.", batch.dedup_key)?;
        return Ok(());
    }
    for (i, prompt) in batch.prompts.iter().enumerate() {
        writeln!(writer, "{}. {prompt}", i + 1)?;
    }
    Ok(())
}

/// Writes a batch as JSON.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn write_batch_json<W: Write>(writer: &mut W, batch: &PromptBatch) -> Result<()> {
    let json = serde_json::to_string_pretty(batch).map_err(|e| Error::OperationFailed {
        operation: "serialize_batch".to_string(),
        cause: e.to_string(),
    })?;
    writeln!(writer, "{json}").map_err(output_error)
}

/// Executes the draw command.
///
/// # Errors
///
/// Returns an error if serialization or output fails.
pub fn cmd_draw(options: DrawOptions, format: OutputFormat) -> Result<()> {
    let batch = draw_batch(options);
    let stdout = io::stdout();
    let mut handle = stdout.lock();

    match format {
        OutputFormat::Text => write_batch_text(&mut handle, &batch).map_err(output_error),
        OutputFormat::Json => write_batch_json(&mut handle, &batch),
    }
}

//! Per-session draw history and favorites.

use crate::models::{DedupKey, Mode};
use crate::{Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One served batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// When the batch was drawn.
    pub timestamp: DateTime<Utc>,
    /// Mode of the request.
    pub mode: Mode,
    /// Level as requested (may be unrecognized).
    pub level: String,
    /// Dedup domain the batch was recorded under.
    pub dedup_key: DedupKey,
    /// Prompts in draw order.
    pub prompts: Vec<String>,
}

/// Ordered log of batches served in a session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionHistory {
    entries: Vec<HistoryEntry>,
}

impl SessionHistory {
    /// Creates an empty history.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends an entry.
    pub fn record(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    /// Returns all entries, oldest first.
    #[must_use]
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Returns the most recent entry.
    #[must_use]
    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing has been drawn.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serializes the history as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::OperationFailed {
            operation: "serialize_history".to_string(),
            cause: e.to_string(),
        })
    }

    /// Writes the history as JSON to a file.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails or the file cannot be written.
    pub fn export_to_file(&self, path: &Path) -> Result<()> {
        let json = self.to_json()?;
        std::fs::write(path, json).map_err(|e| Error::OperationFailed {
            operation: "export_history".to_string(),
            cause: format!("{}: {}", path.display(), e),
        })?;
        tracing::info!(path = %path.display(), entries = self.len(), "Exported history");
        Ok(())
    }
}

/// Prompts starred during a session, in the order they were added.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Favorites {
    items: Vec<String>,
}

impl Favorites {
    /// Creates an empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Adds a prompt; returns false if it was already starred.
    pub fn add(&mut self, prompt: impl Into<String>) -> bool {
        let prompt = prompt.into();
        if self.items.contains(&prompt) {
            return false;
        }
        self.items.push(prompt);
        true
    }

    /// Removes a prompt; returns false if it was not starred.
    pub fn remove(&mut self, prompt: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item != prompt);
        self.items.len() != before
    }

    /// Returns true if the prompt is starred.
    #[must_use]
    pub fn contains(&self, prompt: &str) -> bool {
        self.items.iter().any(|item| item == prompt)
    }

    /// Returns the starred prompts.
    #[must_use]
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Returns the number of starred prompts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if nothing is starred.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

//! Conversation modes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Conversation prompt styles.
///
/// Each mode owns a closed set of level keys (see [`crate::catalog`]) and a
/// default batch size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// The 36 questions for building closeness, split by depth.
    #[default]
    Aa36,
    /// "Only one answer" debate topics: commit to a single pick and defend it.
    Ittaku,
    /// Role play where one side justifies a misdeed and the other probes.
    Villain,
}

impl Mode {
    /// Returns all mode variants.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Aa36, Self::Ittaku, Self::Villain]
    }

    /// Returns the mode as a string slice.
    ///
    /// This is the prefix used when building a [`crate::DedupKey`].
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Aa36 => "aa36",
            Self::Ittaku => "ittaku",
            Self::Villain => "villain",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Aa36 => "36 Questions",
            Self::Ittaku => "Only One Answer",
            Self::Villain => "Justify the Misdeed",
        }
    }

    /// Number of prompts drawn per request when the caller does not say.
    ///
    /// Question mode shows three questions at a time; the topic modes show one.
    #[must_use]
    pub const fn default_batch_size(&self) -> usize {
        match self {
            Self::Aa36 => 3,
            Self::Ittaku | Self::Villain => 1,
        }
    }

    /// Parses a mode from a string.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "aa36" | "36" | "questions" => Some(Self::Aa36),
            "ittaku" | "one-answer" | "one_answer" => Some(Self::Ittaku),
            "villain" | "justify" => Some(Self::Villain),
            _ => None,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Mode {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| {
            crate::Error::InvalidInput(format!(
                "unknown mode '{s}' (expected one of: aa36, ittaku, villain)"
            ))
        })
    }
}

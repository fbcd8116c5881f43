//! Static prompt catalog.
//!
//! Supplies, per [`Mode`], the recognized level keys, the prompt pool behind
//! each key, and the help text shown alongside a mode. Everything here is
//! `'static` and read-only.
//!
//! # Levels
//!
//! | Mode | Level | Pool |
//! |------|-------|------|
//! | `aa36` | `beginner` | questions 1-12 |
//! | `aa36` | `intermediate` | questions 13-24 |
//! | `aa36` | `advanced` | questions 25-36 |
//! | `aa36` | `business` | workplace rewording |
//! | `aa36` | *other* | all 36 questions |
//! | `ittaku` | `beginner`, `topic_only` | everyday topics |
//! | `ittaku` | `business_topic` | workplace topics |
//! | `ittaku` | *other* | everyday topics |
//! | `villain` | `criminal` | petty-crime setups |
//! | `villain` | `claimer` | unreasonable-complaint setups |
//! | `villain` | *other* | petty-crime setups |
//!
//! Unknown levels fall back silently; [`resolve_pool`] never fails.

mod aa36;
mod ittaku;
mod villain;

pub use aa36::{AA36_BUSINESS_REWRITE, AA36_QUESTIONS};
pub use ittaku::{ITTAKU_BUSINESS_TOPICS, ITTAKU_TOPICS};
pub use villain::{COMPLAINER_TEMPLATE, CRIMINAL_TEMPLATE};

use crate::models::Mode;
use serde::Serialize;

/// An immutable prompt pool.
pub type Pool = &'static [&'static str];

/// A recognized level key and its display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LevelInfo {
    /// Key used in requests and dedup keys.
    pub key: &'static str,
    /// Human-readable label.
    pub label: &'static str,
}

/// Help card for a mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ModeHelp {
    /// Section title.
    pub name: &'static str,
    /// One-line summary.
    pub summary: &'static str,
    /// How to play, one step per entry.
    pub notes: &'static [&'static str],
}

static AA36_LEVELS: [LevelInfo; 4] = [
    LevelInfo { key: "beginner", label: "Set I (warm-up)" },
    LevelInfo { key: "intermediate", label: "Set II (getting personal)" },
    LevelInfo { key: "advanced", label: "Set III (deep)" },
    LevelInfo { key: "business", label: "Workplace" },
];

static ITTAKU_LEVELS: [LevelInfo; 3] = [
    LevelInfo { key: "beginner", label: "Beginner" },
    LevelInfo { key: "topic_only", label: "Topic only" },
    LevelInfo { key: "business_topic", label: "Workplace topic" },
];

static VILLAIN_LEVELS: [LevelInfo; 2] = [
    LevelInfo { key: "criminal", label: "Petty crime" },
    LevelInfo { key: "claimer", label: "Unreasonable complaint" },
];

static AA36_HELP: ModeHelp = ModeHelp {
    name: "36 Questions",
    summary: "Three sets of questions that move from light to personal, designed to build closeness quickly.",
    notes: &[
        "Take turns: one person reads a question aloud and both answer.",
        "Stay within a set before moving on to the next level.",
        "There are no wrong answers; listening matters more than talking.",
    ],
};

static ITTAKU_HELP: ModeHelp = ModeHelp {
    name: "Only One Answer",
    summary: "Pick exactly one answer to the topic and defend it as the only correct choice.",
    notes: &[
        "Each player commits to a single answer before explaining it.",
        "Argue for your pick with three reasons.",
        "The group decides whose case was most convincing.",
    ],
};

static VILLAIN_HELP: ModeHelp = ModeHelp {
    name: "Justify the Misdeed",
    summary: "One player defends a petty misdeed while the other asks questions to find the weak spots.",
    notes: &[
        "The villain has one minute to explain their side.",
        "The interviewer asks follow-up questions; keep it good-natured.",
        "Swap roles after each round.",
    ],
};

/// Returns the recognized levels for a mode, in display order.
#[must_use]
pub fn levels(mode: Mode) -> &'static [LevelInfo] {
    match mode {
        Mode::Aa36 => &AA36_LEVELS[..],
        Mode::Ittaku => &ITTAKU_LEVELS[..],
        Mode::Villain => &VILLAIN_LEVELS[..],
    }
}

/// Returns the first listed level for a mode.
#[must_use]
pub fn default_level(mode: Mode) -> &'static str {
    match mode {
        Mode::Aa36 | Mode::Ittaku => "beginner",
        Mode::Villain => "criminal",
    }
}

/// Returns true if `level` is one of the mode's recognized keys.
#[must_use]
pub fn is_known_level(mode: Mode, level: &str) -> bool {
    levels(mode).iter().any(|info| info.key == level)
}

/// Returns the help card for a mode.
#[must_use]
pub fn help(mode: Mode) -> &'static ModeHelp {
    match mode {
        Mode::Aa36 => &AA36_HELP,
        Mode::Ittaku => &ITTAKU_HELP,
        Mode::Villain => &VILLAIN_HELP,
    }
}

/// Resolves the prompt pool for a mode and level.
///
/// Unrecognized levels resolve to the mode's fallback pool.
///
/// # Example
///
/// ```rust
/// use icebreaker::Mode;
/// use icebreaker::catalog::{AA36_QUESTIONS, resolve_pool};
///
/// assert_eq!(resolve_pool(Mode::Aa36, "beginner").len(), 12);
/// assert_eq!(resolve_pool(Mode::Aa36, "no-such-level"), &AA36_QUESTIONS[..]);
/// ```
#[must_use]
pub fn resolve_pool(mode: Mode, level: &str) -> Pool {
    match mode {
        Mode::Aa36 => aa36_pool(level),
        Mode::Ittaku => ittaku_pool(level),
        Mode::Villain => villain_pool(level),
    }
}

fn aa36_pool(level: &str) -> Pool {
    match level {
        "business" => &AA36_BUSINESS_REWRITE[..],
        "beginner" => &AA36_QUESTIONS[0..12],
        "intermediate" => &AA36_QUESTIONS[12..24],
        "advanced" => &AA36_QUESTIONS[24..36],
        _ => &AA36_QUESTIONS[..],
    }
}

fn ittaku_pool(level: &str) -> Pool {
    match level {
        "business_topic" => &ITTAKU_BUSINESS_TOPICS[..],
        _ => &ITTAKU_TOPICS[..],
    }
}

fn villain_pool(level: &str) -> Pool {
    match level {
        "claimer" => &COMPLAINER_TEMPLATE[..],
        _ => &CRIMINAL_TEMPLATE[..],
    }
}

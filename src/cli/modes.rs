//! CLI command for listing modes and levels.

use super::{OutputFormat, output_error};
use crate::Result;
use crate::catalog::{self, LevelInfo, ModeHelp};
use crate::models::Mode;
use serde::Serialize;
use std::io::{self, Write};

/// Everything shown for one mode.
#[derive(Debug, Clone, Serialize)]
pub struct ModeInfo {
    /// Mode identifier.
    pub mode: Mode,
    /// Display name.
    pub label: &'static str,
    /// Prompts per batch when no count is given.
    pub default_batch_size: usize,
    /// Level used when none is given.
    pub default_level: &'static str,
    /// Recognized levels.
    pub levels: &'static [LevelInfo],
    /// How to play.
    pub help: &'static ModeHelp,
}

impl ModeInfo {
    fn new(mode: Mode) -> Self {
        Self {
            mode,
            label: mode.label(),
            default_batch_size: mode.default_batch_size(),
            default_level: catalog::default_level(mode),
            levels: catalog::levels(mode),
            help: catalog::help(mode),
        }
    }
}

/// Returns information for every mode.
#[must_use]
pub fn get_all_modes() -> Vec<ModeInfo> {
    Mode::all().iter().copied().map(ModeInfo::new).collect()
}

/// Writes modes as text to the given writer.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_modes_text<W: Write>(writer: &mut W, modes: &[ModeInfo]) -> io::Result<()> {
    for (i, info) in modes.iter().enumerate() {
        if i > 0 {
            writeln!(writer)?;
        }
        writeln!(writer, "{} ({})", info.label, info.mode)?;
        writeln!(writer, "  {}", info.help.summary)?;
        writeln!(writer, "  {:<16}LABEL", "LEVEL")?;
        for level in info.levels {
            let marker = if level.key == info.default_level { "*" } else { " " };
            writeln!(writer, "{marker} {:<16}{}", level.key, level.label)?;
        }
        for note in info.help.notes {
            writeln!(writer, "  - {note}")?;
        }
    }
    Ok(())
}

/// Writes modes as JSON to the given writer.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn write_modes_json<W: Write>(writer: &mut W, modes: &[ModeInfo]) -> Result<()> {
    let json = serde_json::to_string_pretty(modes).map_err(|e| crate::Error::OperationFailed {
        operation: "serialize_modes".to_string(),
        cause: e.to_string(),
    })?;
    writeln!(writer, "{json}").map_err(output_error)
}

/// Executes the modes command.
///
/// # Errors
///
/// Returns an error if serialization or output fails.
pub fn cmd_modes(format: OutputFormat) -> Result<()> {
    let modes = get_all_modes();
    let stdout = io::stdout();
    let mut handle = stdout.lock();

    match format {
        OutputFormat::Text => write_modes_text(&mut handle, &modes).map_err(output_error),
        OutputFormat::Json => write_modes_json(&mut handle, &modes),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_all_modes() {
        let modes = get_all_modes();
        assert_eq!(modes.len(), 3);
        assert_eq!(modes[0].mode, Mode::Aa36);
        assert_eq!(modes[0].default_batch_size, 3);
        assert_eq!(modes[2].default_level, "criminal");
    }

    #[test]
    fn test_text_marks_default_level() {
        let mut out = Vec::new();
        write_modes_text(&mut out, &get_all_modes()).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("* beginner"));
        assert!(text.contains("* criminal"));
        assert!(text.contains("  claimer"));
    }

    #[test]
    fn test_json_lists_levels() {
        let mut out = Vec::new();
        write_modes_json(&mut out, &get_all_modes()).unwrap();
        let parsed: serde_json::Value = serde_json::from_slice(&out).unwrap();

        assert_eq!(parsed[0]["mode"], "aa36");
        assert_eq!(parsed[1]["levels"][2]["key"], "business_topic");
        assert_eq!(parsed[2]["default_batch_size"], 1);
    }
}

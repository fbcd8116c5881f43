//! Interactive play loop.
//!
//! One [`Session`] lives for the whole loop, so prompts are not repeated
//! within a mode and level until the pool is exhausted or the user resets.
//!
//! ```text
//! > next
//! 1. Given the choice of anyone in the world, whom would you want as a dinner guest?
//! ...
//! > fav 1
//! Starred: Given the choice of anyone in the world, ...
//! > mode villain
//! ```

use super::{output_error, write_batch_text};
use crate::catalog;
use crate::models::Mode;
use crate::services::{PromptRequest, PromptService, resolve_seed_bytes};
use crate::session::Session;
use crate::{Error, Result};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// File written by `export` when no path is given.
pub const DEFAULT_EXPORT_PATH: &str = "icebreaker-history.json";

const COMMANDS: &[(&str, &str)] = &[
    ("next", "draw the next batch (or just press enter)"),
    ("mode <name>", "switch to aa36, ittaku or villain"),
    ("level <key>", "switch level within the current mode"),
    ("seed [text]", "set or clear the seed for reproducible draws"),
    ("reset", "make every prompt available again"),
    ("fav <n>", "star prompt n from the last batch"),
    ("unfav <n>", "unstar prompt n from the favorites list"),
    ("favs", "list starred prompts"),
    ("history", "list everything drawn so far"),
    ("export [path]", "write the history as JSON"),
    ("help", "show this help"),
    ("quit", "leave"),
];

/// A parsed line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayCommand {
    /// Draw a batch.
    Next,
    /// Switch mode.
    Mode(Mode),
    /// Switch level.
    Level(String),
    /// Set (`Some`) or clear (`None`) the seed text.
    Seed(Option<String>),
    /// Forget all served prompts.
    Reset,
    /// Star the n-th prompt (1-based) of the last batch.
    Fav(usize),
    /// Unstar the n-th prompt (1-based) of the favorites list.
    Unfav(usize),
    /// List starred prompts.
    Favs,
    /// List history.
    History,
    /// Export history to a file.
    Export(PathBuf),
    /// Show help.
    Help,
    /// Leave the loop.
    Quit,
}

impl PlayCommand {
    /// Parses one input line.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] for unknown commands or bad arguments.
    pub fn parse(line: &str) -> Result<Self> {
        let line = line.trim();
        let (name, arg) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(n, a)| (n, a.trim()));

        match name.to_lowercase().as_str() {
            "" | "next" | "n" => Ok(Self::Next),
            "mode" | "m" => {
                if arg.is_empty() {
                    return Err(usage("mode <aa36|ittaku|villain>"));
                }
                arg.parse().map(Self::Mode)
            },
            "level" | "l" => {
                if arg.is_empty() {
                    return Err(usage("level <key>"));
                }
                Ok(Self::Level(arg.to_string()))
            },
            "seed" => Ok(Self::Seed(Some(arg.to_string()).filter(|s| !s.is_empty()))),
            "reset" => Ok(Self::Reset),
            "fav" | "star" => arg
                .parse::<usize>()
                .ok()
                .filter(|n| *n > 0)
                .map(Self::Fav)
                .ok_or_else(|| usage("fav <n>, where n is a prompt number from the last batch")),
            "unfav" | "unstar" => arg
                .parse::<usize>()
                .ok()
                .filter(|n| *n > 0)
                .map(Self::Unfav)
                .ok_or_else(|| usage("unfav <n>, where n is a number from 'favs'")),
            "favs" | "favorites" => Ok(Self::Favs),
            "history" | "h" => Ok(Self::History),
            "export" => Ok(Self::Export(PathBuf::from(if arg.is_empty() {
                DEFAULT_EXPORT_PATH
            } else {
                arg
            }))),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" | "q" => Ok(Self::Quit),
            other => Err(Error::InvalidInput(format!(
                "unknown command '{other}' (type 'help' for a list)"
            ))),
        }
    }

    /// Parses one raw input line.
    ///
    /// Lines that are not UTF-8 are rejected. A `seed` line with invalid
    /// material reports the seed resolver's error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] for invalid bytes, unknown commands or
    /// bad arguments.
    pub fn parse_bytes(line: &[u8]) -> Result<Self> {
        let e = match std::str::from_utf8(line) {
            Ok(text) => return Self::parse(text),
            Err(e) => e,
        };
        let line = line.trim_ascii();
        let split = line
            .iter()
            .position(u8::is_ascii_whitespace)
            .unwrap_or(line.len());
        let (name, arg) = line.split_at(split);
        if name.eq_ignore_ascii_case(b"seed") {
            resolve_seed_bytes(Some(arg.trim_ascii()))?;
        }
        Err(Error::InvalidInput(format!("input is not valid UTF-8: {e}")))
    }
}

fn usage(text: &str) -> Error {
    Error::InvalidInput(format!("usage: {text}"))
}

/// Starting point for the loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayOptions {
    /// Initial mode.
    pub mode: Mode,
    /// Initial level.
    pub level: String,
    /// Batch size; `None` uses each mode's default.
    pub count: Option<usize>,
    /// Initial seed text.
    pub seed: Option<String>,
}

/// State of one interactive session.
#[derive(Debug)]
pub struct PlaySession {
    service: PromptService,
    session: Session,
    mode: Mode,
    level: String,
    count: Option<usize>,
    last: Vec<String>,
}

impl PlaySession {
    /// Creates the loop state with a fresh session.
    #[must_use]
    pub fn new(options: PlayOptions) -> Self {
        let mut session = Session::new();
        if let Some(seed) = options.seed {
            session.set_seed_text(seed);
        }
        Self {
            service: PromptService::new(),
            session,
            mode: options.mode,
            level: options.level,
            count: options.count,
            last: Vec::new(),
        }
    }

    /// Returns the underlying session.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Returns the current mode and level.
    #[must_use]
    pub fn selection(&self) -> (Mode, &str) {
        (self.mode, &self.level)
    }

    /// Reads commands until `quit` or end of input.
    ///
    /// Command errors are reported to `output` and the loop continues.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or writing output fails.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, output: &mut W) -> Result<()> {
        writeln!(
            output,
            "{} ({}). Press enter for prompts, 'help' for commands.",
            self.mode.label(),
            self.level
        )
        .map_err(output_error)?;

        let mut line = Vec::new();
        loop {
            write!(output, "> ").map_err(output_error)?;
            output.flush().map_err(output_error)?;

            line.clear();
            let read = input
                .read_until(b'\n', &mut line)
                .map_err(|e| Error::OperationFailed {
                    operation: "read_input".to_string(),
                    cause: e.to_string(),
                })?;
            if read == 0 {
                writeln!(output).map_err(output_error)?;
                break;
            }

            let outcome =
                PlayCommand::parse_bytes(&line).and_then(|cmd| self.execute(cmd, output));
            match outcome {
                Ok(true) => {},
                Ok(false) => break,
                Err(e) => writeln!(output, "Error: {e}").map_err(output_error)?,
            }
        }

        tracing::debug!(
            session_id = %self.session.id(),
            batches = self.session.history().len(),
            "Play session finished"
        );
        Ok(())
    }

    /// Executes one command, returning false when the loop should stop.
    ///
    /// # Errors
    ///
    /// Returns an error if the command fails or output cannot be written.
    pub fn execute<W: Write>(&mut self, command: PlayCommand, output: &mut W) -> Result<bool> {
        match command {
            PlayCommand::Next => self.next(output)?,
            PlayCommand::Mode(mode) => {
                self.mode = mode;
                self.level = catalog::default_level(mode).to_string();
                self.last.clear();
                writeln!(output, "{} ({})", mode.label(), self.level).map_err(output_error)?;
                writeln!(output, "{}", catalog::help(mode).summary).map_err(output_error)?;
            },
            PlayCommand::Level(level) => {
                if catalog::is_known_level(self.mode, &level) {
                    writeln!(output, "Level: {level}").map_err(output_error)?;
                } else {
                    writeln!(
                        output,
                        "Unknown level '{level}' for {}; using the mode's default pool.",
                        self.mode
                    )
                    .map_err(output_error)?;
                }
                self.level = level;
                self.last.clear();
            },
            PlayCommand::Seed(seed) => {
                let message = if seed.is_some() { "Seed set." } else { "Seed cleared." };
                self.session.set_seed_text(seed.unwrap_or_default());
                writeln!(output, "{message}").map_err(output_error)?;
            },
            PlayCommand::Reset => {
                self.session.reset_used();
                writeln!(output, "Every prompt is available again.").map_err(output_error)?;
            },
            PlayCommand::Fav(n) => {
                let prompt = n
                    .checked_sub(1)
                    .and_then(|i| self.last.get(i))
                    .ok_or_else(|| {
                        Error::InvalidInput(format!("no prompt #{n} in the last batch"))
                    })?;
                if self.session.favorites_mut().add(prompt.clone()) {
                    writeln!(output, "Starred: {prompt}").map_err(output_error)?;
                } else {
                    writeln!(output, "Already starred.").map_err(output_error)?;
                }
            },
            PlayCommand::Unfav(n) => {
                let prompt = n
                    .checked_sub(1)
                    .and_then(|i| self.session.favorites().items().get(i))
                    .cloned()
                    .ok_or_else(|| Error::InvalidInput(format!("no favorite #{n}")))?;
                self.session.favorites_mut().remove(&prompt);
                writeln!(output, "Unstarred: {prompt}").map_err(output_error)?;
            },
            PlayCommand::Favs => self.write_favorites(output).map_err(output_error)?,
            PlayCommand::History => self.write_history(output).map_err(output_error)?,
            PlayCommand::Export(path) => {
                self.session.history().export_to_file(&path)?;
                writeln!(
                    output,
                    "Exported {} batches to {}",
                    self.session.history().len(),
                    path.display()
                )
                .map_err(output_error)?;
            },
            PlayCommand::Help => self.write_help(output).map_err(output_error)?,
            PlayCommand::Quit => return Ok(false),
        }
        Ok(true)
    }

    fn next<W: Write>(&mut self, output: &mut W) -> Result<()> {
        let mut request = PromptRequest::new(self.mode, self.level.clone());
        request.count = self.count;
        let batch = self.service.sample_prompts(&mut self.session, request);
        write_batch_text(output, &batch).map_err(output_error)?;
        self.last = batch.prompts;
        Ok(())
    }

    fn write_favorites<W: Write>(&self, output: &mut W) -> io::Result<()> {
        let favorites = self.session.favorites();
        if favorites.is_empty() {
            return writeln!(output, "No favorites yet.");
        }
        for (i, prompt) in favorites.items().iter().enumerate() {
            writeln!(output, "{}. {prompt}", i + 1)?;
        }
        Ok(())
    }

    fn write_history<W: Write>(&self, output: &mut W) -> io::Result<()> {
        let history = self.session.history();
        if history.is_empty() {
            return writeln!(output, "Nothing drawn yet.");
        }
        for entry in history.entries() {
            writeln!(
                output,
                "[{}] {}",
                entry.timestamp.format("%H:%M:%S"),
                entry.dedup_key
            )?;
            for prompt in &entry.prompts {
                writeln!(output, "  - {prompt}")?;
            }
        }
        Ok(())
    }

    fn write_help<W: Write>(&self, output: &mut W) -> io::Result<()> {
        let help = catalog::help(self.mode);
        writeln!(output, "{}: {}", help.name, help.summary)?;
        for note in help.notes {
            writeln!(output, "  - {note}")?;
        }
        let levels: Vec<&str> = catalog::levels(self.mode).iter().map(|l| l.key).collect();
        writeln!(output, "Levels: {}", levels.join(", "))?;
        writeln!(output, "Commands:")?;
        for (name, description) in COMMANDS {
            writeln!(output, "  {name:<16}{description}")?;
        }
        Ok(())
    }
}

/// Executes the play command on stdin and stdout.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn cmd_play(options: PlayOptions) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    PlaySession::new(options).run(stdin.lock(), &mut handle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn play(mode: Mode, level: &str) -> PlaySession {
        PlaySession::new(PlayOptions {
            mode,
            level: level.to_string(),
            count: None,
            seed: None,
        })
    }

    fn run(session: &mut PlaySession, script: &str) -> String {
        let mut out = Vec::new();
        session.run(Cursor::new(script), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn run_bytes(session: &mut PlaySession, script: &[u8]) -> String {
        let mut out = Vec::new();
        session.run(Cursor::new(script), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(PlayCommand::parse("").unwrap(), PlayCommand::Next);
        assert_eq!(PlayCommand::parse("  NEXT ").unwrap(), PlayCommand::Next);
        assert_eq!(
            PlayCommand::parse("mode Villain").unwrap(),
            PlayCommand::Mode(Mode::Villain)
        );
        assert_eq!(
            PlayCommand::parse("level business").unwrap(),
            PlayCommand::Level("business".to_string())
        );
        assert_eq!(
            PlayCommand::parse("seed movie night").unwrap(),
            PlayCommand::Seed(Some("movie night".to_string()))
        );
        assert_eq!(PlayCommand::parse("seed").unwrap(), PlayCommand::Seed(None));
        assert_eq!(PlayCommand::parse("fav 2").unwrap(), PlayCommand::Fav(2));
        assert_eq!(PlayCommand::parse("unstar 1").unwrap(), PlayCommand::Unfav(1));
        assert_eq!(
            PlayCommand::parse("export").unwrap(),
            PlayCommand::Export(PathBuf::from(DEFAULT_EXPORT_PATH))
        );
        assert_eq!(PlayCommand::parse("q").unwrap(), PlayCommand::Quit);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(PlayCommand::parse("mode").is_err());
        assert!(PlayCommand::parse("mode chess").is_err());
        assert!(PlayCommand::parse("fav 0").is_err());
        assert!(PlayCommand::parse("fav two").is_err());
        assert!(PlayCommand::parse("unfav 0").is_err());
        assert!(PlayCommand::parse("dance").is_err());
    }

    #[test]
    fn test_next_then_quit() {
        let mut session = play(Mode::Aa36, "beginner");
        let out = run(&mut session, "next\nquit\nnext\n");

        assert!(out.contains("1. "));
        assert!(out.contains("3. "));
        assert_eq!(session.session().history().len(), 1);
    }

    #[test]
    fn test_no_repeats_until_exhausted() {
        let mut session = play(Mode::Aa36, "advanced");
        run(&mut session, "\n\n\n\n");

        let served: Vec<&String> = session
            .session()
            .history()
            .entries()
            .iter()
            .flat_map(|e| e.prompts.iter())
            .collect();
        let unique: std::collections::HashSet<_> = served.iter().collect();
        assert_eq!(served.len(), 12);
        assert_eq!(unique.len(), 12);
    }

    #[test]
    fn test_mode_switch_resets_level() {
        let mut session = play(Mode::Aa36, "advanced");
        let out = run(&mut session, "mode villain\n");

        assert_eq!(session.selection(), (Mode::Villain, "criminal"));
        assert!(out.contains("Justify the Misdeed (criminal)"));
    }

    #[test]
    fn test_unknown_level_is_reported() {
        let mut session = play(Mode::Ittaku, "beginner");
        let out = run(&mut session, "level expert\nnext\n");

        assert!(out.contains("Unknown level 'expert'"));
        assert!(out.contains("using the mode's default pool"));
        assert_eq!(
            session.session().history().last().unwrap().dedup_key.as_str(),
            "ittaku:expert"
        );
    }

    #[test]
    fn test_fav_stars_from_last_batch() {
        let mut session = play(Mode::Villain, "claimer");
        let out = run(&mut session, "next\nfav 1\nfav 1\nfav 2\nfavs\n");

        assert!(out.contains("Starred: "));
        assert!(out.contains("Already starred."));
        assert!(out.contains("Error: invalid input: no prompt #2 in the last batch"));
        assert_eq!(session.session().favorites().len(), 1);
    }

    #[test]
    fn test_fav_before_any_draw_fails() {
        let mut session = play(Mode::Aa36, "beginner");
        let out = run(&mut session, "fav 1\n");
        assert!(out.contains("Error: "));
    }

    #[test]
    fn test_fav_zero_is_rejected() {
        let mut session = play(Mode::Aa36, "beginner");
        run(&mut session, "next\n");
        let mut out = Vec::new();

        let err = session.execute(PlayCommand::Fav(0), &mut out).unwrap_err();

        assert!(matches!(err, Error::InvalidInput(_)));
        assert!(session.session().favorites().is_empty());
    }

    #[test]
    fn test_unfav_removes_starred_prompt() {
        let mut session = play(Mode::Villain, "claimer");
        let out = run(&mut session, "next\nfav 1\nunfav 2\nunfav 1\nfavs\n");

        assert!(out.contains("Error: invalid input: no favorite #2"));
        assert!(out.contains("Unstarred: "));
        assert!(out.ends_with("No favorites yet.\n> \n"));
        assert!(session.session().favorites().is_empty());
    }

    #[test]
    fn test_unfav_zero_is_rejected() {
        let mut session = play(Mode::Villain, "claimer");
        run(&mut session, "next\nfav 1\n");
        let mut out = Vec::new();

        let err = session.execute(PlayCommand::Unfav(0), &mut out).unwrap_err();

        assert!(matches!(err, Error::InvalidInput(_)));
        assert_eq!(session.session().favorites().len(), 1);
    }

    #[test]
    fn test_invalid_utf8_seed_keeps_session() {
        let mut session = play(Mode::Aa36, "beginner");
        let out = run_bytes(&mut session, b"next\nseed \xff\xfe\nnext\n");

        assert!(out.contains("Error: invalid input: seed material is not valid UTF-8"));
        assert_eq!(session.session().history().len(), 2);
    }

    #[test]
    fn test_parse_bytes() {
        assert_eq!(
            PlayCommand::parse_bytes(b"seed abc\r\n").unwrap(),
            PlayCommand::Seed(Some("abc".to_string()))
        );
        let err = PlayCommand::parse_bytes(b"SEED \xff").unwrap_err();
        assert!(err.to_string().contains("seed material"));
        let err = PlayCommand::parse_bytes(b"mode \xc3").unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
        assert!(err.to_string().contains("input is not valid UTF-8"));
    }

    #[test]
    fn test_reset_makes_prompts_available() {
        let mut session = play(Mode::Villain, "criminal");
        let out = run(&mut session, "next\nreset\n");

        assert!(out.contains("Every prompt is available again."));
        assert!(session.session().used().is_empty());
        assert_eq!(session.session().history().len(), 1);
    }

    #[test]
    fn test_seed_makes_draws_reproducible() {
        let mut a = play(Mode::Ittaku, "beginner");
        let mut b = play(Mode::Ittaku, "beginner");
        run(&mut a, "seed abc\nnext\nnext\n");
        run(&mut b, "seed abc\nnext\nnext\n");

        let prompts = |s: &PlaySession| -> Vec<String> {
            s.session()
                .history()
                .entries()
                .iter()
                .flat_map(|e| e.prompts.clone())
                .collect()
        };
        assert_eq!(prompts(&a), prompts(&b));
    }

    #[test]
    fn test_history_and_export() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        let mut session = play(Mode::Villain, "criminal");

        let script = format!("history\nnext\nhistory\nexport {}\n", path.display());
        let out = run(&mut session, &script);

        assert!(out.contains("Nothing drawn yet."));
        assert!(out.contains("villain:criminal"));
        assert!(out.contains("Exported 1 batches"));
        let exported = std::fs::read_to_string(&path).unwrap();
        assert!(exported.contains("\"dedup_key\": \"villain:criminal\""));
    }

    #[test]
    fn test_help_lists_levels_and_commands() {
        let mut session = play(Mode::Ittaku, "beginner");
        let out = run(&mut session, "help\n");

        assert!(out.contains("Levels: beginner, topic_only, business_topic"));
        assert!(out.contains("export [path]"));
    }

    #[test]
    fn test_unknown_command_keeps_loop_alive() {
        let mut session = play(Mode::Aa36, "beginner");
        let out = run(&mut session, "dance\nnext\n");

        assert!(out.contains("unknown command 'dance'"));
        assert_eq!(session.session().history().len(), 1);
    }
}

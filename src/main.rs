//! Binary entry point for icebreaker.
//!
//! This binary provides the CLI interface for the prompt sampler.

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(missing_docs)]
// Allow print_stderr in main binary for CLI output
#![allow(clippy::print_stderr)]
#![allow(clippy::print_stdout)]
// Allow needless_pass_by_value for command functions
#![allow(clippy::needless_pass_by_value)]
// Allow multiple crate versions from transitive dependencies
#![allow(clippy::multiple_crate_versions)]

use clap::{Parser, Subcommand};
use icebreaker::cli::{self, DrawOptions, OutputFormat, PlayOptions};
use icebreaker::config::CONFIG_PATH_ENV;
use icebreaker::{IcebreakerConfig, Mode, observability};
use std::ffi::OsString;
use std::path::Path;
use std::process::ExitCode;

/// Icebreaker - conversation prompts without repeats.
#[derive(Parser)]
#[command(name = "icebreaker")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file.
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands.
#[derive(Subcommand)]
enum Commands {
    /// Draw one batch of prompts.
    Draw {
        /// Mode: aa36, ittaku or villain.
        #[arg(short, long)]
        mode: Option<String>,

        /// Level key within the mode.
        #[arg(short, long)]
        level: Option<String>,

        /// Number of prompts.
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Seed text for a reproducible draw.
        #[arg(short, long)]
        seed: Option<OsString>,

        /// Output format: text or json.
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// List modes, levels and how to play.
    Modes {
        /// Output format: text or json.
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Start an interactive session.
    Play {
        /// Starting mode: aa36, ittaku or villain.
        #[arg(short, long)]
        mode: Option<String>,

        /// Starting level key.
        #[arg(short, long)]
        level: Option<String>,

        /// Number of prompts per batch.
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Seed text for reproducible draws.
        #[arg(short, long)]
        seed: Option<OsString>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            return ExitCode::FAILURE;
        },
    };

    if let Err(e) = observability::init_from_settings(&config.logging, cli.verbose) {
        eprintln!("Failed to initialize logging: {e}");
        return ExitCode::FAILURE;
    }

    match run_command(cli.command, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        },
    }
}

/// Runs the selected command.
fn run_command(command: Commands, config: &IcebreakerConfig) -> icebreaker::Result<()> {
    match command {
        Commands::Draw {
            mode,
            level,
            count,
            seed,
            format,
        } => {
            let (mode, level) = resolve_selection(config, mode, level)?;
            let options = DrawOptions {
                mode,
                level,
                count: count.or(config.batch_size),
                seed: resolve_seed_arg(config, seed)?,
            };
            cli::cmd_draw(options, parse_format(&format))
        },

        Commands::Modes { format } => cli::cmd_modes(parse_format(&format)),

        Commands::Play {
            mode,
            level,
            count,
            seed,
        } => {
            let (mode, level) = resolve_selection(config, mode, level)?;
            let options = PlayOptions {
                mode,
                level,
                count: count.or(config.batch_size),
                seed: resolve_seed_arg(config, seed)?,
            };
            cli::cmd_play(options)
        },
    }
}

/// Loads configuration from file and environment.
fn load_config(path: Option<&str>) -> icebreaker::Result<IcebreakerConfig> {
    // If a path is provided, load from that file
    if let Some(config_path) = path {
        let config = IcebreakerConfig::load_from_file(Path::new(config_path))?;
        return Ok(config.apply_env_overrides());
    }

    // Environment override for config path
    if let Ok(config_path) = std::env::var(CONFIG_PATH_ENV) {
        if !config_path.trim().is_empty() {
            let config = IcebreakerConfig::load_from_file(Path::new(&config_path))?;
            return Ok(config.apply_env_overrides());
        }
    }

    // Otherwise, load from default location
    Ok(IcebreakerConfig::load_default().apply_env_overrides())
}

/// Picks mode and level from flags, falling back to config.
///
/// A mode flag without a level flag starts at that mode's first level.
fn resolve_selection(
    config: &IcebreakerConfig,
    mode: Option<String>,
    level: Option<String>,
) -> icebreaker::Result<(Mode, String)> {
    match mode {
        Some(name) => {
            let mode: Mode = name.parse()?;
            let level =
                level.unwrap_or_else(|| icebreaker::catalog::default_level(mode).to_string());
            Ok((mode, level))
        },
        None => Ok((
            config.default_mode,
            level.unwrap_or_else(|| config.default_level.clone()),
        )),
    }
}

/// Validates the seed flag, falling back to the configured seed.
fn resolve_seed_arg(
    config: &IcebreakerConfig,
    seed: Option<OsString>,
) -> icebreaker::Result<Option<String>> {
    match seed {
        Some(raw) => cli::seed_text(&raw).map(Some),
        None => Ok(config.seed.clone()),
    }
}

/// Parses an output format flag.
fn parse_format(s: &str) -> OutputFormat {
    s.parse().unwrap_or_default()
}

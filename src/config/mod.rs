//! Configuration management.
//!
//! Settings are layered: built-in defaults, then an optional TOML file, then
//! `ICEBREAKER_*` environment variables, then CLI flags (applied by the
//! binary).
//!
//! ```toml
//! default_mode = "ittaku"
//! default_level = "business_topic"
//! seed = "team-offsite"
//! batch_size = 2
//!
//! [logging]
//! format = "json"
//! level = "debug"
//! file = "/tmp/icebreaker.log"
//! ```

use crate::catalog;
use crate::models::Mode;
use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variable naming an explicit config file.
pub const CONFIG_PATH_ENV: &str = "ICEBREAKER_CONFIG_PATH";

/// Main configuration for icebreaker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IcebreakerConfig {
    /// Mode used when a command does not name one.
    pub default_mode: Mode,
    /// Level used when a command does not name one.
    pub default_level: String,
    /// Seed material used when a command does not pass one.
    pub seed: Option<String>,
    /// Batch size override; `None` keeps each mode's own default.
    pub batch_size: Option<usize>,
    /// Logging settings.
    pub logging: LoggingSettings,
}

/// Logging section in the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LoggingSettings {
    /// Output format: "pretty" or "json".
    pub format: Option<String>,
    /// Filter directive, for example "info" or "icebreaker=debug".
    pub level: Option<String>,
    /// Append logs to this file instead of stderr.
    pub file: Option<PathBuf>,
}

/// Configuration file structure (for TOML parsing).
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    /// Default mode name.
    pub default_mode: Option<String>,
    /// Default level key.
    pub default_level: Option<String>,
    /// Seed material.
    pub seed: Option<String>,
    /// Batch size override.
    pub batch_size: Option<usize>,
    /// Logging section.
    pub logging: Option<LoggingSettings>,
}

impl Default for IcebreakerConfig {
    fn default() -> Self {
        Self {
            default_mode: Mode::Aa36,
            default_level: "beginner".to_string(),
            seed: None,
            batch_size: None,
            logging: LoggingSettings::default(),
        }
    }
}

impl IcebreakerConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or names an
    /// unknown mode.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| Error::OperationFailed {
            operation: "read_config_file".to_string(),
            cause: format!("{}: {}", path.display(), e),
        })?;

        Self::from_toml_str(&contents)
    }

    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML for [`ConfigFile`] or
    /// names an unknown mode.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let file: ConfigFile = toml::from_str(contents).map_err(|e| Error::OperationFailed {
            operation: "parse_config_file".to_string(),
            cause: e.to_string(),
        })?;

        Self::from_config_file(file)
    }

    /// Loads configuration from the default location.
    ///
    /// Checks the following paths in order:
    /// 1. Platform-specific config dir (`~/Library/Application Support/icebreaker/` on macOS)
    /// 2. XDG config dir (`~/.config/icebreaker/`)
    ///
    /// Returns default configuration if no usable config file is found.
    #[must_use]
    pub fn load_default() -> Self {
        let Some(base_dirs) = directories::BaseDirs::new() else {
            return Self::default();
        };

        let candidates = [
            base_dirs.config_dir().join("icebreaker").join("config.toml"),
            base_dirs
                .home_dir()
                .join(".config")
                .join("icebreaker")
                .join("config.toml"),
        ];

        for path in candidates.iter().filter(|p| p.exists()) {
            match Self::load_from_file(path) {
                Ok(config) => return config,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "Ignoring config file");
                },
            }
        }

        Self::default()
    }

    /// Applies `ICEBREAKER_*` environment variable overrides.
    #[must_use]
    pub fn apply_env_overrides(self) -> Self {
        self.apply_overrides_from(|name| std::env::var(name).ok())
    }

    /// Applies overrides read through `lookup`.
    ///
    /// Empty values are ignored, as are values that fail to parse.
    #[must_use]
    pub fn apply_overrides_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        if let Some(value) = get("ICEBREAKER_MODE") {
            match value.parse::<Mode>() {
                Ok(mode) => {
                    self.default_mode = mode;
                    self.default_level = catalog::default_level(mode).to_string();
                },
                Err(e) => tracing::warn!(error = %e, "Ignoring ICEBREAKER_MODE"),
            }
        }
        if let Some(value) = get("ICEBREAKER_LEVEL") {
            self.default_level = value;
        }
        if let Some(value) = get("ICEBREAKER_SEED") {
            self.seed = Some(value);
        }
        if let Some(value) = get("ICEBREAKER_BATCH_SIZE") {
            match value.trim().parse::<usize>() {
                Ok(size) => self.batch_size = Some(size),
                Err(e) => {
                    tracing::warn!(value = %value, error = %e, "Ignoring ICEBREAKER_BATCH_SIZE");
                },
            }
        }
        if let Some(value) = get("ICEBREAKER_LOG_FORMAT") {
            self.logging.format = Some(value);
        }
        if let Some(value) = get("ICEBREAKER_LOG_LEVEL") {
            self.logging.level = Some(value);
        }
        if let Some(value) = get("ICEBREAKER_LOG_FILE") {
            self.logging.file = Some(PathBuf::from(value));
        }

        self
    }

    /// Converts a `ConfigFile` to `IcebreakerConfig`.
    fn from_config_file(file: ConfigFile) -> Result<Self> {
        let mut config = Self::default();

        if let Some(mode) = file.default_mode {
            config.default_mode = mode.parse()?;
            config.default_level = catalog::default_level(config.default_mode).to_string();
        }
        if let Some(level) = file.default_level {
            config.default_level = level;
        }
        if let Some(seed) = file.seed.filter(|s| !s.is_empty()) {
            config.seed = Some(seed);
        }
        config.batch_size = file.batch_size;
        if let Some(logging) = file.logging {
            config.logging = logging;
        }

        Ok(config)
    }

    /// Sets the default mode.
    #[must_use]
    pub const fn with_default_mode(mut self, mode: Mode) -> Self {
        self.default_mode = mode;
        self
    }

    /// Sets the default level.
    #[must_use]
    pub fn with_default_level(mut self, level: impl Into<String>) -> Self {
        self.default_level = level.into();
        self
    }

    /// Sets the seed material.
    #[must_use]
    pub fn with_seed(mut self, seed: impl Into<String>) -> Self {
        self.seed = Some(seed.into());
        self
    }
}

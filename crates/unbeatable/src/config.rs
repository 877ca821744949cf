//! Play configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};
use unbeatable_tictactoe::Mark;

/// Environment variable overriding [`PlayConfig::think_delay_ms`].
pub const THINK_DELAY_ENV: &str = "UNBEATABLE_THINK_DELAY_MS";

/// Settings for an interactive session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PlayConfig {
    /// Mark to start with; when unset the player is asked.
    #[serde(default)]
    default_mark: Option<Mark>,

    /// Pause before revealing the computer's move, in milliseconds.
    #[serde(default = "default_think_delay_ms")]
    think_delay_ms: u64,

    /// Print the tally after every finished match.
    #[serde(default = "default_show_scores")]
    show_scores_each_match: bool,
}

#[instrument]
fn default_think_delay_ms() -> u64 {
    500
}

#[instrument]
fn default_show_scores() -> bool {
    true
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            default_mark: None,
            think_delay_ms: default_think_delay_ms(),
            show_scores_each_match: default_show_scores(),
        }
    }
}

impl PlayConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        Self::from_toml(&content)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        info!(?config, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise defaults, then applies
    /// environment overrides.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::load_with_override(path, std::env::var(THINK_DELAY_ENV).ok())
    }

    /// [`PlayConfig::load`] with the think delay override supplied by the
    /// caller instead of read from the environment.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_with_override(
        path: impl AsRef<Path>,
        think_delay: Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut config = if path.as_ref().exists() {
            Self::from_file(path)?
        } else {
            debug!("Config file not found, using defaults");
            Self::default()
        };
        config.apply_env_override(think_delay)?;
        Ok(config)
    }

    /// Applies a think delay taken from the environment.
    #[instrument(skip(self))]
    pub fn apply_env_override(&mut self, think_delay: Option<String>) -> Result<(), ConfigError> {
        let Some(raw) = think_delay else {
            return Ok(());
        };
        let ms = raw.trim().parse::<u64>().map_err(|e| {
            warn!(value = %raw, "Invalid think delay override");
            ConfigError::new(format!("{} must be milliseconds: {}", THINK_DELAY_ENV, e))
        })?;
        debug!(ms, "Think delay overridden from environment");
        self.think_delay_ms = ms;
        Ok(())
    }

    /// Replaces the starting mark (used by `--mark`).
    pub fn with_default_mark(mut self, mark: Option<Mark>) -> Self {
        if mark.is_some() {
            self.default_mark = mark;
        }
        self
    }

    /// Replaces the think delay.
    pub fn with_think_delay_ms(mut self, ms: u64) -> Self {
        self.think_delay_ms = ms;
        self
    }

    /// The think delay as a [`Duration`].
    pub fn think_delay(&self) -> Duration {
        Duration::from_millis(self.think_delay_ms)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

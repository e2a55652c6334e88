//! Configuration management and validation.
//!
//! Holds the remote endpoints, HTTP settings and output location for a run.
//! Values are layered: built-in defaults, then an optional JSON config file,
//! then environment variables. The CLI applies its own overrides last.

use crate::constants::{self, DEFAULT_TIMEOUT_SECS, PLAYER_CARD_URL, TOURNAMENT_CARD_URL};
use crate::error::{Result, WallistError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

/// Global configuration for wallist processing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WallistConfig {
    /// Tournament card endpoint
    pub tournament_card_url: String,

    /// Player card endpoint
    pub player_card_url: String,

    /// Per-request HTTP timeout in seconds
    pub timeout_secs: u64,

    /// User-Agent header sent with every request
    pub user_agent: String,

    /// Directory the `<pin>.txt` report is written to
    pub output_dir: PathBuf,

    /// Show a progress bar while ratings are fetched
    pub show_progress: bool,
}

impl Default for WallistConfig {
    fn default() -> Self {
        Self {
            tournament_card_url: TOURNAMENT_CARD_URL.to_string(),
            player_card_url: PLAYER_CARD_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: format!("egd-wallist/{}", env!("CARGO_PKG_VERSION")),
            output_dir: PathBuf::from("."),
            show_progress: true,
        }
    }
}

impl WallistConfig {
    /// Default config file location: `<config_dir>/egd-wallist/config.json`
    pub fn default_config_path() -> Result<PathBuf> {
        let dir = dirs::config_dir()
            .ok_or_else(|| WallistError::configuration("Could not determine user config directory"))?;
        Ok(dir.join("egd-wallist").join("config.json"))
    }

    /// Load a config file; missing keys fall back to defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        debug!("Loaded config file {}", path.display());
        Ok(config)
    }

    /// Defaults, then `config_file` if given, then environment variables
    pub fn load_layered(config_file: Option<&Path>) -> Result<Self> {
        let mut config = match config_file {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Apply `EGD_*` overrides read through `lookup`
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(constants::env::TOURNAMENT_CARD_URL) {
            self.tournament_card_url = url;
        }
        if let Some(url) = lookup(constants::env::PLAYER_CARD_URL) {
            self.player_card_url = url;
        }
        if let Some(raw) = lookup(constants::env::TIMEOUT_SECS) {
            self.timeout_secs = raw.trim().parse().map_err(|_| {
                WallistError::configuration(format!(
                    "{} must be a whole number of seconds, got '{}'",
                    constants::env::TIMEOUT_SECS,
                    raw
                ))
            })?;
        }
        Ok(())
    }

    pub fn with_tournament_card_url(mut self, url: impl Into<String>) -> Self {
        self.tournament_card_url = url.into();
        self
    }

    pub fn with_player_card_url(mut self, url: impl Into<String>) -> Self {
        self.player_card_url = url.into();
        self
    }

    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    /// Disable the progress bar (status lines are still printed)
    pub fn without_progress(mut self) -> Self {
        self.show_progress = false;
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Path of the report file for a tournament
    pub fn report_path(&self, tournament_id: &str) -> PathBuf {
        self.output_dir
            .join(format!("{}.{}", tournament_id, constants::REPORT_EXTENSION))
    }

    pub fn validate(&self) -> Result<()> {
        for (name, url) in [
            ("tournament_card_url", &self.tournament_card_url),
            ("player_card_url", &self.player_card_url),
        ] {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(WallistError::configuration(format!(
                    "{} must be an http(s) URL, got '{}'",
                    name, url
                )));
            }
        }

        if self.timeout_secs == 0 {
            return Err(WallistError::configuration("timeout_secs must be greater than 0"));
        }

        if self.user_agent.trim().is_empty() {
            return Err(WallistError::configuration("user_agent must not be empty"));
        }

        Ok(())
    }
}

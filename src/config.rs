//! Configuration file loading.
//!
//! Reads `<config_dir>/portfolio-tui/config.toml`. Every key is optional and
//! a missing file is not an error.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::models::DEFAULT_BREAKPOINT;

const DEFAULT_POLL_INTERVAL_MS: u64 = 100;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config at {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct PortfolioConfig {
    pub ui: Option<UiConfig>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UiConfig {
    /// Width in columns below which the compact menu is used
    pub breakpoint: Option<u16>,
    #[serde(default)]
    pub ascii_only: bool,
    pub poll_interval_ms: Option<u64>,
}

impl PortfolioConfig {
    /// Load the config from its default location; `Ok(None)` when absent.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(None),
        }
    }

    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content)
            .map(Some)
            .map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })
    }

    pub fn path() -> Option<PathBuf> {
        config_path()
    }
}

fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("portfolio-tui").join("config.toml"))
}

/// Resolved UI settings: CLI flag > config file > default
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiSettings {
    pub breakpoint: u16,
    pub ascii_only: bool,
    pub poll_interval: Duration,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            breakpoint: DEFAULT_BREAKPOINT,
            ascii_only: false,
            poll_interval: Duration::from_millis(DEFAULT_POLL_INTERVAL_MS),
        }
    }
}

impl UiSettings {
    pub fn resolve(
        config: Option<&PortfolioConfig>,
        breakpoint_flag: Option<u16>,
        ascii_flag: bool,
    ) -> Self {
        let ui = config.and_then(|cfg| cfg.ui.as_ref());
        let defaults = Self::default();

        let breakpoint = breakpoint_flag
            .or_else(|| ui.and_then(|ui| ui.breakpoint))
            .unwrap_or(defaults.breakpoint);
        let ascii_only = ascii_flag || ui.is_some_and(|ui| ui.ascii_only);
        let poll_interval = ui
            .and_then(|ui| ui.poll_interval_ms)
            .map(Duration::from_millis)
            .unwrap_or(defaults.poll_interval);

        Self {
            breakpoint,
            ascii_only,
            poll_interval,
        }
    }
}

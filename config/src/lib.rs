//! Configuration loading for L-Box.
//!
//! The config file is optional. When present it supplies run defaults that
//! command line flags override:
//!
//! ```toml
//! [run]
//! max_steps = 1000
//! seed = "10031980"
//!
//! [packing]
//! paradox = false
//!
//! [log]
//! level = "warn"
//! ```
//!
//! Lookup order: `$LBOX_CONFIG`, then `~/.lbox/config.toml`.

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use toml::de;

use lbox_types::{Seed, SeedError, StepLimit, StepLimitError};

pub const CONFIG_ENV_VAR: &str = "LBOX_CONFIG";

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LboxConfig {
    pub run: Option<RunConfig>,
    pub packing: Option<PackingConfig>,
    pub log: Option<LogConfig>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunConfig {
    /// Step budget when `--max-steps` is not given.
    pub max_steps: Option<u64>,
    /// Start value when none is given on the command line. Decimal or `base^exp`.
    pub seed: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PackingConfig {
    /// Use AI_PARADOX instead of A as the base packing mode.
    #[serde(default)]
    pub paradox: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LogConfig {
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    pub level: Option<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: io::Error,
    },
    #[error("failed to parse config at {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: de::Error,
    },
    #[error("invalid [run] max_steps: {0}")]
    StepLimit(#[from] StepLimitError),
    #[error("invalid [run] seed: {0}")]
    Seed(#[from] SeedError),
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => Some(path),
            ConfigError::StepLimit(_) | ConfigError::Seed(_) => None,
        }
    }
}

impl LboxConfig {
    /// Load from the default location. `Ok(None)` when no file exists.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(None),
        }
    }

    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file");
            return Ok(None);
        }

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        match Self::parse(&content) {
            Ok(config) => {
                tracing::debug!(path = %path.display(), "Loaded config");
                Ok(Some(config))
            }
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }

    pub fn parse(content: &str) -> Result<Self, de::Error> {
        toml::from_str(content)
    }

    /// Configured step limit, validated. `Ok(None)` when unset.
    pub fn step_limit(&self) -> Result<Option<StepLimit>, ConfigError> {
        self.run
            .as_ref()
            .and_then(|run| run.max_steps)
            .map(StepLimit::new)
            .transpose()
            .map_err(ConfigError::from)
    }

    /// Configured start value, validated. `Ok(None)` when unset.
    pub fn seed(&self) -> Result<Option<Seed>, ConfigError> {
        self.run
            .as_ref()
            .and_then(|run| run.seed.as_deref())
            .map(str::parse::<Seed>)
            .transpose()
            .map_err(ConfigError::from)
    }

    #[must_use]
    pub fn paradox(&self) -> bool {
        self.packing.as_ref().is_some_and(|p| p.paradox)
    }

    #[must_use]
    pub fn log_level(&self) -> Option<&str> {
        self.log.as_ref().and_then(|log| log.level.as_deref())
    }
}

/// Config file location: `$LBOX_CONFIG` if set and non-empty, else
/// `~/.lbox/config.toml`.
#[must_use]
pub fn config_path() -> Option<PathBuf> {
    match env::var_os(CONFIG_ENV_VAR) {
        Some(path) if !path.is_empty() => Some(PathBuf::from(path)),
        _ => default_config_path(),
    }
}

#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".lbox").join("config.toml"))
}

//! Optional `notam.toml` configuration.
//!
//! ```toml
//! dictionary = "dictionaries/icao_abbreviations.csv"
//! strict = false
//!
//! [suggest]
//! limit = 3
//! cutoff = 0.6
//! ```
//!
//! Command-line flags take precedence over anything set here.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use notam_map::{DEFAULT_CUTOFF, DEFAULT_LIMIT, SuggestOptions};

/// Looked up in the working directory when `--config` is not given.
pub const CONFIG_FILE_NAME: &str = "notam.toml";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Dictionary CSV. Relative paths are resolved against the config file.
    pub dictionary: Option<PathBuf>,
    /// Reject blank dictionary rows instead of skipping them.
    pub strict: bool,
    pub suggest: SuggestSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SuggestSettings {
    pub limit: usize,
    pub cutoff: f64,
}

impl Default for SuggestSettings {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            cutoff: DEFAULT_CUTOFF,
        }
    }
}

impl SuggestSettings {
    pub fn options(&self) -> SuggestOptions {
        SuggestOptions::default()
            .with_limit(self.limit)
            .with_cutoff(self.cutoff)
    }
}

impl AppConfig {
    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, `./notam.toml` is used when
    /// present and defaults apply otherwise.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::load_from(path),
            None => {
                let path = PathBuf::from(CONFIG_FILE_NAME);
                if path.is_file() {
                    Self::load_from(&path)
                } else {
                    debug!("no config file; using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    /// Load configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config: Self = toml::from_str(&content).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        })?;
        if let (Some(dictionary), Some(base)) = (&config.dictionary, path.parent())
            && dictionary.is_relative()
        {
            config.dictionary = Some(base.join(dictionary));
        }
        debug!(path = %path.display(), "config loaded");
        Ok(config)
    }
}

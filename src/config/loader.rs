use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Why feedview refused to start from a config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file exists but could not be read (permissions, a directory, ...).
    #[error("Cannot read config '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Not valid TOML, or an unknown value such as `mode = "eager"`.
    #[error("Cannot parse config '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid config: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// `feedview/config.toml` under the platform config dir, relative to the
    /// working directory when the platform has none.
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_default()
            .join("feedview")
            .join("config.toml")
    }

    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// A missing file means "all defaults", not an error.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "No config file, using defaults");
                return Ok(Config::default());
            }
            Err(source) => {
                return Err(ConfigError::ReadError {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        let config = toml::from_str::<Config>(&content).map_err(|source| ConfigError::ParseError {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;

        tracing::debug!(
            path = %path.display(),
            endpoint = %config.view.endpoint,
            mode = config.view.mode.label(),
            "Config loaded"
        );
        Ok(config)
    }

    /// Rejects an empty endpoint, an empty param and a zero request timeout.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.view.endpoint.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "view.endpoint must not be empty".to_string(),
            });
        }

        if matches!(self.view.param.as_deref(), Some(p) if p.trim().is_empty()) {
            return Err(ConfigError::ValidationError {
                message: "view.param must not be empty when set".to_string(),
            });
        }

        if self.http.timeout_seconds == 0 {
            return Err(ConfigError::ValidationError {
                message: "http.timeout_seconds must be greater than zero".to_string(),
            });
        }

        Ok(())
    }
}

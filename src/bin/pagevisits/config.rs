//! Configuration for the page-visit report.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Pipeline configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL prepended to request targets.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Regex splitting a log line into client address and request.
    #[serde(default = "default_line_pattern")]
    pub line_pattern: String,

    /// Request-target prefix treated as a static asset and skipped.
    #[serde(default = "default_static_prefix")]
    pub static_prefix: String,
}

fn default_base_url() -> String {
    "http://example.com".to_string()
}

fn default_line_pattern() -> String {
    r#"^(\S+).+"([^"]+)""#.to_string()
}

fn default_static_prefix() -> String {
    "/static".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            line_pattern: default_line_pattern(),
            static_prefix: default_static_prefix(),
        }
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("config validation failed: {message}")]
    Validation { message: String },
}

impl Config {
    /// Loads configuration from a TOML file and validates it.
    ///
    /// Missing fields fall back to the defaults above.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_url.is_empty() {
            return Err(ConfigError::Validation {
                message: "base_url must not be empty".to_string(),
            });
        }

        if !self.static_prefix.starts_with('/') {
            return Err(ConfigError::Validation {
                message: format!(
                    "static_prefix must start with '/', got '{}'",
                    self.static_prefix
                ),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_validate() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn loads_partial_config_with_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "base_url = \"https://blog.invalid\"").unwrap();

        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.base_url, "https://blog.invalid");
        assert_eq!(config.static_prefix, "/static");
    }

    #[test]
    fn rejects_unparseable_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "base_url = [not toml").unwrap();

        assert!(matches!(
            Config::load_from(file.path()),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn rejects_empty_base_url() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "base_url = \"\"").unwrap();

        assert!(matches!(
            Config::load_from(file.path()),
            Err(ConfigError::Validation { .. })
        ));
    }

    #[test]
    fn read_error_for_missing_file() {
        assert!(matches!(
            Config::load_from(Path::new("/nonexistent/pagevisits.toml")),
            Err(ConfigError::Read { .. })
        ));
    }
}

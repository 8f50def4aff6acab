use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Environment variable that overrides `api.base_url`.
pub const API_URL_ENV: &str = "BOOKSHELF_API_URL";

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/bookshelf/config.toml` on Linux, or the platform
    /// equivalent via `dirs::config_dir()`. Falls back to the current
    /// directory if no config dir is available.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("bookshelf").join("config.toml")
    }

    /// Loads configuration from the default config file, then applies the
    /// `BOOKSHELF_API_URL` override and finally `cli_api_url` (from
    /// `--api-url`). Validation runs once, on the merged result.
    pub fn load_with(cli_api_url: Option<String>) -> Result<Self, ConfigError> {
        Self::resolve(
            &Self::config_path(),
            std::env::var(API_URL_ENV).ok(),
            cli_api_url,
        )
    }

    /// Merges file, environment and command-line sources, in that order of
    /// increasing precedence, then validates.
    pub fn resolve(
        path: &Path,
        env_api_url: Option<String>,
        cli_api_url: Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::read_from(path)?;
        config.apply_env_override(env_api_url);
        config.apply_cli_override(cli_api_url);
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from an explicit path.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let config = Self::read_from(path)?;
        config.validate()?;
        Ok(config)
    }

    fn read_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Applies `BOOKSHELF_API_URL`. Blank values are ignored.
    pub fn apply_env_override(&mut self, api_url: Option<String>) {
        self.override_base_url(api_url);
    }

    /// Applies `--api-url`. Takes precedence over the environment when
    /// applied after [`Config::apply_env_override`].
    pub fn apply_cli_override(&mut self, api_url: Option<String>) {
        self.override_base_url(api_url);
    }

    fn override_base_url(&mut self, api_url: Option<String>) {
        if let Some(url) = api_url.filter(|url| !url.trim().is_empty()) {
            self.api.base_url = url;
        }
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The base URL is non-empty and uses http or https
    /// - Both timeouts are non-zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        let base_url = self.api.base_url.trim();
        if base_url.is_empty() {
            return Err(ConfigError::ValidationError {
                message: "api.base_url must not be empty".to_string(),
            });
        }

        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::ValidationError {
                message: format!("api.base_url '{}' must start with http:// or https://", base_url),
            });
        }

        if self.api.timeout_seconds == 0 || self.api.connect_timeout_seconds == 0 {
            return Err(ConfigError::ValidationError {
                message: "api timeouts must be greater than zero".to_string(),
            });
        }

        Ok(())
    }
}

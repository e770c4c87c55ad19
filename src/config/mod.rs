//! Runtime configuration: defaults, then an optional TOML file, then the
//! environment (`MODEL`, `API_KEY`, `API_URL`).

use crate::llm::DEFAULT_MODEL;
use crate::profile::{Language, ProfileError};
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;
use url::Url;
use zeroize::Zeroizing;

pub const DEFAULT_API_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("Missing API key (set API_KEY or api_key in the config file)")]
    MissingApiKey,
    #[error("Invalid API URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error("Request timeout must be at least one second")]
    InvalidTimeout,
    #[error(transparent)]
    Language(#[from] ProfileError),
}

/// On-disk shape; every key is optional.
#[derive(Deserialize, Debug, Default)]
struct FileConfig {
    model: Option<String>,
    api_key: Option<String>,
    api_url: Option<String>,
    request_timeout_secs: Option<u64>,
    default_language: Option<String>,
}

#[derive(Clone)]
pub struct Config {
    pub model: String,
    pub api_key: Zeroizing<String>,
    pub api_url: String,
    pub request_timeout_secs: u64,
    pub default_language: Language,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            api_key: Zeroizing::new(String::new()),
            api_url: DEFAULT_API_URL.to_string(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            default_language: Language::English,
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = if self.api_key.is_empty() { "<unset>" } else { "<redacted>" };
        f.debug_struct("Config")
            .field("model", &self.model)
            .field("api_key", &key)
            .field("api_url", &self.api_url)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("default_language", &self.default_language)
            .finish()
    }
}

impl Config {
    /// Defaults overlaid with the given TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let file: FileConfig = toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        let mut config = Self::default();
        config.merge(file)?;
        debug!(path = %path.display(), "Loaded config file");
        Ok(config)
    }

    /// Full resolution order used by the binary. Does not validate.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Overrides from `MODEL`, `API_KEY` and `API_URL`; blank values are ignored.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(model) = get("MODEL") {
            self.model = model;
        }
        if let Some(key) = get("API_KEY") {
            self.api_key = Zeroizing::new(key);
        }
        if let Some(url) = get("API_URL") {
            self.api_url = url;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_key.trim().is_empty() {
            return Err(ConfigError::MissingApiKey);
        }
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout);
        }

        let url = Url::parse(&self.api_url).map_err(|e| ConfigError::InvalidUrl {
            url: self.api_url.clone(),
            reason: e.to_string(),
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidUrl {
                url: self.api_url.clone(),
                reason: format!("unsupported scheme {}", url.scheme()),
            });
        }
        Ok(())
    }

    fn merge(&mut self, file: FileConfig) -> Result<(), ConfigError> {
        if let Some(model) = file.model {
            self.model = model;
        }
        if let Some(key) = file.api_key {
            self.api_key = Zeroizing::new(key);
        }
        if let Some(url) = file.api_url {
            self.api_url = url;
        }
        if let Some(secs) = file.request_timeout_secs {
            self.request_timeout_secs = secs;
        }
        if let Some(language) = file.default_language {
            self.default_language = language.parse()?;
        }
        Ok(())
    }
}

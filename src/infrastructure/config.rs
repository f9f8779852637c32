//! TOML configuration with environment overrides.
//!
//! Every key is optional. A missing default config file is not an error;
//! a missing file passed explicitly is.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_CONFIG_FILE: &str = "optalpha.toml";
pub const DEFAULT_TABLE: &str = "contact_submissions";
pub const DEFAULT_OUTBOX_FILE: &str = "submissions.jsonl";

pub const ENV_BACKEND_URL: &str = "OPTALPHA_BACKEND_URL";
pub const ENV_BACKEND_KEY: &str = "OPTALPHA_BACKEND_KEY";
pub const ENV_BACKEND_TABLE: &str = "OPTALPHA_BACKEND_TABLE";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid `{key}`: {reason}")]
    Invalid { key: &'static str, reason: String },

    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub backend: BackendConfig,
    pub ui: UiConfig,
    pub logging: LoggingConfig,
    pub outbox: OutboxConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Project URL, e.g. `https://xyz.supabase.co`. Absent means use the outbox.
    pub url: Option<String>,
    pub anon_key: Option<String>,
    pub table: String,
    /// Absent means requests may hang indefinitely.
    pub timeout_secs: Option<u64>,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            url: None,
            anon_key: None,
            table: DEFAULT_TABLE.to_string(),
            timeout_secs: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub toast_seconds: u64,
    pub tick_millis: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            toast_seconds: 4,
            tick_millis: 100,
        }
    }
}

impl UiConfig {
    pub fn toast_lifetime(&self) -> Duration {
        Duration::from_secs(self.toast_seconds)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_millis.max(10))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub file: PathBuf,
    /// `EnvFilter` directive; `RUST_LOG` wins when set.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from("optalpha.log"),
            filter: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OutboxConfig {
    pub file: PathBuf,
}

impl Default for OutboxConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from(DEFAULT_OUTBOX_FILE),
        }
    }
}

impl Config {
    pub fn from_toml(content: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Loads `path`, or `optalpha.toml` in the working directory when `path` is `None`.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let (path, explicit) = match path {
            Some(path) => (path.to_path_buf(), true),
            None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
        };

        if !explicit && !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        Self::from_toml(&content, &path)
    }

    /// Applies overrides from a variable lookup. Empty values are ignored.
    pub fn apply_env_with<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        if let Some(url) = get(ENV_BACKEND_URL) {
            self.backend.url = Some(url);
        }
        if let Some(key) = get(ENV_BACKEND_KEY) {
            self.backend.anon_key = Some(key);
        }
        if let Some(table) = get(ENV_BACKEND_TABLE) {
            self.backend.table = table;
        }
    }

    pub fn apply_env(&mut self) {
        self.apply_env_with(|name| std::env::var(name).ok());
    }
}

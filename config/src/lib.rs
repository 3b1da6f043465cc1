//! Configuration for the snippets workspace.
//!
//! Configuration lives in `~/.snippets/config.toml`. Every section is optional;
//! a missing file means defaults everywhere.
//!
//! ```toml
//! [producer]
//! delay_ms = 1000
//! success_message = "Promise 成功！"
//! failure_message = "Promise 失败！"
//!
//! [join]
//! count = 3
//! sibling_policy = "detach"
//! ```

use serde::Deserialize;
use std::{
    env, fs,
    path::{Path, PathBuf},
    time::Duration,
};
use thiserror::Error;

use snippets_types::{
    DEFAULT_DELAY_MS, DEFAULT_JOIN_COUNT, FAILURE_MESSAGE, SUCCESS_MESSAGE, SiblingPolicy,
};

/// Overrides `producer.delay_ms` when set to an integer.
pub const DELAY_ENV_VAR: &str = "SNIPPETS_DELAY_MS";

#[derive(Debug, Default, Deserialize)]
pub struct SnippetsConfig {
    pub producer: Option<ProducerConfig>,
    pub join: Option<JoinConfig>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config at {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl ConfigError {
    pub fn path(&self) -> &PathBuf {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

/// Settings for the delayed result producer.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ProducerConfig {
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
    #[serde(default = "default_success_message")]
    pub success_message: String,
    #[serde(default = "default_failure_message")]
    pub failure_message: String,
}

impl Default for ProducerConfig {
    fn default() -> Self {
        Self {
            delay_ms: DEFAULT_DELAY_MS,
            success_message: SUCCESS_MESSAGE.to_string(),
            failure_message: FAILURE_MESSAGE.to_string(),
        }
    }
}

impl ProducerConfig {
    #[must_use]
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

/// Settings for the concurrent join demonstration.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
pub struct JoinConfig {
    #[serde(default = "default_join_count")]
    pub count: usize,
    #[serde(default)]
    pub sibling_policy: SiblingPolicy,
}

impl Default for JoinConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_JOIN_COUNT,
            sibling_policy: SiblingPolicy::default(),
        }
    }
}

const fn default_delay_ms() -> u64 {
    DEFAULT_DELAY_MS
}

fn default_success_message() -> String {
    SUCCESS_MESSAGE.to_string()
}

fn default_failure_message() -> String {
    FAILURE_MESSAGE.to_string()
}

const fn default_join_count() -> usize {
    DEFAULT_JOIN_COUNT
}

impl SnippetsConfig {
    /// Load `~/.snippets/config.toml` if it exists.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        let path = match config_path() {
            Some(path) => path,
            None => return Ok(None),
        };
        if !path.exists() {
            return Ok(None);
        }
        Self::load_from(&path).map(Some)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
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

        match toml::from_str(&content) {
            Ok(config) => Ok(config),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    /// Producer settings with the `SNIPPETS_DELAY_MS` override applied.
    #[must_use]
    pub fn producer(&self) -> ProducerConfig {
        let mut producer = self.producer.clone().unwrap_or_default();
        if let Some(delay_ms) = delay_override() {
            producer.delay_ms = delay_ms;
        }
        producer
    }

    #[must_use]
    pub fn join(&self) -> JoinConfig {
        self.join.unwrap_or_default()
    }
}

fn delay_override() -> Option<u64> {
    let raw = env::var(DELAY_ENV_VAR).ok()?;
    match raw.trim().parse::<u64>() {
        Ok(delay_ms) => Some(delay_ms),
        Err(err) => {
            tracing::warn!("Ignoring {DELAY_ENV_VAR}={raw:?}: {err}");
            None
        }
    }
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".snippets").join("config.toml"))
}

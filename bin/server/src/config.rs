//! `lemon_push.conf` loading and first-run bootstrap.
//!
//! The file holds newline-delimited `key=value` pairs. Known keys are `port`,
//! `folder` and `ip`; unknown keys are kept but unused. Values are not
//! validated here: a bad port shows up as a bind failure, an empty folder as
//! filesystem errors.

use crate::constants::{BIND_HOST, CONFIG_FILE_NAME, DEFAULT_FOLDER, DEFAULT_PORT};
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

pub const KEY_PORT: &str = "port";
pub const KEY_FOLDER: &str = "folder";
pub const KEY_IP: &str = "ip";

/// Error type for configuration file operations
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not locate the running executable: {0}")]
    NoExecutableDir(#[source] std::io::Error),

    #[error("failed to read config {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write default config {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Settings loaded once at startup and read-only afterwards
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    values: BTreeMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        let values = [
            (KEY_PORT, DEFAULT_PORT),
            (KEY_FOLDER, DEFAULT_FOLDER),
            (KEY_IP, ""),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
        Self { values }
    }
}

impl Config {
    /// Parse `key=value` lines. Lines without `=` are skipped; the split is on
    /// the first `=` and both sides are trimmed. Later duplicates win.
    pub fn parse(content: &str) -> Self {
        let values = content
            .lines()
            .filter_map(|line| line.split_once('='))
            .map(|(key, value)| (key.trim().to_string(), value.trim().to_string()))
            .collect();
        Self { values }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn entries(&self) -> &BTreeMap<String, String> {
        &self.values
    }

    pub fn port(&self) -> &str {
        self.get(KEY_PORT).unwrap_or_default()
    }

    pub fn folder(&self) -> &str {
        self.get(KEY_FOLDER).unwrap_or_default()
    }

    /// Fixed address to advertise, or `None` to ask the operator
    pub fn ip(&self) -> Option<&str> {
        self.get(KEY_IP).filter(|ip| !ip.is_empty())
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", BIND_HOST, self.port())
    }

    /// What the pairing code encodes: `<address>:<port>`
    pub fn pairing_payload(&self, address: &str) -> String {
        format!("{}:{}", address, self.port())
    }

    /// Serialized form; the three known keys come first in a fixed order
    pub fn render(&self) -> String {
        let known = [KEY_PORT, KEY_FOLDER, KEY_IP];
        let mut out = String::new();
        for key in known {
            if let Some(value) = self.get(key) {
                out.push_str(&format!("{}={}\n", key, value));
            }
        }
        for (key, value) in &self.values {
            if !known.contains(&key.as_str()) {
                out.push_str(&format!("{}={}\n", key, value));
            }
        }
        out
    }
}

/// Loads the config file, writing defaults first if it does not exist
pub struct ConfigStore;

impl ConfigStore {
    /// `lemon_push.conf` in the directory of the running executable
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let exe = std::env::current_exe().map_err(ConfigError::NoExecutableDir)?;
        let dir = exe.parent().unwrap_or_else(|| Path::new("."));
        Ok(dir.join(CONFIG_FILE_NAME))
    }

    pub fn load(path: &Path) -> Result<Config, ConfigError> {
        match fs::read_to_string(path) {
            Ok(content) => Ok(Config::parse(&content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Self::bootstrap(path),
            Err(source) => Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    fn bootstrap(path: &Path) -> Result<Config, ConfigError> {
        let config = Config::default();
        fs::write(path, config.render()).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        info!("Config {:?} not found, wrote defaults", path);
        Ok(config)
    }
}

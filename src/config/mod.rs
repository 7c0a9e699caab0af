//! Configuration for indra-tui.

use crate::paths;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Root URL of the Indra API server.
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// URL of the project description, opened externally on request.
    #[serde(default = "default_docs_url")]
    pub docs_url: String,

    /// Poll interval in milliseconds for the event loop.
    #[serde(default = "default_poll_interval")]
    pub poll_interval_ms: u64,
}

fn default_api_url() -> String {
    "https://indrasnet.pythonanywhere.com/".to_string()
}

fn default_docs_url() -> String {
    "https://gcallah.github.io/indras_net/index.html".to_string()
}

const fn default_poll_interval() -> u64 {
    100
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            docs_url: default_docs_url(),
            poll_interval_ms: default_poll_interval(),
        }
    }
}

impl Config {
    /// Default location of the config file.
    #[must_use]
    pub fn default_path() -> PathBuf {
        paths::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("indra-tui")
            .join("config.json")
    }

    /// Load configuration from the default location, falling back to
    /// defaults when no config file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be read or
    /// parsed.
    pub fn load() -> Result<Self> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let config = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;
        Ok(config)
    }
}

//! Configuration handling for the TUI

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Endpoint used when neither the config file nor the environment sets one
pub const DEFAULT_ENDPOINT: &str = "https://your-api-endpoint.com/path";

/// Request timeout used when the config file does not set one
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Environment variable that overrides the configured endpoint
pub const ENDPOINT_ENV_VAR: &str = "HOUSING_TUI_ENDPOINT";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Aggregation endpoint receiving the search form
    pub endpoint: Option<String>,
    /// Request timeout in seconds
    pub timeout_secs: Option<u64>,
}

/// Settings the submit client is built from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitConfig {
    pub endpoint: String,
    pub timeout: Duration,
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "housing-aggregator", "housing-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific file, defaulting when it is absent
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: TuiConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration, falling back to defaults on a broken file
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            tracing::warn!("Ignoring unreadable config file: {e}");
            Self::default()
        })
    }

    /// Resolve the submit settings.
    ///
    /// A non-empty `env_endpoint` wins over the file, which wins over the
    /// built-in default.
    pub fn submit_config(&self, env_endpoint: Option<String>) -> SubmitConfig {
        let endpoint = env_endpoint
            .filter(|e| !e.trim().is_empty())
            .or_else(|| self.endpoint.clone())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        let timeout = Duration::from_secs(self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS));

        SubmitConfig { endpoint, timeout }
    }

    /// Resolve the submit settings using the process environment
    pub fn submit_config_from_env(&self) -> SubmitConfig {
        self.submit_config(std::env::var(ENDPOINT_ENV_VAR).ok())
    }
}

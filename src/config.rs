use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::api::DEFAULT_SOURCE_URL;

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// URL returning the countries JSON array
    pub source_url: String,
    /// Local JSON file to load instead of `source_url`
    pub data_file: Option<PathBuf>,
    pub request_timeout_secs: u64,
    pub vim_mode: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_url: DEFAULT_SOURCE_URL.to_string(),
            data_file: None,
            request_timeout_secs: 30,
            vim_mode: false,
        }
    }
}

impl Config {
    pub fn from_yaml(text: &str) -> Result<Self> {
        // An empty file deserializes to unit, not a mapping
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(text).context("Failed to parse config")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_yaml(&text)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }
}

/// Determine the config file path with fallback logic
///
/// An explicit path must exist. Otherwise `<config_dir>/globetui/config.yaml`,
/// then `./config.yaml`; `None` means run on defaults.
pub fn find_config_path(cli_path: Option<&Path>) -> Result<Option<PathBuf>> {
    if let Some(path) = cli_path {
        if path.exists() {
            return Ok(Some(path.to_path_buf()));
        }
        anyhow::bail!("Config file not found at specified path: {}", path.display());
    }

    if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join("globetui").join("config.yaml");
        if config_path.exists() {
            return Ok(Some(config_path));
        }
    }

    let local_config = PathBuf::from("config.yaml");
    if local_config.exists() {
        return Ok(Some(local_config));
    }

    Ok(None)
}

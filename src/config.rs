use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Client configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Poll service connection settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Base URL of the poll service
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Polls requested per page when listing everything
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Request timeout in seconds (transport default when unset)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_page_size() -> u32 {
    10
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            page_size: default_page_size(),
            timeout_secs: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl ClientConfig {
    /// Load configuration from file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: ClientConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        config.validate()?;

        Ok(config)
    }

    /// Load the explicit file if given, else the default file if it exists, else defaults
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        match resolve_path(explicit) {
            Some(path) => Self::load(&path),
            None => Ok(Self::default()),
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        let url = url::Url::parse(&self.api.base_url)
            .with_context(|| format!("Invalid base URL: {}", self.api.base_url))?;

        if url.scheme() != "http" && url.scheme() != "https" {
            anyhow::bail!("Base URL must use http or https (got: {})", url.scheme());
        }

        if self.api.page_size == 0 {
            anyhow::bail!("Page size must be at least 1");
        }

        if self.api.timeout_secs == Some(0) {
            anyhow::bail!("Timeout must be at least 1 second");
        }

        Ok(())
    }
}

/// File `resolve` would load: the explicit path, else the per-user file if present
pub fn resolve_path(explicit: Option<&Path>) -> Option<PathBuf> {
    match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => get_config_path().filter(|path| path.exists()),
    }
}

/// Get the per-user config file path
pub fn get_config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "poll-client")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

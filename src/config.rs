// src/config.rs
//
// Runtime configuration.
//
// Priority, highest first:
// 1. Command-line flag
// 2. Environment variable (clap binds both through `ConfigOverrides`)
// 3. TOML config file (`--config`, or `<config_dir>/ragapro/config.toml`)
// 4. Compiled default

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{AppError, AppResult};

pub const DEFAULT_API_BASE_URL: &str = "https://localhost:44308/api";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
const MAX_TIMEOUT_SECS: u64 = 300;
const CONFIG_DIR_NAME: &str = "ragapro";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Effective configuration after all layers are merged
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Root of the REST API, e.g. `https://localhost:44308/api`
    pub api_base_url: String,

    /// Per-request transport timeout
    pub request_timeout_secs: u64,

    /// Accept self-signed certificates (local development servers)
    pub accept_invalid_certs: bool,

    /// `None` selects the build-mode default
    pub log_level: Option<String>,

    /// Write rotating log files here instead of stderr
    pub log_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            accept_invalid_certs: false,
            log_level: None,
            log_dir: None,
        }
    }
}

/// Shape of the TOML file. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub api_base_url: Option<String>,
    pub request_timeout_secs: Option<u64>,
    pub accept_invalid_certs: Option<bool>,
    pub log_level: Option<String>,
    pub log_dir: Option<PathBuf>,
}

/// Flag and environment layer
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ConfigOverrides {
    /// REST API base URL
    #[arg(long = "api-url", env = "RAGAPRO_API_URL", global = true)]
    pub api_base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long = "timeout", env = "RAGAPRO_TIMEOUT_SECS", global = true)]
    pub request_timeout_secs: Option<u64>,

    /// Accept invalid TLS certificates
    #[arg(long = "insecure", env = "RAGAPRO_ACCEPT_INVALID_CERTS", global = true)]
    pub accept_invalid_certs: bool,

    /// trace|debug|info|warn|error
    #[arg(long = "log-level", env = "RAGAPRO_LOG_LEVEL", global = true)]
    pub log_level: Option<String>,

    /// Directory for rotating log files
    #[arg(long = "log-dir", env = "RAGAPRO_LOG_DIR", global = true)]
    pub log_dir: Option<PathBuf>,

    /// Explicit config file path
    #[arg(long = "config", env = "RAGAPRO_CONFIG", global = true)]
    pub config_path: Option<PathBuf>,
}

impl AppConfig {
    /// Build the effective configuration and validate it
    pub fn load(overrides: &ConfigOverrides) -> AppResult<Self> {
        let file = match &overrides.config_path {
            Some(path) => Some(read_config_file(path)?),
            None => match default_config_path() {
                Some(path) if path.exists() => Some(read_config_file(&path)?),
                _ => None,
            },
        };

        let config = Self::default()
            .merge_file(file.unwrap_or_default())
            .merge_overrides(overrides);

        config.validate()?;
        Ok(config)
    }

    pub fn merge_file(self, file: FileConfig) -> Self {
        Self {
            api_base_url: file.api_base_url.unwrap_or(self.api_base_url),
            request_timeout_secs: file.request_timeout_secs.unwrap_or(self.request_timeout_secs),
            accept_invalid_certs: file.accept_invalid_certs.unwrap_or(self.accept_invalid_certs),
            log_level: file.log_level.or(self.log_level),
            log_dir: file.log_dir.or(self.log_dir),
        }
    }

    pub fn merge_overrides(self, overrides: &ConfigOverrides) -> Self {
        Self {
            api_base_url: overrides
                .api_base_url
                .clone()
                .unwrap_or(self.api_base_url),
            request_timeout_secs: overrides
                .request_timeout_secs
                .unwrap_or(self.request_timeout_secs),
            // A flag can only switch this on
            accept_invalid_certs: overrides.accept_invalid_certs || self.accept_invalid_certs,
            log_level: overrides.log_level.clone().or(self.log_level),
            log_dir: overrides.log_dir.clone().or(self.log_dir),
        }
    }

    pub fn validate(&self) -> AppResult<()> {
        let url = reqwest::Url::parse(&self.api_base_url).map_err(|e| {
            AppError::Config(format!("Invalid api_base_url `{}`: {}", self.api_base_url, e))
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(AppError::Config(format!(
                "api_base_url must use http or https, got `{}`",
                url.scheme()
            )));
        }

        if !(1..=MAX_TIMEOUT_SECS).contains(&self.request_timeout_secs) {
            return Err(AppError::Config(format!(
                "request_timeout_secs must be between 1 and {}, got {}",
                MAX_TIMEOUT_SECS, self.request_timeout_secs
            )));
        }

        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// `<config_dir>/ragapro/config.toml`, if the platform has a config dir
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

pub fn read_config_file(path: &Path) -> AppResult<FileConfig> {
    let content = std::fs::read_to_string(path)?;
    parse_config(&content)
}

pub fn parse_config(content: &str) -> AppResult<FileConfig> {
    Ok(toml::from_str(content)?)
}

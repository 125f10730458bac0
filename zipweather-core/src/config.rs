use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    env, fs,
    net::SocketAddr,
    path::{Path, PathBuf},
};

use crate::model::Unit;

/// Environment variable holding the provider credential.
pub const ENV_API_KEY: &str = "WEATHER_API_KEY";
/// Environment variable overriding the server bind address.
pub const ENV_BIND: &str = "ZIPWEATHER_BIND";
/// Environment variable overriding the upstream base URL.
pub const ENV_API_BASE: &str = "WEATHER_API_BASE";

/// Runtime settings for the proxy server.
///
/// The provider key is optional on purpose: a missing key is a recoverable
/// per-request condition (the route answers 500), never a startup failure.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub upstream_base_url: String,
    pub api_key: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            upstream_base_url: "http://api.weatherapi.com/v1".to_string(),
            api_key: None,
        }
    }
}

impl ServerConfig {
    /// Read settings from the process environment, falling back to defaults.
    pub fn from_env() -> Result<Self> {
        let mut cfg = Self::default();

        if let Ok(bind) = env::var(ENV_BIND) {
            cfg.bind_addr = parse_bind_addr(&bind)?;
        }

        if let Ok(base) = env::var(ENV_API_BASE) {
            cfg.upstream_base_url = base;
        }

        cfg.api_key = env::var(ENV_API_KEY).ok().filter(|key| !key.is_empty());

        Ok(cfg)
    }
}

fn parse_bind_addr(value: &str) -> Result<SocketAddr> {
    value.parse().with_context(|| format!("Invalid {ENV_BIND} value: {value}"))
}

/// Preferences stored on disk for the terminal front.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CliConfig {
    /// Base URL of a running zipweather server.
    pub server_url: String,

    /// Preferred temperature unit for reports.
    #[serde(default)]
    pub unit: Unit,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self { server_url: "http://127.0.0.1:3000".to_string(), unit: Unit::default() }
    }
}

impl CliConfig {
    /// Load config from disk, or return the defaults if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no config file, return defaults.
            return Ok(Self::default());
        }

        Self::load_from(&path)
    }

    fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Self = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "zipweather", "zipweather-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}

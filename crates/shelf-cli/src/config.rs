//! Persistent configuration.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result, ensure};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use shelf_core::{ApiUrl, DEFAULT_PAGE_SIZE};

use crate::cli::ApiArgs;

/// Where the API lives and how the catalog is paged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_url: String,
    pub page_size: u32,
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:5000".to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            timeout_secs: 30,
        }
    }
}

impl Config {
    /// Apply flag and environment overrides on top of the stored values.
    pub fn with_overrides(mut self, args: &ApiArgs) -> Self {
        if let Some(api_url) = &args.api_url {
            self.api_url = api_url.clone();
        }
        if let Some(page_size) = args.page_size {
            self.page_size = page_size;
        }
        self
    }

    pub fn api(&self) -> Result<ApiUrl> {
        ApiUrl::new(&self.api_url).with_context(|| format!("Invalid API URL: {}", self.api_url))
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Reject values no command could run with.
    pub fn check(&self) -> Result<()> {
        self.api()?;
        ensure!(self.page_size >= 1, "Page size must be at least 1");
        ensure!(self.timeout_secs >= 1, "Timeout must be at least 1 second");
        Ok(())
    }
}

/// Get the config file path.
pub fn config_path() -> Result<PathBuf> {
    let dirs =
        ProjectDirs::from("", "", "shelf").context("Could not determine config directory")?;

    Ok(dirs.config_dir().join("config.json"))
}

/// Load the stored configuration, or the defaults if none was saved.
pub fn load() -> Result<Config> {
    let path = config_path()?;

    if !path.exists() {
        return Ok(Config::default());
    }

    let json = fs::read_to_string(&path).context("Failed to read config file")?;
    let config = serde_json::from_str(&json).context("Invalid config file")?;

    Ok(config)
}

/// Save the configuration to disk.
pub fn save(config: &Config) -> Result<PathBuf> {
    config.check()?;

    let path = config_path()?;
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).context("Failed to create config directory")?;
    }

    let json = serde_json::to_string_pretty(config)?;
    fs::write(&path, json).context("Failed to write config file")?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.api_url, "http://localhost:5000");
        assert_eq!(config.page_size, 5);
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert!(config.check().is_ok());
    }

    #[test]
    fn test_overrides_replace_only_given_values() {
        let args = ApiArgs {
            api_url: None,
            page_size: Some(12),
        };
        let config = Config::default().with_overrides(&args);
        assert_eq!(config.api_url, "http://localhost:5000");
        assert_eq!(config.page_size, 12);
    }

    #[test]
    fn test_partial_file_falls_back_to_defaults() {
        let config: Config = serde_json::from_str(r#"{"page_size": 9}"#).unwrap();
        assert_eq!(config.page_size, 9);
        assert_eq!(config.api_url, "http://localhost:5000");
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_check_rejects_bad_values() {
        let zero = Config {
            page_size: 0,
            ..Config::default()
        };
        assert!(zero.check().is_err());

        let ftp = Config {
            api_url: "ftp://example.com".to_string(),
            ..Config::default()
        };
        assert!(ftp.check().is_err());
    }
}

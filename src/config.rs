use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    prelude::Result,
    util::json::{read_json, write_json},
};

pub const DEFAULT_API_BASE_URL: &str = "https://api.github.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Base URL of the contents API, without a trailing `/repos`.
    pub api_base_url: String,
    pub user_agent: String,
    pub timeout_secs: u64,
    /// Check decoded bytes against the blob sha reported by the API.
    pub verify_sha: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            verify_sha: true,
        }
    }
}

impl Config {
    pub fn new(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into(),
            ..Default::default()
        }
    }

    /// Platform config path, e.g. `~/.config/repofetch/config.json` on Linux.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", env!("CARGO_PKG_NAME"))
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        Ok(read_json(path).await?)
    }

    /// Loads the config from [`Config::default_path`], falling back to
    /// defaults when there is no file.
    pub async fn load_default() -> Result<Self> {
        match Self::default_path() {
            Some(path) if path.is_file() => Self::load(path).await,
            _ => {
                debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub async fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        Ok(write_json(path, self).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.api_base_url, "https://api.github.com");
        assert!(config.user_agent.starts_with("repofetch/"));
        assert_eq!(config.timeout_secs, 30);
        assert!(config.verify_sha);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let config: Config = serde_json::from_str(r#"{ "verify_sha": false }"#).unwrap();
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert!(!config.verify_sha);
    }

    #[tokio::test]
    async fn save_and_load() {
        let path = std::env::temp_dir()
            .join(format!("repofetch-config-{}", std::process::id()))
            .join(CONFIG_FILE_NAME);
        let config = Config {
            timeout_secs: 5,
            ..Config::new("http://localhost:8080")
        };

        config.save(&path).await.unwrap();
        assert_eq!(Config::load(&path).await.unwrap(), config);

        tokio::fs::remove_dir_all(path.parent().unwrap()).await.unwrap();
    }

    #[tokio::test]
    async fn load_reports_missing_file() {
        assert!(Config::load("/nonexistent/repofetch/config.json").await.is_err());
    }
}

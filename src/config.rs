//! Configuration for the dashboard client.
//!
//! Settings come from `quotedesk.yaml` in the working directory when
//! present, overridden by environment variables, overridden in turn by CLI
//! flags. Everything has a default so the binary runs with no config at
//! all against a local backend.

use std::env;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::Result;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Env var overriding the backend base URL.
pub const ENV_BASE_URL: &str = "QUOTEDESK_API_URL";
/// Env var enabling the backend's /dev endpoints ("1" or "true").
pub const ENV_DEV: &str = "QUOTEDESK_DEV";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the ticket backend.
    #[serde(default = "default_base_url")]
    pub api_base_url: String,

    /// Enables the /dev endpoints used to exercise the backend's email
    /// ingestion pipeline. Not part of the production flow.
    #[serde(default)]
    pub dev_endpoints: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: default_base_url(),
            dev_endpoints: false,
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Config {
    pub fn config_path() -> PathBuf {
        PathBuf::from("quotedesk.yaml")
    }

    /// Load from file-or-default, then apply environment overrides.
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        let mut config = if path.exists() {
            tracing::debug!("loading config from {}", path.display());
            let content = fs::read_to_string(&path)?;
            serde_yaml_ng::from_str(&content)?
        } else {
            Config::default()
        };
        config.apply_env();
        Ok(config)
    }

    fn apply_env(&mut self) {
        if let Ok(url) = env::var(ENV_BASE_URL)
            && !url.is_empty()
        {
            self.api_base_url = url;
        }
        if let Ok(flag) = env::var(ENV_DEV) {
            self.dev_endpoints = matches!(flag.as_str(), "1" | "true");
        }
    }

    /// CLI override: wins over both the file and the environment.
    pub fn with_base_url(mut self, base_url: Option<&str>) -> Self {
        if let Some(url) = base_url {
            self.api_base_url = url.to_string();
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.api_base_url, DEFAULT_BASE_URL);
        assert!(!config.dev_endpoints);
    }

    #[test]
    fn test_yaml_parse_with_partial_fields() {
        let config: Config = serde_yaml_ng::from_str("dev_endpoints: true\n").unwrap();
        assert_eq!(config.api_base_url, DEFAULT_BASE_URL);
        assert!(config.dev_endpoints);

        let config: Config =
            serde_yaml_ng::from_str("api_base_url: https://desk.example.com\n").unwrap();
        assert_eq!(config.api_base_url, "https://desk.example.com");
    }

    #[test]
    fn test_cli_override_wins() {
        let config = Config::default().with_base_url(Some("http://10.0.0.2:9000"));
        assert_eq!(config.api_base_url, "http://10.0.0.2:9000");

        let config = Config::default().with_base_url(None);
        assert_eq!(config.api_base_url, DEFAULT_BASE_URL);
    }
}

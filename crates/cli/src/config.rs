//! CLI configuration management
//!
//! Handles loading and saving configuration from ~/.footprint/config.toml

use crate::output::OutputFormat;
use anyhow::{Context, Result};
use footprint_common::pagination::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use footprint_sdk::{ClientConfig, DEFAULT_API_URL};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Keys accepted by `config get` / `config set`
pub const CONFIG_KEYS: [&str; 7] = [
    "api_url",
    "token",
    "output_format",
    "colored",
    "timeout",
    "page_size",
    "debug",
];

/// CLI configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Backend base URL
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Bearer token sent with every request
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_token: Option<String>,

    /// Default output format
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Enable colored output
    #[serde(default = "default_colored")]
    pub colored: bool,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,

    /// Rows per page for `logs list`
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Log request and response bodies
    #[serde(default)]
    pub debug: bool,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_colored() -> bool {
    true
}

fn default_timeout() -> u64 {
    30
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            auth_token: None,
            output_format: OutputFormat::default(),
            colored: default_colored(),
            timeout_seconds: default_timeout(),
            page_size: default_page_size(),
            debug: false,
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let home = dirs::home_dir().context("Could not determine home directory")?;
        Ok(home.join(".footprint"))
    }

    /// Get the config file path
    pub fn config_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Load the config file, then apply `FOOTPRINT_*` and `NO_COLOR` overrides
    pub fn load() -> Result<Self> {
        let mut config = Self::load_from(&Self::config_file()?)?;
        config.apply_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Load from `path`; a missing file yields the defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Override fields from environment-style variables
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("FOOTPRINT_API_URL").filter(|v| !v.trim().is_empty()) {
            self.api_url = url;
        }
        if let Some(token) = lookup("FOOTPRINT_TOKEN").filter(|v| !v.trim().is_empty()) {
            self.auth_token = Some(token);
        }
        if let Some(format) = lookup("FOOTPRINT_OUTPUT_FORMAT").and_then(|v| v.parse().ok()) {
            self.output_format = format;
        }
        if let Some(timeout) = lookup("FOOTPRINT_TIMEOUT").and_then(|v| v.parse().ok()) {
            self.timeout_seconds = timeout;
        }
        if lookup("FOOTPRINT_DEBUG").is_some() {
            self.debug = true;
        }
        if lookup("NO_COLOR").is_some() {
            self.colored = false;
        }
    }

    /// Save configuration to the default file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).context("Failed to create config directory")?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, contents).context("Failed to write config file")?;

        Ok(())
    }

    /// Check if a token is configured
    pub fn is_authenticated(&self) -> bool {
        self.auth_token.is_some()
    }

    /// SDK client settings
    pub fn client_config(&self) -> ClientConfig {
        let config = ClientConfig::new()
            .with_base_url(self.api_url.clone())
            .with_timeout(Duration::from_secs(self.timeout_seconds))
            .with_debug(self.debug);

        match &self.auth_token {
            Some(token) => config.with_bearer_token(token.clone()),
            None => config,
        }
    }

    /// Get a configuration value by key. The token is masked.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "api_url" | "api-url" => Some(self.api_url.clone()),
            "output_format" | "output-format" | "format" => Some(self.output_format.to_string()),
            "colored" | "color" => Some(self.colored.to_string()),
            "timeout" | "timeout_seconds" => Some(self.timeout_seconds.to_string()),
            "page_size" | "page-size" => Some(self.page_size.to_string()),
            "debug" => Some(self.debug.to_string()),
            "token" | "auth_token" => self.auth_token.as_ref().map(|_| "***".to_string()),
            _ => None,
        }
    }

    /// Set a configuration value by key. Call [`save`](Self::save) to persist.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "api_url" | "api-url" => {
                url_check(value)?;
                self.api_url = value.trim_end_matches('/').to_string();
            }
            "token" | "auth_token" => {
                self.auth_token = Some(value.to_string()).filter(|v| !v.is_empty());
            }
            "output_format" | "output-format" | "format" => {
                self.output_format = value.parse()?;
            }
            "colored" | "color" => {
                self.colored = value.parse().context("Invalid boolean value")?;
            }
            "timeout" | "timeout_seconds" => {
                let timeout: u64 = value.parse().context("Invalid timeout value")?;
                if timeout == 0 {
                    anyhow::bail!("Timeout must be greater than zero");
                }
                self.timeout_seconds = timeout;
            }
            "page_size" | "page-size" => {
                let size: u32 = value.parse().context("Invalid page size")?;
                if size == 0 || size > MAX_PAGE_SIZE {
                    anyhow::bail!("Page size must be between 1 and {}", MAX_PAGE_SIZE);
                }
                self.page_size = size;
            }
            "debug" => {
                self.debug = value.parse().context("Invalid boolean value")?;
            }
            _ => anyhow::bail!(
                "Unknown configuration key: {}. Known keys: {}",
                key,
                CONFIG_KEYS.join(", ")
            ),
        }
        Ok(())
    }

    /// Reset configuration to defaults
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

fn url_check(value: &str) -> Result<()> {
    if value.starts_with("http://") || value.starts_with("https://") {
        Ok(())
    } else {
        anyhow::bail!("API URL must start with http:// or https://")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.output_format, OutputFormat::Table);
        assert_eq!(config.page_size, 20);
        assert!(config.colored);
        assert!(config.auth_token.is_none());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.set("api_url", "https://admin.footprint.example/").unwrap();
        config.set("page_size", "50").unwrap();
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.api_url, "https://admin.footprint.example");
        assert_eq!(loaded.page_size, 50);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = Config::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = [
            ("FOOTPRINT_API_URL", "http://backend:9000"),
            ("FOOTPRINT_TOKEN", "secret"),
            ("FOOTPRINT_OUTPUT_FORMAT", "json"),
            ("NO_COLOR", "1"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_env(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.api_url, "http://backend:9000");
        assert_eq!(config.auth_token.as_deref(), Some("secret"));
        assert_eq!(config.output_format, OutputFormat::Json);
        assert!(!config.colored);
        assert!(config.client_config().has_auth());
    }

    #[test]
    fn test_config_get_masks_token() {
        let mut config = Config::default();
        assert_eq!(config.get("token"), None);
        config.set("token", "abc").unwrap();
        assert_eq!(config.get("token").as_deref(), Some("***"));
        assert_eq!(config.get("unknown"), None);
    }

    #[test]
    fn test_config_set_rejects_bad_values() {
        let mut config = Config::default();
        assert!(config.set("page_size", "0").is_err());
        assert!(config.set("page_size", "101").is_err());
        assert!(config.set("timeout", "soon").is_err());
        assert!(config.set("api_url", "localhost:8080").is_err());
        assert!(config.set("format", "yaml").is_err());
        assert!(config.set("nope", "1").is_err());
    }
}

//! Configuration helpers shared by the service and the CLI.
//!
//! Settings are layered in this order (later sources override earlier ones):
//! 1. Defaults supplied by the caller
//! 2. `config/<name>.toml` (if present)
//! 3. `config/<name>.<APP_ENV>.toml` (if present)
//! 4. Environment variables, optionally prefixed
//!
//! ```toml
//! # config/api.toml
//! port = 8080
//! maintenance_mode = false
//! log_level = "info"
//! ```

use anyhow::{Context, Result};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::fmt;

/// Deployment environment, read from `APP_ENV`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppEnvironment {
    #[default]
    #[serde(alias = "dev")]
    Development,
    #[serde(alias = "prod")]
    Production,
}

impl AppEnvironment {
    /// Read `APP_ENV`; anything other than `production`/`prod` is development.
    pub fn from_env() -> Self {
        std::env::var("APP_ENV")
            .map(|v| Self::parse(&v))
            .unwrap_or_default()
    }

    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for AppEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryConfig {
    /// Service name attached to startup logs
    #[serde(default = "default_service_name")]
    pub service_name: String,

    /// Emit JSON lines instead of human-readable logs
    #[serde(default)]
    pub json_logging: bool,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_service_name() -> String {
    "footprint-admin".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            service_name: default_service_name(),
            json_logging: false,
            log_level: default_log_level(),
        }
    }
}

impl TelemetryConfig {
    /// Validate the log level
    pub fn validate(&self) -> Result<()> {
        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&self.log_level.as_str()) {
            anyhow::bail!(
                "Invalid log level '{}'. Must be one of: {}",
                self.log_level,
                valid_log_levels.join(", ")
            );
        }
        Ok(())
    }
}

/// Load a configuration struct from defaults, optional files and the environment.
///
/// `defaults` must serialize to a map; its values seed the builder so every
/// field has a value even when no file or variable is present.
pub fn load_layered<T>(name: &str, env_prefix: Option<&str>, defaults: &T) -> Result<T>
where
    T: Serialize + DeserializeOwned,
{
    let env = AppEnvironment::from_env();

    let defaults = config::Config::try_from(defaults).context("Failed to encode defaults")?;

    let environment = match env_prefix {
        Some(prefix) => config::Environment::with_prefix(prefix).separator("__"),
        None => config::Environment::default(),
    };

    let config = config::Config::builder()
        .add_source(defaults)
        .add_source(config::File::with_name(&format!("config/{}", name)).required(false))
        .add_source(config::File::with_name(&format!("config/{}.{}", name, env)).required(false))
        .add_source(environment.try_parsing(true))
        .build()
        .context("Failed to build configuration")?;

    config
        .try_deserialize()
        .context("Failed to deserialize configuration")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Sample {
        footprint_sample_port: u16,
        footprint_sample_name: String,
    }

    #[test]
    fn test_environment_parse() {
        assert_eq!(AppEnvironment::parse("production"), AppEnvironment::Production);
        assert_eq!(AppEnvironment::parse("PROD"), AppEnvironment::Production);
        assert_eq!(AppEnvironment::parse("staging"), AppEnvironment::Development);
    }

    #[test]
    fn test_telemetry_validation() {
        assert!(TelemetryConfig::default().validate().is_ok());

        let bad = TelemetryConfig {
            log_level: "loud".to_string(),
            ..Default::default()
        };
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_load_layered_uses_defaults() {
        let defaults = Sample {
            footprint_sample_port: 9000,
            footprint_sample_name: "edge".to_string(),
        };
        let loaded: Sample = load_layered("does-not-exist", None, &defaults).unwrap();
        assert_eq!(loaded, defaults);
    }
}

//! Edge service configuration.

use footprint_common::{load_layered, AppEnvironment, TelemetryConfig};
use footprint_infrastructure::{storage::DEFAULT_BLOB_API_URL, BlobStoreConfig};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Origin allowed by CORS outside production
pub const DEVELOPMENT_ORIGIN: &str = "http://localhost:3000";

/// Edge service configuration.
///
/// Field names match the environment variables that set them
/// (`API_PORT` sets `api_port`, and so on).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Server host to bind to
    pub api_host: String,

    /// Server port to bind to
    pub api_port: u16,

    /// Deployment environment
    pub app_env: AppEnvironment,

    /// Origin allowed by CORS in production
    pub production_origin: Option<String>,

    /// Redirect page requests to `/maintenance`
    pub maintenance_mode: bool,

    /// Write token for the blob store
    pub blob_read_write_token: Option<String>,

    /// Blob store API base URL
    pub blob_api_url: String,

    /// Maximum request body size in bytes
    pub max_body_size: usize,

    /// Request timeout in seconds
    pub request_timeout_seconds: u64,

    /// Log level
    pub log_level: String,

    /// Emit JSON logs
    pub log_json: bool,

    /// Serve the OpenAPI document and Swagger UI
    pub enable_swagger: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            api_host: "0.0.0.0".to_string(),
            api_port: 8080,
            app_env: AppEnvironment::Development,
            production_origin: None,
            maintenance_mode: false,
            blob_read_write_token: None,
            blob_api_url: DEFAULT_BLOB_API_URL.to_string(),
            max_body_size: 10 * 1024 * 1024, // 10 MB
            request_timeout_seconds: 30,
            log_level: "info".to_string(),
            log_json: false,
            enable_swagger: false,
        }
    }
}

impl ApiConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load defaults, then `config/api.toml`, then `config/api.<APP_ENV>.toml`,
    /// then the environment.
    pub fn load() -> anyhow::Result<Self> {
        let config: Self = load_layered("api", None, &Self::default())?;
        config.validate()?;
        Ok(config)
    }

    /// Build a configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let config = Self {
            api_host: non_empty("API_HOST").unwrap_or(defaults.api_host),
            api_port: non_empty("API_PORT")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.api_port),
            app_env: non_empty("APP_ENV")
                .map(|s| AppEnvironment::parse(&s))
                .unwrap_or_default(),
            production_origin: non_empty("PRODUCTION_ORIGIN"),
            maintenance_mode: non_empty("MAINTENANCE_MODE")
                .map(|s| parse_flag(&s))
                .unwrap_or(false),
            blob_read_write_token: non_empty("BLOB_READ_WRITE_TOKEN"),
            blob_api_url: non_empty("BLOB_API_URL").unwrap_or(defaults.blob_api_url),
            max_body_size: non_empty("MAX_BODY_SIZE")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.max_body_size),
            request_timeout_seconds: non_empty("REQUEST_TIMEOUT_SECONDS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.request_timeout_seconds),
            log_level: non_empty("LOG_LEVEL").unwrap_or(defaults.log_level),
            log_json: non_empty("LOG_JSON").map(|s| parse_flag(&s)).unwrap_or(false),
            enable_swagger: non_empty("ENABLE_SWAGGER")
                .map(|s| parse_flag(&s))
                .unwrap_or(false),
        };

        config.validate()?;
        Ok(config)
    }

    /// Check settings that would otherwise fail at request time
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.app_env.is_production() && self.production_origin.is_none() {
            anyhow::bail!("PRODUCTION_ORIGIN must be set when APP_ENV is production");
        }
        if self.request_timeout_seconds == 0 {
            anyhow::bail!("REQUEST_TIMEOUT_SECONDS must be greater than zero");
        }
        self.telemetry().validate()
    }

    /// The single origin CORS responses allow
    pub fn allowed_origin(&self) -> &str {
        match (&self.app_env, &self.production_origin) {
            (AppEnvironment::Production, Some(origin)) => origin,
            _ => DEVELOPMENT_ORIGIN,
        }
    }

    /// Blob store settings derived from this configuration
    pub fn blob_store(&self) -> BlobStoreConfig {
        BlobStoreConfig {
            api_url: self.blob_api_url.clone(),
            token: self.blob_read_write_token.clone(),
            ..BlobStoreConfig::default()
        }
    }

    /// Logging settings for this service
    pub fn telemetry(&self) -> TelemetryConfig {
        TelemetryConfig {
            service_name: "footprint-api".to_string(),
            json_logging: self.log_json,
            log_level: self.log_level.clone(),
        }
    }

    /// Get request timeout as Duration
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }

    /// Get server address
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.api_host, self.api_port)
    }
}

/// `true`, `1`, `yes` and `on` enable a flag.
fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "true" | "1" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn from_pairs(pairs: &[(&str, &str)]) -> anyhow::Result<ApiConfig> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ApiConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = from_pairs(&[]).unwrap();
        assert_eq!(config.server_address(), "0.0.0.0:8080");
        assert!(!config.maintenance_mode);
        assert_eq!(config.allowed_origin(), DEVELOPMENT_ORIGIN);
        assert!(config.blob_read_write_token.is_none());
    }

    #[test]
    fn test_maintenance_flag_values() {
        for value in ["true", "1", "TRUE"] {
            let config = from_pairs(&[("MAINTENANCE_MODE", value)]).unwrap();
            assert!(config.maintenance_mode, "{value} should enable maintenance");
        }
        let config = from_pairs(&[("MAINTENANCE_MODE", "false")]).unwrap();
        assert!(!config.maintenance_mode);
    }

    #[test]
    fn test_production_pins_origin() {
        let config = from_pairs(&[
            ("APP_ENV", "production"),
            ("PRODUCTION_ORIGIN", "https://admin.footprint.network"),
        ])
        .unwrap();
        assert_eq!(config.allowed_origin(), "https://admin.footprint.network");
    }

    #[test]
    fn test_production_requires_origin() {
        assert!(from_pairs(&[("APP_ENV", "production")]).is_err());
    }

    #[test]
    fn test_blank_token_is_unset() {
        let config = from_pairs(&[("BLOB_READ_WRITE_TOKEN", "  ")]).unwrap();
        assert!(!config.blob_store().has_token());
    }

    #[test]
    fn test_invalid_log_level_rejected() {
        assert!(from_pairs(&[("LOG_LEVEL", "loud")]).is_err());
    }
}

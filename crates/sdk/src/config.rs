//! SDK configuration
//!
//! This module provides configuration options for the SDK client.

use crate::error::{SdkError, SdkResult};
use std::time::Duration;

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL for the API
    pub base_url: String,

    /// Bearer token for authentication
    pub bearer_token: Option<String>,

    /// Request timeout
    pub timeout: Duration,

    /// User agent string
    pub user_agent: String,

    /// Enable request/response logging
    pub debug: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: crate::DEFAULT_API_URL.to_string(),
            bearer_token: None,
            timeout: Duration::from_secs(30),
            user_agent: format!("footprint-sdk/{}", crate::VERSION),
            debug: false,
        }
    }
}

impl ClientConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables
    ///
    /// Supported environment variables:
    /// - `FOOTPRINT_API_URL`: Base URL for the API
    /// - `FOOTPRINT_TOKEN`: Bearer token for authentication
    /// - `FOOTPRINT_TIMEOUT`: Request timeout in seconds
    /// - `FOOTPRINT_DEBUG`: Enable debug logging
    pub fn from_env() -> SdkResult<Self> {
        let mut config = Self::default();

        if let Ok(url) = std::env::var("FOOTPRINT_API_URL") {
            config.base_url = url;
        }

        if let Ok(token) = std::env::var("FOOTPRINT_TOKEN") {
            if !token.trim().is_empty() {
                config.bearer_token = Some(token);
            }
        }

        if let Ok(timeout) = std::env::var("FOOTPRINT_TIMEOUT") {
            config.timeout = parse_timeout(&timeout)?;
        }

        if std::env::var("FOOTPRINT_DEBUG").is_ok() {
            config.debug = true;
        }

        Ok(config)
    }

    /// Set the base URL
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the bearer token
    pub fn with_bearer_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Enable debug mode
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> SdkResult<()> {
        if self.base_url.is_empty() {
            return Err(SdkError::Config {
                message: "Base URL cannot be empty".to_string(),
            });
        }

        url::Url::parse(&self.base_url).map_err(|e| SdkError::Config {
            message: format!("Invalid base URL: {}", e),
        })?;

        if self.timeout.is_zero() {
            return Err(SdkError::Config {
                message: "Timeout must be greater than zero".to_string(),
            });
        }

        Ok(())
    }

    /// Get the authentication header value
    pub fn auth_header(&self) -> Option<String> {
        self.bearer_token
            .as_ref()
            .map(|token| format!("Bearer {}", token))
    }

    /// Check if authentication is configured
    pub fn has_auth(&self) -> bool {
        self.bearer_token.is_some()
    }

    /// Join `path` onto the base URL without doubling the slash
    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

fn parse_timeout(raw: &str) -> SdkResult<Duration> {
    let secs: u64 = raw.trim().parse().map_err(|_| SdkError::Config {
        message: format!("Invalid timeout value: {}", raw),
    })?;
    Ok(Duration::from_secs(secs))
}

//! SDK client implementation
//!
//! This module provides the main client for the Footprint admin API and the
//! envelope handling shared by every service.

use crate::config::ClientConfig;
use crate::error::{SdkError, SdkResult};
use crate::services::{
    RankingService, ReviewLogService, ReviewService, SessionService, StatsService, UserService,
};
use footprint_domain::Envelope;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error};

/// Longest body excerpt carried in an `Http` error
const ERROR_BODY_EXCERPT: usize = 200;

/// Main SDK client
#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http: reqwest::Client,
    config: ClientConfig,
}

impl Client {
    /// Create a new client builder
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Create a new client with the given configuration
    pub fn new(config: ClientConfig) -> SdkResult<Self> {
        config.validate()?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&config.user_agent)
                .unwrap_or_else(|_| HeaderValue::from_static("footprint-sdk")),
        );

        if let Some(auth) = config.auth_header() {
            let mut value = HeaderValue::from_str(&auth).map_err(|_| SdkError::Config {
                message: "Invalid authorization header".to_string(),
            })?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()
            .map_err(|e| SdkError::Config {
                message: format!("Failed to create HTTP client: {}", e),
            })?;

        Ok(Self {
            inner: Arc::new(ClientInner { http, config }),
        })
    }

    /// Create a client from environment variables
    pub fn from_env() -> SdkResult<Self> {
        let config = ClientConfig::from_env()?;
        Self::new(config)
    }

    /// Get the configuration
    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }

    /// Get the review log service
    pub fn review_logs(&self) -> ReviewLogService {
        ReviewLogService::new(self.clone())
    }

    /// Get the review service
    pub fn reviews(&self) -> ReviewService {
        ReviewService::new(self.clone())
    }

    /// Get the ranking service
    pub fn ranking(&self) -> RankingService {
        RankingService::new(self.clone())
    }

    /// Get the stats service
    pub fn stats(&self) -> StatsService {
        StatsService::new(self.clone())
    }

    /// Get the user service
    pub fn users(&self) -> UserService {
        UserService::new(self.clone())
    }

    /// Get the session service
    pub fn session(&self) -> SessionService {
        SessionService::new(self.clone())
    }

    /// GET a payload that must be present
    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> SdkResult<T> {
        let data = self
            .request(reqwest::Method::GET, path, Option::<&()>::None, Option::<&()>::None)
            .await?;
        require_data(data, path)
    }

    /// GET with query parameters; the payload may be absent
    pub(crate) async fn get_with_query<T: DeserializeOwned, Q: Serialize>(
        &self,
        path: &str,
        query: &Q,
    ) -> SdkResult<Option<T>> {
        self.request(reqwest::Method::GET, path, Some(query), Option::<&()>::None)
            .await
    }

    /// POST a JSON body; the payload may be absent
    pub(crate) async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: Option<&B>,
    ) -> SdkResult<Option<T>> {
        self.request(reqwest::Method::POST, path, Option::<&()>::None, body)
            .await
    }

    async fn request<T: DeserializeOwned, Q: Serialize, B: Serialize>(
        &self,
        method: reqwest::Method,
        path: &str,
        query: Option<&Q>,
        body: Option<&B>,
    ) -> SdkResult<Option<T>> {
        let url = self.inner.config.endpoint(path);

        if self.inner.config.debug {
            debug!("SDK request: {} {}", method, url);
        }

        let mut request = self.inner.http.request(method.clone(), &url);

        if let Some(query) = query {
            request = request.query(query);
        }

        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| SdkError::from_reqwest(e, self.inner.config.timeout))?;

        self.handle_response(response).await
    }

    /// Check the HTTP status, then unwrap the envelope
    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> SdkResult<Option<T>> {
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| SdkError::from_reqwest(e, self.inner.config.timeout))?;

        if self.inner.config.debug {
            debug!("SDK response ({}): {}", status.as_u16(), text);
        }

        if !status.is_success() {
            return Err(http_error(status.as_u16(), &text));
        }

        let envelope: Envelope<T> = serde_json::from_str(&text).map_err(|e| {
            error!("Failed to parse response: {}", e);
            SdkError::from(e)
        })?;

        if !envelope.is_success() {
            return Err(SdkError::Api {
                code: envelope.code,
                message: envelope.failure_message(),
            });
        }

        Ok(envelope.data)
    }
}

fn require_data<T>(data: Option<T>, path: &str) -> SdkResult<T> {
    data.ok_or_else(|| SdkError::InvalidResponse {
        message: format!("response from {} has no data", path),
    })
}

/// Build an `Http` error, preferring the envelope message when the body has one
fn http_error(status: u16, body: &str) -> SdkError {
    let message = serde_json::from_str::<Envelope<serde_json::Value>>(body)
        .ok()
        .and_then(|envelope| envelope.message)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| {
            let excerpt: String = body.chars().take(ERROR_BODY_EXCERPT).collect();
            if excerpt.trim().is_empty() {
                reqwest::StatusCode::from_u16(status)
                    .ok()
                    .and_then(|s| s.canonical_reason())
                    .unwrap_or("request failed")
                    .to_string()
            } else {
                excerpt
            }
        });

    SdkError::Http { status, message }
}

/// Client builder for ergonomic configuration
#[derive(Default)]
pub struct ClientBuilder {
    config: ClientConfig,
}

impl ClientBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self {
            config: ClientConfig::default(),
        }
    }

    /// Load configuration from environment
    pub fn from_env(mut self) -> SdkResult<Self> {
        self.config = ClientConfig::from_env()?;
        Ok(self)
    }

    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Set the bearer token
    pub fn bearer_token(mut self, token: impl Into<String>) -> Self {
        self.config.bearer_token = Some(token.into());
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set the user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Enable debug mode
    pub fn debug(mut self, debug: bool) -> Self {
        self.config.debug = debug;
        self
    }

    /// Build the client
    pub fn build(self) -> SdkResult<Client> {
        Client::new(self.config)
    }
}

//! Blob storage for uploaded files.
//!
//! Objects are written once under a caller-chosen key and served publicly
//! from the URL the store returns.

use async_trait::async_trait;
use bytes::Bytes;
use parking_lot::RwLock;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

use crate::{Error, Result};

/// Default blob API endpoint
pub const DEFAULT_BLOB_API_URL: &str = "https://blob.vercel-storage.com";

/// Blob store configuration.
#[derive(Clone)]
pub struct BlobStoreConfig {
    /// Base URL of the blob API
    pub api_url: String,
    /// Read-write token; uploads are refused without one
    pub token: Option<String>,
    /// Per-request timeout
    pub timeout: Duration,
}

impl Default for BlobStoreConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_BLOB_API_URL.to_string(),
            token: None,
            timeout: Duration::from_secs(60),
        }
    }
}

impl BlobStoreConfig {
    /// Create configuration from environment variables.
    ///
    /// - `BLOB_READ_WRITE_TOKEN`: write token
    /// - `BLOB_API_URL`: API base URL
    pub fn from_env() -> Self {
        let token = std::env::var("BLOB_READ_WRITE_TOKEN")
            .ok()
            .filter(|t| !t.trim().is_empty());

        Self {
            api_url: std::env::var("BLOB_API_URL")
                .unwrap_or_else(|_| DEFAULT_BLOB_API_URL.to_string()),
            token,
            ..Default::default()
        }
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }
}

impl std::fmt::Debug for BlobStoreConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BlobStoreConfig")
            .field("api_url", &self.api_url)
            .field("token", &self.token.as_ref().map(|_| "***"))
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Object key for an upload: `<biz>/<epoch-ms>-<filename>`
pub fn object_key(biz: &str, filename: &str, epoch_ms: i64) -> String {
    format!("{}/{}-{}", biz, epoch_ms, filename)
}

/// A stored object
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredObject {
    /// Key the object was written under
    pub key: String,
    /// Public URL
    pub url: String,
}

/// Storage port for uploaded files.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Write `data` under `key` with public read access.
    async fn put(&self, key: &str, data: Bytes, content_type: Option<&str>) -> Result<StoredObject>;
}

/// Response body of a blob PUT
#[derive(Debug, Deserialize)]
struct PutBlobResponse {
    url: String,
    #[serde(default)]
    pathname: Option<String>,
}

/// Blob store reached over HTTP with a bearer token.
pub struct HttpBlobStore {
    client: reqwest::Client,
    api_url: String,
    token: String,
}

impl HttpBlobStore {
    /// Create a store. Fails when no token is configured.
    #[instrument(skip(config))]
    pub fn new(config: BlobStoreConfig) -> Result<Self> {
        let token = config.token.ok_or_else(|| {
            Error::Configuration("Blob storage token is not configured".to_string())
        })?;

        url::Url::parse(&config.api_url)
            .map_err(|e| Error::Configuration(format!("Invalid blob API URL: {}", e)))?;

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| Error::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        info!(api_url = %config.api_url, "Blob storage initialized");
        Ok(Self {
            client,
            api_url: config.api_url.trim_end_matches('/').to_string(),
            token,
        })
    }

    fn object_url(&self, key: &str) -> String {
        format!("{}/{}", self.api_url, key.trim_start_matches('/'))
    }
}

#[async_trait]
impl BlobStore for HttpBlobStore {
    #[instrument(skip(self, data), fields(size = data.len()))]
    async fn put(&self, key: &str, data: Bytes, content_type: Option<&str>) -> Result<StoredObject> {
        let mut request = self
            .client
            .put(self.object_url(key))
            .bearer_auth(&self.token)
            .header("x-api-version", "7")
            .header("x-add-random-suffix", "0")
            .body(data);

        if let Some(ct) = content_type {
            request = request.header("x-content-type", ct);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!(status = status.as_u16(), "Blob upload rejected");
            return Err(Error::Storage(format!(
                "blob store returned {}: {}",
                status.as_u16(),
                body
            )));
        }

        let stored: PutBlobResponse = serde_json::from_str(&body)?;
        debug!(key = %key, url = %stored.url, "Object uploaded");

        Ok(StoredObject {
            key: stored.pathname.unwrap_or_else(|| key.to_string()),
            url: stored.url,
        })
    }
}

impl std::fmt::Debug for HttpBlobStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpBlobStore")
            .field("api_url", &self.api_url)
            .finish()
    }
}

#[derive(Debug, Clone)]
struct MemoryObject {
    data: Bytes,
    content_type: Option<String>,
}

/// In-process blob store.
pub struct MemoryBlobStore {
    base_url: String,
    objects: RwLock<HashMap<String, MemoryObject>>,
    failure: RwLock<Option<String>>,
}

impl MemoryBlobStore {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            objects: RwLock::new(HashMap::new()),
            failure: RwLock::new(None),
        }
    }

    /// Make every following `put` fail with `message`
    pub fn fail_with(&self, message: impl Into<String>) {
        *self.failure.write() = Some(message.into());
    }

    pub fn get(&self, key: &str) -> Option<Bytes> {
        self.objects.read().get(key).map(|o| o.data.clone())
    }

    pub fn content_type(&self, key: &str) -> Option<String> {
        self.objects
            .read()
            .get(key)
            .and_then(|o| o.content_type.clone())
    }

    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.objects.read().keys().cloned().collect();
        keys.sort();
        keys
    }

    pub fn object_count(&self) -> usize {
        self.objects.read().len()
    }
}

impl Default for MemoryBlobStore {
    fn default() -> Self {
        Self::new("memory://blobs")
    }
}

#[async_trait]
impl BlobStore for MemoryBlobStore {
    async fn put(&self, key: &str, data: Bytes, content_type: Option<&str>) -> Result<StoredObject> {
        if let Some(message) = self.failure.read().clone() {
            return Err(Error::Storage(message));
        }

        self.objects.write().insert(
            key.to_string(),
            MemoryObject {
                data,
                content_type: content_type.map(str::to_string),
            },
        );

        Ok(StoredObject {
            key: key.to_string(),
            url: format!("{}/{}", self.base_url, key),
        })
    }
}

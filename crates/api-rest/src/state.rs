//! Shared application state.

use crate::config::ApiConfig;
use footprint_infrastructure::{BlobStore, Error as StorageError, HttpBlobStore};
use std::sync::Arc;

/// Application state shared across all requests
#[derive(Clone)]
pub struct AppState {
    /// API configuration
    pub config: Arc<ApiConfig>,

    /// Upload target; `None` when no write token is configured
    pub blob_store: Option<Arc<dyn BlobStore>>,
}

impl AppState {
    /// Build state from configuration, connecting the HTTP blob store when a
    /// token is present.
    pub fn new(config: ApiConfig) -> anyhow::Result<Self> {
        let blob_store: Option<Arc<dyn BlobStore>> = match HttpBlobStore::new(config.blob_store()) {
            Ok(store) => Some(Arc::new(store)),
            Err(StorageError::Configuration(message)) if !config.blob_store().has_token() => {
                tracing::warn!(reason = %message, "Uploads disabled");
                None
            }
            Err(err) => return Err(err.into()),
        };

        Ok(Self {
            config: Arc::new(config),
            blob_store,
        })
    }

    /// State with an explicit store
    pub fn with_blob_store(config: ApiConfig, store: Arc<dyn BlobStore>) -> Self {
        Self {
            config: Arc::new(config),
            blob_store: Some(store),
        }
    }

    /// State without any upload target
    pub fn without_blob_store(config: ApiConfig) -> Self {
        Self {
            config: Arc::new(config),
            blob_store: None,
        }
    }
}

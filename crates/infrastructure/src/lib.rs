//! Infrastructure layer for the Footprint admin edge service
//!
//! This crate provides object storage for uploaded files:
//! - [`BlobStore`], the storage port used by the upload endpoint
//! - [`HttpBlobStore`], a token-authenticated HTTP blob store
//! - [`MemoryBlobStore`], an in-process store for tests and local runs
//!
//! ## Usage
//!
//! ```rust,no_run
//! use footprint_infrastructure::{BlobStore, BlobStoreConfig, HttpBlobStore};
//!
//! # async fn example() -> footprint_infrastructure::Result<()> {
//! let store = HttpBlobStore::new(BlobStoreConfig::from_env())?;
//! let stored = store
//!     .put("avatars/1700000000000-me.png", bytes::Bytes::from_static(b"..."), Some("image/png"))
//!     .await?;
//! println!("{}", stored.url);
//! # Ok(())
//! # }
//! ```

pub mod storage;

// Re-export commonly used types
pub use storage::{
    object_key, BlobStore, BlobStoreConfig, HttpBlobStore, MemoryBlobStore, StoredObject,
};

// Re-export result and error types
pub type Result<T> = std::result::Result<T, Error>;

/// Infrastructure-level errors
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The store rejected or failed the operation
    #[error("Storage error: {0}")]
    Storage(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Connection errors
    #[error("Connection error: {0}")]
    Connection(String),

    /// Timeout errors
    #[error("Timeout: {0}")]
    Timeout(String),
}

impl Error {
    /// Get HTTP status code for this error
    pub fn http_status(&self) -> u16 {
        match self {
            Error::Configuration(_) => 500,
            Error::Serialization(_) | Error::Storage(_) => 502,
            Error::Connection(_) | Error::Timeout(_) => 503,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Error::Timeout(err.to_string())
        } else if err.is_connect() {
            Error::Connection(err.to_string())
        } else {
            Error::Storage(err.to_string())
        }
    }
}

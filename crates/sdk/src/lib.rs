//! # Footprint Admin SDK
//!
//! Typed client for the admin surface of the Footprint contest backend.
//!
//! Every backend response is wrapped in an envelope `{code, data, message}`.
//! The client unwraps it: a non-zero `code` becomes [`SdkError::Api`] even
//! when the HTTP status is 200, so callers only ever see payloads or errors.
//!
//! - **Review logs**: page through automated review attempts, load one by id
//! - **Reviews**: change the outcome of a communication or community task
//! - **Ranking**: weekly leaderboard, always requested in full
//! - **Stats**: dashboard counters
//! - **Users**: trigger the batch level recalculation
//! - **Session**: the current principal
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use footprint_sdk::{Client, LogQuery};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::builder()
//!         .base_url("https://admin.footprint.example")
//!         .bearer_token("session-token")
//!         .build()?;
//!
//!     let page = client.review_logs().list(&LogQuery::new(1, 20)).await?;
//!     for log in page.records {
//!         println!("{} {} {}", log.id, log.username, log.review_status);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Configuration
//!
//! - `FOOTPRINT_API_URL`: backend base URL
//! - `FOOTPRINT_TOKEN`: bearer token
//! - `FOOTPRINT_TIMEOUT`: request timeout in seconds (default 30)
//! - `FOOTPRINT_DEBUG`: log request and response bodies
//!
//! ## Error Handling
//!
//! ```rust,no_run
//! use footprint_sdk::{Client, SdkError};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! # let client = Client::from_env()?;
//! match client.review_logs().get(42).await {
//!     Ok(log) => println!("{}", log.username),
//!     Err(SdkError::Api { code, message }) => println!("backend said {}: {}", code, message),
//!     Err(e) => println!("request failed: {}", e),
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod backend;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod services;

// Re-exports
pub use backend::AdminBackend;
pub use client::{Client, ClientBuilder};
pub use config::ClientConfig;
pub use error::{SdkError, SdkResult};
pub use models::*;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::backend::AdminBackend;
    pub use crate::client::{Client, ClientBuilder};
    pub use crate::config::ClientConfig;
    pub use crate::error::{SdkError, SdkResult};
    pub use crate::models::*;
    pub use crate::services::*;
}

/// SDK version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default API URL
pub const DEFAULT_API_URL: &str = "http://localhost:8080";

//! Footprint admin edge service
//!
//! The small HTTP surface owned by the admin panel itself:
//!
//! - **`POST /api/upload`**: multipart upload into blob storage
//! - **maintenance gate**: redirects page requests to `/maintenance` while
//!   maintenance mode is on
//! - **CORS** on `/api/*`, pinned to a single origin per environment
//!
//! Everything else the panel does goes to the external backend through
//! `footprint-sdk`.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use footprint_api::{create_app, ApiConfig, AppState};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ApiConfig::from_env()?;
//!     let address = config.server_address();
//!     let app = create_app(AppState::new(config)?)?;
//!
//!     let listener = tokio::net::TcpListener::bind(address).await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod app;
pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

// Re-export commonly used types
pub use app::create_app;
pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use state::AppState;

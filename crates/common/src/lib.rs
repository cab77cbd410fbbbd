//! Common utilities shared by the Footprint admin crates.
//!
//! This crate provides:
//! - Page arithmetic (clamping, page counts, post-edit refetch targets)
//! - Query-string normalization for list filters
//! - Layered configuration loading
//! - Telemetry and structured logging setup

pub mod config;
pub mod pagination;
pub mod query;
pub mod telemetry;

// Re-export commonly used types
pub use config::{load_layered, AppEnvironment, TelemetryConfig};
pub use pagination::{clamp_page, max_pages, refetch_page_after_edit};
pub use query::normalize_username;
pub use telemetry::init_tracing;

/// Common error type used throughout the crate
pub type Result<T> = std::result::Result<T, anyhow::Error>;

//! Testing utilities for the Footprint admin crates
//!
//! This crate provides:
//! - Fixtures for review logs, ranking rows, stats and sessions
//! - Builders for constructing specific records
//! - `MockBackend`, an in-memory [`AdminBackend`](footprint_sdk::AdminBackend)
//!   that filters and pages like the real backend and records every call
//!
//! # Examples
//!
//! ```
//! use footprint_testing::{builders::*, mocks::MockBackend};
//! use footprint_domain::ReviewStatus;
//!
//! let log = AutoReviewLogBuilder::new()
//!     .with_id(7)
//!     .with_status(ReviewStatus::Pending)
//!     .build();
//!
//! let backend = MockBackend::new().with_logs(vec![log]);
//! assert_eq!(backend.log_count(), 1);
//! ```

pub mod builders;
pub mod fixtures;
pub mod mocks;

// Re-export commonly used types
pub use builders::*;
pub use fixtures::*;
pub use mocks::*;

// Re-export testing dependencies for convenience
pub use fake;
pub use proptest;
pub use wiremock;

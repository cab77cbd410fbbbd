//! Footprint Admin Domain Types
//!
//! This crate provides the records and value objects exchanged with the
//! Footprint contest backend. The backend owns every entity; the types here
//! describe its wire shapes and the small amount of client-side validation
//! that happens before a request is issued.
//!
//! ## Modules
//!
//! - **envelope**: the `{code, data, message}` response wrapper and page payloads
//! - **review**: automated review logs, task types and review status
//! - **ranking**: weekly leaderboard rows and week-number validation
//! - **stats**: dashboard counters
//! - **user**: session principal, roles and level bands
//! - **errors**: domain error types
//!
//! ## Usage
//!
//! ```rust
//! use footprint_domain::{ranking::WeekNumber, review::ReviewStatus};
//!
//! let week = WeekNumber::parse("12").unwrap();
//! assert_eq!(week.map(|w| w.get()), Some(12));
//!
//! assert_eq!(ReviewStatus::try_from(2).unwrap(), ReviewStatus::Rejected);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod envelope;
pub mod errors;
mod nullable;
pub mod ranking;
pub mod review;
pub mod stats;
pub mod user;

// Re-export commonly used types
pub use envelope::{Envelope, PageData, SUCCESS_CODE};
pub use errors::{DomainError, ValidationError};
pub use ranking::{WeekNumber, WeeklyRankingItem};
pub use review::{AutoReviewLog, ReviewStatus, ReviewUpdate, TaskType};
pub use stats::AdminStats;
pub use user::{LevelBand, UserRole, UserSession, LEVEL_BANDS};

//! Application layer for the Footprint admin panel
//!
//! Front-ends (the terminal client, or any UI) drive the controllers in this
//! crate with explicit events and render their state. Controllers talk to the
//! backend only through [`AdminBackend`](footprint_sdk::AdminBackend).
//!
//! ## Modules
//!
//! - `log_list` - paged, filtered review log list with page clamping
//! - `detail` - single-record detail dialog
//! - `review_edit` - review outcome editor with duplicate-submit guard
//! - `ranking` - weekly ranking query and CSV export
//! - `levels` - confirm-gated level recalculation trigger
//! - `stats` - dashboard counters
//! - `session` - admin-only gate
//! - `feedback` - load phases and timed banners shared by the controllers

pub mod config;
pub mod detail;
pub mod feedback;
pub mod levels;
pub mod log_list;
pub mod ranking;
pub mod review_edit;
pub mod session;
pub mod stats;

// Re-export commonly used types
pub use config::ControllerConfig;
pub use detail::{detail_rows, DetailDialog};
pub use feedback::{Banner, BannerKind, Phase};
pub use levels::LevelRecalculation;
pub use log_list::{FetchOutcome, FetchTicket, LogFilters, LogListController};
pub use ranking::{export_csv, export_file_name, parse_week, RankingController, RankingExport};
pub use review_edit::{ReviewDraft, ReviewEditDialog, SubmitOutcome};
pub use session::SessionGate;
pub use stats::Dashboard;

use footprint_domain::{DomainError, ValidationError};
use footprint_sdk::{AdminBackend, SdkError};
use std::sync::Arc;
use thiserror::Error;

/// Backend handle shared by controllers
pub type SharedBackend = Arc<dyn AdminBackend>;

/// Application-level errors
#[derive(Error, Debug)]
pub enum ApplicationError {
    /// The backend call failed (transport, HTTP or envelope)
    #[error(transparent)]
    Backend(#[from] SdkError),

    /// Input rejected before any request was made
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Permission denied
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// The action is not available in the current state
    #[error("{0}")]
    NotReady(String),

    /// CSV export could not be produced
    #[error("{0}")]
    Export(String),
}

impl ApplicationError {
    /// Get error code for logs and JSON output
    pub fn error_code(&self) -> &'static str {
        match self {
            ApplicationError::Backend(SdkError::Api { .. }) => "API_ERROR",
            ApplicationError::Backend(SdkError::Timeout { .. }) => "TIMEOUT",
            ApplicationError::Backend(_) => "BACKEND_UNAVAILABLE",
            ApplicationError::Validation(_) => "VALIDATION_FAILED",
            ApplicationError::Forbidden(_) => "FORBIDDEN",
            ApplicationError::NotReady(_) => "NOT_READY",
            ApplicationError::Export(_) => "EXPORT_FAILED",
        }
    }
}

impl From<DomainError> for ApplicationError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(e) => ApplicationError::Validation(e),
            DomainError::Forbidden(msg) => ApplicationError::Forbidden(msg),
        }
    }
}

pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let api = ApplicationError::from(SdkError::Api {
            code: 3,
            message: "nope".to_string(),
        });
        assert_eq!(api.error_code(), "API_ERROR");
        assert_eq!(api.to_string(), "nope");

        let invalid = ApplicationError::from(ValidationError::InvalidWeek {
            input: "0".to_string(),
        });
        assert_eq!(invalid.error_code(), "VALIDATION_FAILED");
    }

    #[test]
    fn test_from_domain_error() {
        let err: ApplicationError = DomainError::Forbidden("not admin".to_string()).into();
        assert!(matches!(err, ApplicationError::Forbidden(_)));
    }
}

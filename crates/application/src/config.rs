//! Controller timings and sizes.

use footprint_common::pagination::DEFAULT_PAGE_SIZE;
use std::time::Duration;

/// Settings injected into every controller
#[derive(Debug, Clone)]
pub struct ControllerConfig {
    /// Rows per page in the log list
    pub page_size: u32,
    /// How long the review dialog shows its success state before closing
    pub success_window: Duration,
    /// Lifetime of a success banner
    pub success_banner: Duration,
    /// Lifetime of an error banner
    pub error_banner: Duration,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            success_window: Duration::from_millis(1000),
            success_banner: Duration::from_secs(3),
            error_banner: Duration::from_secs(5),
        }
    }
}

impl ControllerConfig {
    /// No waiting; used by non-interactive front-ends
    pub fn immediate() -> Self {
        Self {
            success_window: Duration::ZERO,
            ..Self::default()
        }
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }
}

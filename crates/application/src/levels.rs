//! Level recalculation trigger.
//!
//! One confirmed action, one request. The backend recomputes every user's
//! level from accumulated points; the client only reports the outcome.

use crate::config::ControllerConfig;
use crate::feedback::Banner;
use crate::{ApplicationError, ApplicationResult, SharedBackend};
use std::time::Duration;
use tracing::{info, instrument, warn};

pub struct LevelRecalculation {
    backend: SharedBackend,
    banner: Option<Banner>,
    success_lifetime: Duration,
    error_lifetime: Duration,
}

impl LevelRecalculation {
    pub fn new(backend: SharedBackend, config: &ControllerConfig) -> Self {
        Self {
            backend,
            banner: None,
            success_lifetime: config.success_banner,
            error_lifetime: config.error_banner,
        }
    }

    /// Run the recalculation if `confirmed`.
    ///
    /// Without confirmation nothing is sent. A backend failure is reported
    /// as an error banner, not as `Err`.
    #[instrument(skip(self))]
    pub async fn trigger(&mut self, confirmed: bool) -> ApplicationResult<&Banner> {
        if !confirmed {
            return Err(ApplicationError::NotReady(
                "level recalculation requires confirmation".to_string(),
            ));
        }

        let banner = match self.backend.recalculate_levels().await {
            Ok(result) => {
                info!(updated = result.updated_count, "Levels recalculated");
                Banner::success(
                    format!(
                        "Level recalculation finished: {} users updated",
                        result.updated_count
                    ),
                    self.success_lifetime,
                )
            }
            Err(err) => {
                warn!(error = %err, "Level recalculation failed");
                Banner::error(
                    format!("Level recalculation failed: {}", err),
                    self.error_lifetime,
                )
            }
        };

        Ok(self.banner.insert(banner))
    }

    /// The banner, while it has not expired
    pub fn banner(&self) -> Option<&Banner> {
        self.banner.as_ref().filter(|b| b.is_visible())
    }
}

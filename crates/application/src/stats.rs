//! Dashboard counters.

use crate::config::ControllerConfig;
use crate::feedback::{Banner, Phase};
use crate::{ApplicationResult, SharedBackend};
use footprint_domain::AdminStats;
use std::time::Duration;
use tracing::warn;

pub struct Dashboard {
    backend: SharedBackend,
    stats: Option<AdminStats>,
    banner: Option<Banner>,
    phase: Phase,
    error_lifetime: Duration,
}

impl Dashboard {
    pub fn new(backend: SharedBackend, config: &ControllerConfig) -> Self {
        Self {
            backend,
            stats: None,
            banner: None,
            phase: Phase::Idle,
            error_lifetime: config.error_banner,
        }
    }

    pub fn stats(&self) -> Option<&AdminStats> {
        self.stats.as_ref()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn banner(&self) -> Option<&Banner> {
        self.banner.as_ref().filter(|b| b.is_visible())
    }

    /// Load the counters once. A failure keeps any previous snapshot and
    /// raises an error banner.
    pub async fn load_dashboard(&mut self) -> ApplicationResult<&AdminStats> {
        self.phase = Phase::Loading;
        match self.backend.admin_stats().await {
            Ok(stats) => {
                self.phase = Phase::Loaded;
                self.banner = None;
                Ok(self.stats.insert(stats))
            }
            Err(err) => {
                warn!(error = %err, "Failed to load dashboard stats");
                self.phase = Phase::Failed;
                self.banner = Some(Banner::error(
                    format!("Failed to load statistics: {}", err),
                    self.error_lifetime,
                ));
                Err(err.into())
            }
        }
    }
}

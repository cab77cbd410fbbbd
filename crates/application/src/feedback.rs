//! Load phases and timed banners.

use std::fmt;
use std::time::Duration;
use tokio::time::Instant;

/// Lifecycle of a fetch-backed view.
///
/// `Idle -> Loading -> Loaded | Failed`; any trigger moves back to `Loading`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Idle => "idle",
            Phase::Loading => "loading",
            Phase::Loaded => "loaded",
            Phase::Failed => "failed",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

/// A message shown until its deadline passes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub kind: BannerKind,
    pub message: String,
    pub expires_at: Instant,
}

impl Banner {
    pub fn success(message: impl Into<String>, lifetime: Duration) -> Self {
        Self::new(BannerKind::Success, message, lifetime)
    }

    pub fn error(message: impl Into<String>, lifetime: Duration) -> Self {
        Self::new(BannerKind::Error, message, lifetime)
    }

    fn new(kind: BannerKind, message: impl Into<String>, lifetime: Duration) -> Self {
        Self {
            kind,
            message: message.into(),
            expires_at: Instant::now() + lifetime,
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == BannerKind::Error
    }

    pub fn is_visible(&self) -> bool {
        Instant::now() < self.expires_at
    }
}

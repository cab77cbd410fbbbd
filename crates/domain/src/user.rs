//! Session principal and loyalty level bands.

use crate::errors::DomainError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Roles the client distinguishes. Anything that is not `admin` is treated
/// as a regular participant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    User,
    #[serde(other)]
    Other,
}

impl UserRole {
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }
}

/// Authenticated principal as reported by the backend session endpoint.
///
/// Only `user_role` is interpreted; the rest of the object is kept opaque.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSession {
    pub user_name: String,
    pub user_role: UserRole,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl UserSession {
    pub fn is_admin(&self) -> bool {
        self.user_role.is_admin()
    }

    /// Fail with `Forbidden` unless this principal is an administrator
    pub fn require_admin(&self) -> Result<(), DomainError> {
        if self.is_admin() {
            Ok(())
        } else {
            Err(DomainError::Forbidden(format!(
                "user '{}' is not an administrator",
                self.user_name
            )))
        }
    }
}

/// One loyalty level band. Bounds are inclusive; `max` of `None` is open-ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LevelBand {
    pub level: u8,
    pub min_points: u64,
    pub max_points: Option<u64>,
}

impl LevelBand {
    pub fn range_label(&self) -> String {
        match self.max_points {
            Some(max) => format!("{}-{}", self.min_points, max),
            None => format!("{}+", self.min_points),
        }
    }
}

/// Level thresholds applied by the backend's recalculation job.
///
/// Shown as documentation only; the client never assigns levels itself.
pub const LEVEL_BANDS: [LevelBand; 4] = [
    LevelBand { level: 1, min_points: 0, max_points: Some(100) },
    LevelBand { level: 2, min_points: 101, max_points: Some(300) },
    LevelBand { level: 3, min_points: 301, max_points: Some(700) },
    LevelBand { level: 4, min_points: 700, max_points: None },
];

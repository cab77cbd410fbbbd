//! Dashboard counters.

use serde::{Deserialize, Serialize};

/// Read-only aggregate snapshot shown on the admin dashboard
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminStats {
    /// Registered users
    #[serde(default)]
    pub total_users: u64,
    /// Contest applications received
    #[serde(default)]
    pub total_applications: u64,
    /// Users active in the current week
    #[serde(default)]
    pub weekly_participants: u64,
    /// Topic page views in the current week
    #[serde(default)]
    pub weekly_topic_views: u64,
}

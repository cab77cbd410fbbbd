//! Dashboard statistics service

use crate::client::Client;
use crate::error::SdkResult;
use crate::models::AdminStats;

/// Service for dashboard counters
#[derive(Clone)]
pub struct StatsService {
    client: Client,
}

impl StatsService {
    /// Create a new stats service
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Fetch the dashboard counters
    pub async fn get(&self) -> SdkResult<AdminStats> {
        self.client.get("/api/admin/stats").await
    }
}

//! Weekly ranking service

use crate::client::Client;
use crate::error::SdkResult;
use crate::models::{RankingQuery, WeekNumber, WeeklyRankingItem};

/// Service for leaderboard queries
#[derive(Clone)]
pub struct RankingService {
    client: Client,
}

impl RankingService {
    /// Create a new ranking service
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Full ranking for a week, or the latest week when `week` is `None`.
    ///
    /// The request always carries `limit=-1` so the backend returns every row.
    pub async fn weekly(&self, week: Option<WeekNumber>) -> SdkResult<Vec<WeeklyRankingItem>> {
        let items = self
            .client
            .get_with_query("/api/admin/weekly-ranking", &RankingQuery::all(week))
            .await?;
        Ok(items.unwrap_or_default())
    }
}

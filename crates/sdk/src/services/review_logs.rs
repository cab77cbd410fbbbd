//! Review log service
//!
//! Read access to the automated review log.

use crate::client::Client;
use crate::error::SdkResult;
use crate::models::{AutoReviewLog, LogQuery, PageData};

/// Service for review log operations
#[derive(Clone)]
pub struct ReviewLogService {
    client: Client,
}

impl ReviewLogService {
    /// Create a new review log service
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// List one page of logs
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use footprint_sdk::{Client, LogQuery, ReviewStatus};
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = Client::from_env()?;
    ///
    /// let query = LogQuery::new(1, 20).review_status(Some(ReviewStatus::Pending));
    /// let page = client.review_logs().list(&query).await?;
    /// println!("{} pending", page.total);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn list(&self, query: &LogQuery) -> SdkResult<PageData<AutoReviewLog>> {
        let page = self
            .client
            .get_with_query("/api/admin/auto-review/logs", query)
            .await?;
        Ok(page.unwrap_or_else(|| PageData::empty(query.size)))
    }

    /// Load a single log by id
    pub async fn get(&self, id: i64) -> SdkResult<AutoReviewLog> {
        self.client
            .get(&format!("/api/admin/auto-review/logs/{}", id))
            .await
    }
}

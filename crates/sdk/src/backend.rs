//! Backend port
//!
//! Controllers talk to the admin API through [`AdminBackend`] so they can be
//! driven by [`Client`] in production and by an in-memory double in tests.

use crate::client::Client;
use crate::error::SdkResult;
use crate::models::{
    AdminStats, AutoReviewLog, LogQuery, PageData, RecalculateLevelsResult, ReviewUpdate,
    TaskType, UserSession, WeekNumber, WeeklyRankingItem,
};
use async_trait::async_trait;

/// Operations the admin front-ends need from the backend
#[async_trait]
pub trait AdminBackend: Send + Sync {
    /// One page of review logs
    async fn list_logs(&self, query: &LogQuery) -> SdkResult<PageData<AutoReviewLog>>;

    /// A single review log
    async fn get_log(&self, id: i64) -> SdkResult<AutoReviewLog>;

    /// Change a review outcome
    async fn submit_review(&self, task_type: TaskType, update: &ReviewUpdate) -> SdkResult<()>;

    /// Full weekly ranking
    async fn weekly_ranking(&self, week: Option<WeekNumber>)
        -> SdkResult<Vec<WeeklyRankingItem>>;

    /// Dashboard counters
    async fn admin_stats(&self) -> SdkResult<AdminStats>;

    /// Run the batch level recalculation
    async fn recalculate_levels(&self) -> SdkResult<RecalculateLevelsResult>;

    /// Current principal
    async fn current_session(&self) -> SdkResult<UserSession>;
}

#[async_trait]
impl AdminBackend for Client {
    async fn list_logs(&self, query: &LogQuery) -> SdkResult<PageData<AutoReviewLog>> {
        self.review_logs().list(query).await
    }

    async fn get_log(&self, id: i64) -> SdkResult<AutoReviewLog> {
        self.review_logs().get(id).await
    }

    async fn submit_review(&self, task_type: TaskType, update: &ReviewUpdate) -> SdkResult<()> {
        self.reviews().submit(task_type, update).await
    }

    async fn weekly_ranking(
        &self,
        week: Option<WeekNumber>,
    ) -> SdkResult<Vec<WeeklyRankingItem>> {
        self.ranking().weekly(week).await
    }

    async fn admin_stats(&self) -> SdkResult<AdminStats> {
        self.stats().get().await
    }

    async fn recalculate_levels(&self) -> SdkResult<RecalculateLevelsResult> {
        self.users().recalculate_levels().await
    }

    async fn current_session(&self) -> SdkResult<UserSession> {
        self.session().current().await
    }
}

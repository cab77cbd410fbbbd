//! In-memory backend for controller tests.
//!
//! [`MockBackend`] answers like the real admin API: list queries are filtered
//! and paged server-side, out-of-range pages come back empty with the real
//! total, and review submissions mutate the stored logs. Every call is
//! recorded, and failures can be scripted per operation.

use async_trait::async_trait;
use footprint_domain::{
    AdminStats, AutoReviewLog, PageData, ReviewUpdate, TaskType, UserSession, WeekNumber,
    WeeklyRankingItem,
};
use footprint_sdk::{AdminBackend, LogQuery, RecalculateLevelsResult, SdkError, SdkResult};
use parking_lot::{Mutex, RwLock};
use std::collections::VecDeque;

use crate::fixtures::{create_admin_session, create_test_stats};

/// Backend operation, used to script failures and count calls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    ListLogs,
    GetLog,
    SubmitReview,
    WeeklyRanking,
    AdminStats,
    RecalculateLevels,
    CurrentSession,
}

/// A recorded call with its arguments
#[derive(Debug, Clone, PartialEq)]
pub enum BackendCall {
    ListLogs(LogQuery),
    GetLog(i64),
    SubmitReview(TaskType, ReviewUpdate),
    WeeklyRanking(Option<WeekNumber>),
    AdminStats,
    RecalculateLevels,
    CurrentSession,
}

impl BackendCall {
    pub fn operation(&self) -> Operation {
        match self {
            Self::ListLogs(_) => Operation::ListLogs,
            Self::GetLog(_) => Operation::GetLog,
            Self::SubmitReview(..) => Operation::SubmitReview,
            Self::WeeklyRanking(_) => Operation::WeeklyRanking,
            Self::AdminStats => Operation::AdminStats,
            Self::RecalculateLevels => Operation::RecalculateLevels,
            Self::CurrentSession => Operation::CurrentSession,
        }
    }
}

/// In-memory [`AdminBackend`]
pub struct MockBackend {
    logs: RwLock<Vec<AutoReviewLog>>,
    ranking: RwLock<Vec<WeeklyRankingItem>>,
    stats: RwLock<AdminStats>,
    session: RwLock<UserSession>,
    updated_count: RwLock<u64>,
    failures: Mutex<VecDeque<(Operation, SdkError)>>,
    calls: RwLock<Vec<BackendCall>>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self {
            logs: RwLock::new(Vec::new()),
            ranking: RwLock::new(Vec::new()),
            stats: RwLock::new(create_test_stats()),
            session: RwLock::new(create_admin_session()),
            updated_count: RwLock::new(0),
            failures: Mutex::new(VecDeque::new()),
            calls: RwLock::new(Vec::new()),
        }
    }

    pub fn with_logs(self, logs: Vec<AutoReviewLog>) -> Self {
        *self.logs.write() = logs;
        self
    }

    pub fn with_ranking(self, ranking: Vec<WeeklyRankingItem>) -> Self {
        *self.ranking.write() = ranking;
        self
    }

    pub fn with_stats(self, stats: AdminStats) -> Self {
        *self.stats.write() = stats;
        self
    }

    pub fn with_session(self, session: UserSession) -> Self {
        *self.session.write() = session;
        self
    }

    pub fn with_updated_count(self, count: u64) -> Self {
        *self.updated_count.write() = count;
        self
    }

    /// Make the next call to `operation` fail with `error`
    pub fn fail_next(&self, operation: Operation, error: SdkError) {
        self.failures.lock().push_back((operation, error));
    }

    /// Make the next call to `operation` fail with an envelope error
    pub fn fail_next_with_api(&self, operation: Operation, code: i64, message: &str) {
        self.fail_next(
            operation,
            SdkError::Api {
                code,
                message: message.to_string(),
            },
        );
    }

    /// Replace the stored logs
    pub fn set_logs(&self, logs: Vec<AutoReviewLog>) {
        *self.logs.write() = logs;
    }

    /// Remove a stored log, as if another administrator deleted it
    pub fn remove_log(&self, id: i64) {
        self.logs.write().retain(|log| log.id != id);
    }

    pub fn log(&self, id: i64) -> Option<AutoReviewLog> {
        self.logs.read().iter().find(|log| log.id == id).cloned()
    }

    pub fn log_count(&self) -> usize {
        self.logs.read().len()
    }

    pub fn calls(&self) -> Vec<BackendCall> {
        self.calls.read().clone()
    }

    pub fn call_count(&self, operation: Operation) -> usize {
        self.calls
            .read()
            .iter()
            .filter(|call| call.operation() == operation)
            .count()
    }

    /// Queries sent to the list endpoint, in order
    pub fn log_queries(&self) -> Vec<LogQuery> {
        self.calls
            .read()
            .iter()
            .filter_map(|call| match call {
                BackendCall::ListLogs(query) => Some(query.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn clear_calls(&self) {
        self.calls.write().clear();
    }

    fn record(&self, call: BackendCall) -> SdkResult<()> {
        let operation = call.operation();
        self.calls.write().push(call);

        let mut failures = self.failures.lock();
        match failures.iter().position(|(op, _)| *op == operation) {
            Some(index) => match failures.remove(index) {
                Some((_, error)) => Err(error),
                None => Ok(()),
            },
            None => Ok(()),
        }
    }
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new()
    }
}

fn matches_query(log: &AutoReviewLog, query: &LogQuery) -> bool {
    if let Some(task_type) = query.task_type {
        if log.task_type != task_type {
            return false;
        }
    }
    if let Some(week) = query.week_count {
        if log.week_count != week {
            return false;
        }
    }
    if let Some(status) = query.review_status {
        if log.review_status != status {
            return false;
        }
    }
    if let Some(username) = &query.username {
        if !log
            .username
            .to_lowercase()
            .contains(&username.to_lowercase())
        {
            return false;
        }
    }
    true
}

#[async_trait]
impl AdminBackend for MockBackend {
    async fn list_logs(&self, query: &LogQuery) -> SdkResult<PageData<AutoReviewLog>> {
        self.record(BackendCall::ListLogs(query.clone()))?;

        let logs = self.logs.read();
        let matching: Vec<&AutoReviewLog> =
            logs.iter().filter(|log| matches_query(log, query)).collect();

        let size = query.size.max(1) as usize;
        let skip = (query.page.max(1) as usize - 1) * size;
        let records = matching
            .iter()
            .skip(skip)
            .take(size)
            .map(|log| (*log).clone())
            .collect();

        Ok(PageData::new(
            records,
            matching.len() as u64,
            query.page,
            query.size,
        ))
    }

    async fn get_log(&self, id: i64) -> SdkResult<AutoReviewLog> {
        self.record(BackendCall::GetLog(id))?;
        self.log(id).ok_or_else(|| SdkError::Api {
            code: 404,
            message: "log not found".to_string(),
        })
    }

    async fn submit_review(&self, task_type: TaskType, update: &ReviewUpdate) -> SdkResult<()> {
        self.record(BackendCall::SubmitReview(task_type, update.clone()))?;

        let mut logs = self.logs.write();
        let mut found = false;
        for log in logs
            .iter_mut()
            .filter(|log| log.task_type == task_type && log.task_id == update.task_id)
        {
            log.review_status = update.review_status;
            log.review_message = Some(update.review_message.clone());
            found = true;
        }

        if found {
            Ok(())
        } else {
            Err(SdkError::Api {
                code: 404,
                message: "task not found".to_string(),
            })
        }
    }

    async fn weekly_ranking(
        &self,
        week: Option<WeekNumber>,
    ) -> SdkResult<Vec<WeeklyRankingItem>> {
        self.record(BackendCall::WeeklyRanking(week))?;
        Ok(self.ranking.read().clone())
    }

    async fn admin_stats(&self) -> SdkResult<AdminStats> {
        self.record(BackendCall::AdminStats)?;
        Ok(self.stats.read().clone())
    }

    async fn recalculate_levels(&self) -> SdkResult<RecalculateLevelsResult> {
        self.record(BackendCall::RecalculateLevels)?;
        Ok(RecalculateLevelsResult {
            updated_count: *self.updated_count.read(),
        })
    }

    async fn current_session(&self) -> SdkResult<UserSession> {
        self.record(BackendCall::CurrentSession)?;
        Ok(self.session.read().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::create_test_logs;
    use footprint_domain::ReviewStatus;

    #[tokio::test]
    async fn test_out_of_range_page_is_empty_with_total() {
        let backend = MockBackend::new().with_logs(create_test_logs(5));
        let page = backend.list_logs(&LogQuery::new(4, 2)).await.unwrap();
        assert!(page.records.is_empty());
        assert_eq!(page.total, 5);
    }

    #[tokio::test]
    async fn test_scripted_failure_is_consumed_once() {
        let backend = MockBackend::new();
        backend.fail_next_with_api(Operation::AdminStats, 500, "boom");

        assert!(backend.admin_stats().await.is_err());
        assert!(backend.admin_stats().await.is_ok());
        assert_eq!(backend.call_count(Operation::AdminStats), 2);
    }

    #[tokio::test]
    async fn test_submit_review_updates_stored_log() {
        let backend = MockBackend::new().with_logs(create_test_logs(3));
        let target = backend.log(2).unwrap();

        backend
            .submit_review(
                target.task_type,
                &ReviewUpdate {
                    task_id: target.task_id,
                    review_status: ReviewStatus::Rejected,
                    review_message: "duplicate".to_string(),
                },
            )
            .await
            .unwrap();

        let updated = backend.log(2).unwrap();
        assert_eq!(updated.review_status, ReviewStatus::Rejected);
        assert_eq!(updated.review_message.as_deref(), Some("duplicate"));
    }
}

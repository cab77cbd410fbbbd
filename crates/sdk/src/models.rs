//! Request and response models
//!
//! Entity types come from `footprint-domain`; this module adds the query
//! shapes and small response bodies that only exist on the wire.

use footprint_common::normalize_username;
use serde::{Deserialize, Serialize};

pub use footprint_domain::{
    AdminStats, AutoReviewLog, Envelope, PageData, ReviewStatus, ReviewUpdate, TaskType,
    UserSession, WeekNumber, WeeklyRankingItem,
};

/// `limit` value the ranking endpoint treats as "every row"
pub const ALL_ROWS_LIMIT: i64 = -1;

/// Query for the review log list endpoint
///
/// Empty filters are omitted from the query string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogQuery {
    /// 1-indexed page
    pub page: u32,
    /// Page size
    pub size: u32,
    /// Task family filter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_type: Option<TaskType>,
    /// Week filter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub week_count: Option<u32>,
    /// Review outcome filter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review_status: Option<ReviewStatus>,
    /// Normalized username filter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

impl LogQuery {
    /// Create an unfiltered query
    pub fn new(page: u32, size: u32) -> Self {
        Self {
            page,
            size,
            task_type: None,
            week_count: None,
            review_status: None,
            username: None,
        }
    }

    /// Filter by task family
    pub fn task_type(mut self, task_type: Option<TaskType>) -> Self {
        self.task_type = task_type;
        self
    }

    /// Filter by week
    pub fn week_count(mut self, week: Option<u32>) -> Self {
        self.week_count = week;
        self
    }

    /// Filter by review outcome
    pub fn review_status(mut self, status: Option<ReviewStatus>) -> Self {
        self.review_status = status;
        self
    }

    /// Filter by username.
    ///
    /// The raw input is trimmed and a single leading `@` is removed; input
    /// that is empty afterwards clears the filter.
    pub fn username(mut self, raw: &str) -> Self {
        self.username = normalize_username(raw);
        self
    }
}

/// Query for the weekly ranking endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RankingQuery {
    /// Week to rank; omitted for the latest week
    #[serde(skip_serializing_if = "Option::is_none")]
    pub week: Option<WeekNumber>,
    /// Always [`ALL_ROWS_LIMIT`]
    pub limit: i64,
}

impl RankingQuery {
    /// Full ranking for `week` (latest when `None`)
    pub fn all(week: Option<WeekNumber>) -> Self {
        Self {
            week,
            limit: ALL_ROWS_LIMIT,
        }
    }
}

/// Response of the level recalculation job
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecalculateLevelsResult {
    /// Number of users whose level changed
    #[serde(default)]
    pub updated_count: u64,
}

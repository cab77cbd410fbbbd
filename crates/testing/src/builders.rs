//! Fluent builders for test records.

use footprint_domain::{
    AutoReviewLog, ReviewStatus, TaskType, UserRole, UserSession, WeeklyRankingItem,
};
use serde_json::{Map, Value};

/// Builder for creating AutoReviewLog test instances
#[derive(Clone)]
pub struct AutoReviewLogBuilder {
    log: AutoReviewLog,
}

impl AutoReviewLogBuilder {
    pub fn new() -> Self {
        Self {
            log: AutoReviewLog {
                id: 1,
                task_type: TaskType::Communication,
                task_id: 100,
                user_id: 10,
                username: "testuser".to_string(),
                week_count: 1,
                date_range: Some("2024-03-04 ~ 2024-03-10".to_string()),
                content_link: Some("https://x.com/testuser/status/1".to_string()),
                screenshot_url: Some("https://blob.example.com/task/1-shot.png".to_string()),
                ocr_text: Some("@testuser retweeted".to_string()),
                ocr_success: true,
                ocr_duration: Some(850),
                ai_verified: true,
                ai_confidence: Some(91.0),
                ai_score: Some(8.5),
                ai_comment: Some("Retweet and like visible".to_string()),
                has_retweet: Some(true),
                has_like: Some(true),
                has_comment: Some(false),
                username_match: Some(true),
                ai_duration: Some(2300),
                review_status: ReviewStatus::Approved,
                review_message: None,
                points_added: true,
                points_value: Some(10),
                created_at: "2024-03-05 09:30:00".to_string(),
                updated_at: None,
                error_message: None,
            },
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.log.id = id;
        self
    }

    pub fn with_task_type(mut self, task_type: TaskType) -> Self {
        self.log.task_type = task_type;
        self
    }

    pub fn with_task_id(mut self, task_id: i64) -> Self {
        self.log.task_id = task_id;
        self
    }

    pub fn with_user(mut self, user_id: i64, username: impl Into<String>) -> Self {
        self.log.user_id = user_id;
        self.log.username = username.into();
        self
    }

    pub fn with_week(mut self, week: u32) -> Self {
        self.log.week_count = week;
        self
    }

    pub fn with_status(mut self, status: ReviewStatus) -> Self {
        self.log.review_status = status;
        self.log.points_added = status == ReviewStatus::Approved;
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.log.review_message = Some(message.into());
        self
    }

    /// Mark the attempt as failed in the pipeline
    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.log.error_message = Some(error.into());
        self.log.ocr_success = false;
        self.log.ai_verified = false;
        self
    }

    pub fn build(self) -> AutoReviewLog {
        self.log
    }
}

impl Default for AutoReviewLogBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for creating WeeklyRankingItem test instances
#[derive(Clone)]
pub struct RankingItemBuilder {
    item: WeeklyRankingItem,
}

impl RankingItemBuilder {
    pub fn new() -> Self {
        Self {
            item: WeeklyRankingItem {
                rank: 1,
                id: 1,
                user_name: "testuser".to_string(),
                twitter_username: None,
                weekly_points: 0,
                wallet_address: None,
            },
        }
    }

    pub fn with_rank(mut self, rank: u32) -> Self {
        self.item.rank = rank;
        self
    }

    pub fn with_user(mut self, id: i64, user_name: impl Into<String>) -> Self {
        self.item.id = id;
        self.item.user_name = user_name.into();
        self
    }

    pub fn with_twitter(mut self, handle: impl Into<String>) -> Self {
        self.item.twitter_username = Some(handle.into());
        self
    }

    pub fn with_points(mut self, points: i64) -> Self {
        self.item.weekly_points = points;
        self
    }

    pub fn with_wallet(mut self, address: impl Into<String>) -> Self {
        self.item.wallet_address = Some(address.into());
        self
    }

    pub fn build(self) -> WeeklyRankingItem {
        self.item
    }
}

impl Default for RankingItemBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for creating UserSession test instances
#[derive(Clone)]
pub struct SessionBuilder {
    user_name: String,
    user_role: UserRole,
    extra: Map<String, Value>,
}

impl SessionBuilder {
    pub fn new() -> Self {
        Self {
            user_name: "admin".to_string(),
            user_role: UserRole::Admin,
            extra: Map::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.user_name = name.into();
        self
    }

    pub fn with_role(mut self, role: UserRole) -> Self {
        self.user_role = role;
        self
    }

    pub fn with_extra(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    pub fn build(self) -> UserSession {
        UserSession {
            user_name: self.user_name,
            user_role: self.user_role,
            extra: self.extra,
        }
    }
}

impl Default for SessionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

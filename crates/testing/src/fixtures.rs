//! Test fixtures with realistic data.

use crate::builders::{AutoReviewLogBuilder, RankingItemBuilder, SessionBuilder};
use fake::{
    faker::{internet::en::Username, lorem::en::Sentence},
    Fake,
};
use footprint_domain::{
    AdminStats, AutoReviewLog, ReviewStatus, TaskType, UserRole, UserSession, WeeklyRankingItem,
};

/// Create a review log with a random username
pub fn create_test_log(id: i64) -> AutoReviewLog {
    let username: String = Username().fake();
    AutoReviewLogBuilder::new()
        .with_id(id)
        .with_task_id(1000 + id)
        .with_user(id, username)
        .build()
}

/// Create `count` logs cycling through task types and statuses.
///
/// Ids run from 1 to `count`; weeks cycle 1..=4.
pub fn create_test_logs(count: usize) -> Vec<AutoReviewLog> {
    (1..=count as i64)
        .map(|id| {
            let task_type = if id % 2 == 0 {
                TaskType::Community
            } else {
                TaskType::Communication
            };
            let status = ReviewStatus::all()[(id % 3) as usize];
            let mut builder = AutoReviewLogBuilder::new()
                .with_id(id)
                .with_task_id(1000 + id)
                .with_task_type(task_type)
                .with_user(id, format!("user{}", id))
                .with_week(((id - 1) % 4 + 1) as u32)
                .with_status(status);
            if status == ReviewStatus::Rejected {
                builder = builder.with_message(Sentence(3..6).fake::<String>());
            }
            builder.build()
        })
        .collect()
}

/// Create a ranking of `count` rows with descending points
pub fn create_test_ranking(count: usize) -> Vec<WeeklyRankingItem> {
    (1..=count as u32)
        .map(|rank| {
            let name: String = Username().fake();
            let mut builder = RankingItemBuilder::new()
                .with_rank(rank)
                .with_user(rank as i64 + 100, name.clone())
                .with_points(1000 - rank as i64 * 10);
            if rank % 2 == 1 {
                builder = builder
                    .with_twitter(name)
                    .with_wallet(format!("0x{:040x}", rank));
            }
            builder.build()
        })
        .collect()
}

/// Dashboard counters
pub fn create_test_stats() -> AdminStats {
    AdminStats {
        total_users: 1520,
        total_applications: 312,
        weekly_participants: 486,
        weekly_topic_views: 9304,
    }
}

/// Session for an administrator
pub fn create_admin_session() -> UserSession {
    SessionBuilder::new().with_name("admin").build()
}

/// Session for a regular participant
pub fn create_user_session() -> UserSession {
    SessionBuilder::new()
        .with_name("participant")
        .with_role(UserRole::User)
        .build()
}

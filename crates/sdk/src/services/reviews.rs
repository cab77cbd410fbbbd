//! Review service
//!
//! Changes the outcome of a task review. Each task family has its own endpoint.

use crate::client::Client;
use crate::error::SdkResult;
use crate::models::{ReviewUpdate, TaskType};

/// Service for review decisions
#[derive(Clone)]
pub struct ReviewService {
    client: Client,
}

impl ReviewService {
    /// Create a new review service
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Endpoint for a task family
    pub fn endpoint(task_type: TaskType) -> &'static str {
        match task_type {
            TaskType::Communication => "/api/admin/communication/review",
            TaskType::Community => "/api/admin/community/review",
        }
    }

    /// Submit a review decision
    pub async fn submit(&self, task_type: TaskType, update: &ReviewUpdate) -> SdkResult<()> {
        self.client
            .post::<serde_json::Value, _>(Self::endpoint(task_type), Some(update))
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_by_task_type() {
        assert_eq!(
            ReviewService::endpoint(TaskType::Communication),
            "/api/admin/communication/review"
        );
        assert_eq!(
            ReviewService::endpoint(TaskType::Community),
            "/api/admin/community/review"
        );
    }
}

//! User administration service

use crate::client::Client;
use crate::error::SdkResult;
use crate::models::RecalculateLevelsResult;

/// Service for user-wide batch operations
#[derive(Clone)]
pub struct UserService {
    client: Client,
}

impl UserService {
    /// Create a new user service
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Ask the backend to recompute every user's level from their points.
    ///
    /// Issues exactly one request. Returns the number of users updated.
    pub async fn recalculate_levels(&self) -> SdkResult<RecalculateLevelsResult> {
        let result = self
            .client
            .post::<RecalculateLevelsResult, ()>("/api/admin/users/recalculate-levels", None)
            .await?;
        Ok(result.unwrap_or(RecalculateLevelsResult { updated_count: 0 }))
    }
}

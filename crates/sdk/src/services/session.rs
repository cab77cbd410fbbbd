//! Session service

use crate::client::Client;
use crate::error::SdkResult;
use crate::models::UserSession;

/// Service for the current principal
#[derive(Clone)]
pub struct SessionService {
    client: Client,
}

impl SessionService {
    /// Create a new session service
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// The principal the configured token belongs to
    pub async fn current(&self) -> SdkResult<UserSession> {
        self.client.get("/api/auth/session").await
    }
}

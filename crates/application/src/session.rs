//! Admin-only gate.

use crate::{ApplicationResult, SharedBackend};
use footprint_domain::UserSession;
use tracing::debug;

/// Wraps the current principal; admin views check it before rendering.
#[derive(Debug, Clone)]
pub struct SessionGate {
    session: UserSession,
}

impl SessionGate {
    pub fn new(session: UserSession) -> Self {
        Self { session }
    }

    /// Fetch the session from the backend
    pub async fn load(backend: &SharedBackend) -> ApplicationResult<Self> {
        let session = backend.current_session().await?;
        debug!(user = %session.user_name, role = ?session.user_role, "Session loaded");
        Ok(Self::new(session))
    }

    pub fn session(&self) -> &UserSession {
        &self.session
    }

    pub fn is_admin(&self) -> bool {
        self.session.is_admin()
    }

    /// The session, if it belongs to an administrator
    pub fn require_admin(&self) -> ApplicationResult<&UserSession> {
        self.session.require_admin()?;
        Ok(&self.session)
    }
}

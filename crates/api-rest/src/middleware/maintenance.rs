//! Maintenance-mode redirect.
//!
//! While maintenance mode is on, every page request is sent to
//! `/maintenance` with a temporary redirect. API routes and the maintenance
//! page itself pass through.

use crate::state::AppState;
use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use tracing::debug;

/// Path of the static maintenance page
pub const MAINTENANCE_PATH: &str = "/maintenance";

/// Whether `path` is exempt from the maintenance redirect
pub fn is_exempt(path: &str) -> bool {
    under(path, MAINTENANCE_PATH) || under(path, "/api")
}

fn under(path: &str, prefix: &str) -> bool {
    path == prefix
        || path
            .strip_prefix(prefix)
            .is_some_and(|rest| rest.starts_with('/'))
}

/// Redirect gated paths while maintenance mode is on
pub async fn maintenance_middleware(
    State(state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Response {
    if state.config.maintenance_mode && !is_exempt(req.uri().path()) {
        debug!(path = %req.uri().path(), "Redirecting to maintenance page");
        return Redirect::temporary(MAINTENANCE_PATH).into_response();
    }

    next.run(req).await
}

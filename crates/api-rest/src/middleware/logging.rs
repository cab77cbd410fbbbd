//! Access log.
//!
//! One line per request once the response is ready. Redirects issued by the
//! maintenance gate are logged with their target.

use super::request_id::RequestId;
use axum::{
    body::Body,
    http::{header::LOCATION, Request, Response, StatusCode},
    middleware::Next,
};
use std::time::Instant;
use tracing::{error, info, warn};

#[derive(Debug, PartialEq, Eq)]
enum Outcome {
    Ok,
    Redirect,
    ClientError,
    ServerError,
}

fn classify(status: StatusCode) -> Outcome {
    if status.is_server_error() {
        Outcome::ServerError
    } else if status.is_client_error() {
        Outcome::ClientError
    } else if status.is_redirection() {
        Outcome::Redirect
    } else {
        Outcome::Ok
    }
}

/// Log method, path, status and latency of every request
pub async fn logging_middleware(req: Request<Body>, next: Next) -> Response<Body> {
    let started = Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_owned();
    let request_id = req
        .extensions()
        .get::<RequestId>()
        .map(|id| id.0.clone())
        .unwrap_or_default();

    let response = next.run(req).await;

    let status = response.status();
    let elapsed_ms = started.elapsed().as_millis() as u64;

    match classify(status) {
        Outcome::ServerError => {
            error!(%request_id, %method, %path, status = status.as_u16(), elapsed_ms, "request failed")
        }
        Outcome::ClientError => {
            warn!(%request_id, %method, %path, status = status.as_u16(), elapsed_ms, "request rejected")
        }
        Outcome::Redirect => {
            let location = response
                .headers()
                .get(LOCATION)
                .and_then(|v| v.to_str().ok())
                .unwrap_or("");
            info!(%request_id, %method, %path, status = status.as_u16(), location, "request redirected")
        }
        Outcome::Ok => {
            info!(%request_id, %method, %path, status = status.as_u16(), elapsed_ms, "request served")
        }
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(classify(StatusCode::OK), Outcome::Ok);
        assert_eq!(classify(StatusCode::TEMPORARY_REDIRECT), Outcome::Redirect);
        assert_eq!(classify(StatusCode::PAYLOAD_TOO_LARGE), Outcome::ClientError);
        assert_eq!(classify(StatusCode::INTERNAL_SERVER_ERROR), Outcome::ServerError);
    }
}

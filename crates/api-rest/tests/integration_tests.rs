//! Integration tests for the edge service router.
//!
//! Requests go through the full middleware stack with `tower::ServiceExt::oneshot`.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use footprint_api::{create_app, ApiConfig, AppState};
use footprint_common::AppEnvironment;
use footprint_infrastructure::MemoryBlobStore;
use http_body_util::BodyExt;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

const BOUNDARY: &str = "footprint-test-boundary";

fn app_with_store(config: ApiConfig, store: Arc<MemoryBlobStore>) -> Router {
    create_app(AppState::with_blob_store(config, store)).unwrap()
}

fn app_without_store(config: ApiConfig) -> Router {
    create_app(AppState::without_blob_store(config)).unwrap()
}

enum Part<'a> {
    File {
        name: &'a str,
        filename: &'a str,
        content_type: &'a str,
        data: &'a [u8],
    },
    Text {
        name: &'a str,
        value: &'a str,
    },
}

fn multipart_body(parts: &[Part<'_>]) -> Vec<u8> {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        match part {
            Part::File {
                name,
                filename,
                content_type,
                data,
            } => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\n\
                         Content-Type: {content_type}\r\n\r\n"
                    )
                    .as_bytes(),
                );
                body.extend_from_slice(data);
            }
            Part::Text { name, value } => {
                body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}")
                        .as_bytes(),
                );
            }
        }
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

fn upload_request(parts: &[Part<'_>]) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/api/upload")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(multipart_body(parts)))
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn avatar() -> Part<'static> {
    Part::File {
        name: "file",
        filename: "avatar.png",
        content_type: "image/png",
        data: b"\x89PNG fake image bytes",
    }
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = app_without_store(ApiConfig::default());

    let response = app
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("x-request-id"));
    let body = json_body(response).await;
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_request_id_is_echoed() {
    let app = app_without_store(ApiConfig::default());

    let response = app
        .oneshot(
            Request::get("/health")
                .header("x-request-id", "req-42")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.headers()["x-request-id"], "req-42");
}

#[tokio::test]
async fn test_upload_stores_object_under_biz_prefix() {
    let store = Arc::new(MemoryBlobStore::new("https://blobs.test"));
    let app = app_with_store(ApiConfig::default(), store.clone());

    let response = app
        .oneshot(upload_request(&[
            avatar(),
            Part::Text {
                name: "biz",
                value: "avatar",
            },
        ]))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["filename"], "avatar.png");

    let keys = store.keys();
    assert_eq!(keys.len(), 1);
    let key = &keys[0];
    let (biz, rest) = key.split_once('/').unwrap();
    let (millis, filename) = rest.split_once('-').unwrap();
    assert_eq!(biz, "avatar");
    assert!(millis.parse::<i64>().unwrap() > 0);
    assert_eq!(filename, "avatar.png");

    assert_eq!(body["url"], format!("https://blobs.test/{key}"));
    assert_eq!(store.content_type(key).as_deref(), Some("image/png"));
    assert_eq!(
        store.get(key).unwrap().as_ref(),
        b"\x89PNG fake image bytes".as_slice()
    );
}

#[tokio::test]
async fn test_upload_without_token_is_server_error() {
    let app = app_without_store(ApiConfig::default());

    let response = app
        .oneshot(upload_request(&[
            avatar(),
            Part::Text {
                name: "biz",
                value: "avatar",
            },
        ]))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = json_body(response).await;
    assert_eq!(body["error"], "Blob storage token is not configured");
}

#[tokio::test]
async fn test_upload_missing_file_is_bad_request() {
    let store = Arc::new(MemoryBlobStore::default());
    let app = app_with_store(ApiConfig::default(), store.clone());

    let response = app
        .oneshot(upload_request(&[Part::Text {
            name: "biz",
            value: "avatar",
        }]))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body["error"], "Missing required field: file");
    assert_eq!(store.object_count(), 0);
}

#[tokio::test]
async fn test_upload_missing_biz_is_bad_request() {
    let store = Arc::new(MemoryBlobStore::default());
    let app = app_with_store(ApiConfig::default(), store.clone());

    let response = app.oneshot(upload_request(&[avatar()])).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body["error"], "Missing required field: biz");
    assert_eq!(store.object_count(), 0);
}

#[tokio::test]
async fn test_upload_store_failure_reports_details() {
    let store = Arc::new(MemoryBlobStore::default());
    store.fail_with("quota exceeded");
    let app = app_with_store(ApiConfig::default(), store);

    let response = app
        .oneshot(upload_request(&[
            avatar(),
            Part::Text {
                name: "biz",
                value: "task",
            },
        ]))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = json_body(response).await;
    assert_eq!(body["error"], "Upload failed");
    assert!(body["details"].as_str().unwrap().contains("quota exceeded"));
}

#[tokio::test]
async fn test_maintenance_redirects_pages() {
    let config = ApiConfig {
        maintenance_mode: true,
        ..ApiConfig::default()
    };
    let app = app_without_store(config);

    let response = app
        .oneshot(Request::get("/admin/logs").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.headers()[header::LOCATION], "/maintenance");
}

#[tokio::test]
async fn test_maintenance_page_and_api_pass_through() {
    let config = ApiConfig {
        maintenance_mode: true,
        ..ApiConfig::default()
    };
    let store = Arc::new(MemoryBlobStore::default());
    let app = app_with_store(config, store);

    let page = app
        .clone()
        .oneshot(Request::get("/maintenance").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(page.status(), StatusCode::OK);
    let html = page.into_body().collect().await.unwrap().to_bytes();
    assert!(String::from_utf8_lossy(&html).contains("maintenance"));

    let upload = app
        .oneshot(upload_request(&[
            avatar(),
            Part::Text {
                name: "biz",
                value: "avatar",
            },
        ]))
        .await
        .unwrap();
    assert_eq!(upload.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_no_redirect_when_maintenance_off() {
    let app = app_without_store(ApiConfig::default());

    let response = app
        .oneshot(Request::get("/admin/logs").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_cors_preflight_in_development() {
    let app = app_without_store(ApiConfig::default());

    let response = app
        .oneshot(
            Request::builder()
                .method(Method::OPTIONS)
                .uri("/api/upload")
                .header(header::ORIGIN, "http://localhost:3000")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let headers = response.headers();
    assert_eq!(
        headers[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "http://localhost:3000"
    );
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_CREDENTIALS], "true");
    let methods = headers[header::ACCESS_CONTROL_ALLOW_METHODS]
        .to_str()
        .unwrap()
        .to_string();
    for method in ["GET", "POST", "PUT", "DELETE", "OPTIONS"] {
        assert!(methods.contains(method), "missing {method} in {methods}");
    }
    let allowed_headers = headers[header::ACCESS_CONTROL_ALLOW_HEADERS]
        .to_str()
        .unwrap()
        .to_lowercase();
    assert!(allowed_headers.contains("content-type"));
    assert!(allowed_headers.contains("authorization"));
}

#[tokio::test]
async fn test_cors_origin_pinned_in_production() {
    let config = ApiConfig {
        app_env: AppEnvironment::Production,
        production_origin: Some("https://admin.footprint.network".to_string()),
        ..ApiConfig::default()
    };
    let app = app_without_store(config);

    let response = app
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/api/upload")
                .header(header::ORIGIN, "https://admin.footprint.network")
                .header(
                    header::CONTENT_TYPE,
                    format!("multipart/form-data; boundary={BOUNDARY}"),
                )
                .body(Body::from(multipart_body(&[avatar()])))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "https://admin.footprint.network"
    );
}

#[tokio::test]
async fn test_cors_not_applied_outside_api() {
    let app = app_without_store(ApiConfig::default());

    let response = app
        .oneshot(
            Request::get("/health")
                .header(header::ORIGIN, "http://localhost:3000")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(!response
        .headers()
        .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
}

#[tokio::test]
async fn test_oversized_upload_is_rejected() {
    let config = ApiConfig {
        max_body_size: 1024,
        ..ApiConfig::default()
    };
    let store = Arc::new(MemoryBlobStore::default());
    let app = app_with_store(config, store.clone());

    let large = vec![b'x'; 4096];
    let response = app
        .oneshot(upload_request(&[
            Part::File {
                name: "file",
                filename: "large.bin",
                content_type: "application/octet-stream",
                data: &large,
            },
            Part::Text {
                name: "biz",
                value: "avatar",
            },
        ]))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(store.object_count(), 0);
}

#[tokio::test]
async fn test_swagger_is_gated_during_maintenance() {
    let config = ApiConfig {
        maintenance_mode: true,
        enable_swagger: true,
        ..ApiConfig::default()
    };
    let app = app_without_store(config);

    for path in ["/swagger-ui/", "/api-docs/openapi.json"] {
        let response = app
            .clone()
            .oneshot(Request::get(path).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT, "{path}");
        assert_eq!(response.headers()[header::LOCATION], "/maintenance");
    }
}

#[tokio::test]
async fn test_swagger_served_when_enabled() {
    let config = ApiConfig {
        enable_swagger: true,
        ..ApiConfig::default()
    };
    let app = app_without_store(config);

    let response = app
        .oneshot(
            Request::get("/api-docs/openapi.json")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let doc = json_body(response).await;
    assert!(doc["paths"]["/api/upload"].is_object());
}

//! HTTP behaviour of the SDK against a mock backend.

use footprint_sdk::{
    AdminBackend, Client, LogQuery, ReviewStatus, ReviewUpdate, SdkError, TaskType, WeekNumber,
};
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> Client {
    Client::builder()
        .base_url(server.uri())
        .bearer_token("admin-token")
        .timeout(Duration::from_millis(300))
        .build()
        .unwrap()
}

fn log_json(id: i64) -> serde_json::Value {
    json!({
        "id": id,
        "taskType": "communication",
        "taskId": 70 + id,
        "userId": 5,
        "username": "alice",
        "weekCount": 3,
        "ocrSuccess": true,
        "aiVerified": true,
        "aiConfidence": 92.5,
        "reviewStatus": 1,
        "pointsAdded": true,
        "pointsValue": 10,
        "createdAt": "2024-03-01 10:00:00"
    })
}

#[tokio::test]
async fn test_list_logs_sends_filters_and_unwraps_page() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/admin/auto-review/logs"))
        .and(query_param("page", "2"))
        .and(query_param("size", "20"))
        .and(query_param("username", "Alice"))
        .and(query_param("reviewStatus", "2"))
        .and(header("authorization", "Bearer admin-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 0,
            "data": {"records": [log_json(1), log_json(2)], "total": 47, "current": 2, "size": 20}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let query = LogQuery::new(2, 20)
        .review_status(Some(ReviewStatus::Rejected))
        .username(" @Alice ");
    let page = client_for(&server).list_logs(&query).await.unwrap();

    assert_eq!(page.total, 47);
    assert_eq!(page.records.len(), 2);
    assert_eq!(page.records[0].review_status, ReviewStatus::Approved);

    let requests = server.received_requests().await.unwrap();
    let query_string = requests[0].url.query().unwrap_or_default().to_string();
    assert!(!query_string.contains("taskType"));
    assert!(!query_string.contains("weekCount"));
}

#[tokio::test]
async fn test_non_zero_code_is_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/admin/auto-review/logs/9"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"code": 404, "message": "log not found"})),
        )
        .mount(&server)
        .await;

    let err = client_for(&server).get_log(9).await.unwrap_err();
    match err {
        SdkError::Api { code, message } => {
            assert_eq!(code, 404);
            assert_eq!(message, "log not found");
        }
        other => panic!("expected api error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_blank_message_gets_generic_text() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/admin/stats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"code": 7, "message": " "})))
        .mount(&server)
        .await;

    let err = client_for(&server).admin_stats().await.unwrap_err();
    assert_eq!(err.to_string(), "request failed with code 7");
}

#[tokio::test]
async fn test_non_2xx_is_http_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/admin/stats"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream down"))
        .mount(&server)
        .await;

    let err = client_for(&server).admin_stats().await.unwrap_err();
    assert!(err.is_transport());
    assert_eq!(err.status_code(), Some(503));
}

#[tokio::test]
async fn test_malformed_body_is_invalid_response() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/admin/stats"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server).admin_stats().await.unwrap_err();
    assert!(matches!(err, SdkError::InvalidResponse { .. }));
}

#[tokio::test]
async fn test_slow_backend_times_out() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/auth/session"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_secs(2))
                .set_body_json(json!({"code": 0, "data": {"userName": "root", "userRole": "admin"}})),
        )
        .mount(&server)
        .await;

    let err = client_for(&server).current_session().await.unwrap_err();
    assert!(matches!(err, SdkError::Timeout { .. }));
}

#[tokio::test]
async fn test_submit_review_routes_by_task_type() {
    let server = MockServer::start().await;

    let update = ReviewUpdate {
        task_id: 12,
        review_status: ReviewStatus::Approved,
        review_message: "looks good".to_string(),
    };

    Mock::given(method("POST"))
        .and(path("/api/admin/community/review"))
        .and(body_json(json!({"taskId": 12, "reviewStatus": 1, "reviewMessage": "looks good"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"code": 0})))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/admin/communication/review"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"code": 0})))
        .expect(0)
        .mount(&server)
        .await;

    client_for(&server)
        .submit_review(TaskType::Community, &update)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_weekly_ranking_requests_every_row() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/admin/weekly-ranking"))
        .and(query_param("week", "5"))
        .and(query_param("limit", "-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 0,
            "data": [
                {"rank": 1, "id": 3, "userName": "bob", "weeklyPoints": 120},
                {"rank": 2, "id": 8, "userName": "carol", "twitterUsername": "carol_x", "weeklyPoints": 90, "walletAddress": "0xabc"}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let items = client_for(&server)
        .weekly_ranking(WeekNumber::new(5))
        .await
        .unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[1].wallet_address.as_deref(), Some("0xabc"));
}

#[tokio::test]
async fn test_recalculate_levels_posts_once() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/admin/users/recalculate-levels"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"code": 0, "data": {"updatedCount": 318}})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let result = client_for(&server).recalculate_levels().await.unwrap();
    assert_eq!(result.updated_count, 318);
}

#[tokio::test]
async fn test_session_keeps_extra_fields() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/auth/session"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 0,
            "data": {"userName": "root", "userRole": "admin", "avatar": "a.png"}
        })))
        .mount(&server)
        .await;

    let session = client_for(&server).current_session().await.unwrap();
    assert!(session.is_admin());
    assert_eq!(session.extra["avatar"], "a.png");
}

//! End-to-end router tests driven through `oneshot`, no TCP listener.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::util::ServiceExt;

use server::{build_router, ServerConfig, ServerState};

fn test_router() -> axum::Router {
    let state = Arc::new(ServerState::new(ServerConfig::default()).unwrap());
    build_router(state)
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_endpoint_reports_healthy() {
    let app = test_router();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["provider"], "stub");
}

#[tokio::test]
async fn info_endpoint_lists_compare() {
    let app = test_router();

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["name"], "clausediff-server");
    assert_eq!(body["endpoints"]["compare"], "POST /api/v1/compare");
}

#[tokio::test]
async fn compare_endpoint_returns_annotated_html() {
    let app = test_router();

    let payload = json!({
        "originalDocument": "C1. The fee is $100 per month payable in advance.\nC2. Either party may terminate with thirty days notice.",
        "htmlBodyContent": "<p>START</p><p>C1. The fee is $200 per month payable in advance.</p><p>C2. Either party may terminate with thirty days notice.</p><p>END</p>",
        "dateTimeFormat": "START",
        "marker": "END"
    });

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/compare")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["success"], true);

    let html = body["html_output"].as_str().unwrap();
    assert!(html.starts_with("<html><body"));
    assert!(html.contains("line-through"));

    let message = body["message"].as_str().unwrap();
    assert!(message.contains("2 original clauses"));
}

#[tokio::test]
async fn compare_rejects_malformed_body() {
    let app = test_router();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/compare")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"originalDocument": "C1. Alpha"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn unknown_route_returns_error_envelope() {
    let app = test_router();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/nope")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn responses_carry_a_request_id() {
    let app = test_router();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .header("x-request-id", "abc-123")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(
        response.headers().get("x-request-id").unwrap(),
        "abc-123"
    );
}

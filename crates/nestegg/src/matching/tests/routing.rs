use std::sync::Arc;

use axum::http::StatusCode;
use tower::ServiceExt;

use super::common::*;
use crate::matching::recommendation_router;

#[tokio::test]
async fn recommendations_route_returns_ranked_matches() {
    let router = recommendation_router(Arc::new(engine()));

    let response = router
        .oneshot(
            axum::http::Request::post("/api/v1/recommendations")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(
                    serde_json::to_vec(&base_profile()).unwrap(),
                ))
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert!(payload.get("account_type").is_some());
    assert_eq!(
        payload
            .get("matches")
            .and_then(serde_json::Value::as_array)
            .map(Vec::len),
        Some(3)
    );
}

#[tokio::test]
async fn recommendations_route_accepts_partial_profiles() {
    let router = recommendation_router(Arc::new(engine()));

    let response = router
        .oneshot(
            axum::http::Request::post("/api/v1/recommendations")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(r#"{"experience":"beginner"}"#))
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn recommendations_route_rejects_malformed_payloads() {
    let router = recommendation_router(Arc::new(engine()));

    let response = router
        .oneshot(
            axum::http::Request::post("/api/v1/recommendations")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from("{not json"))
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn brokerages_route_lists_the_catalog() {
    let router = recommendation_router(Arc::new(engine()));

    let response = router
        .oneshot(
            axum::http::Request::get("/api/v1/brokerages")
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    let entries = payload.as_array().expect("catalog serializes as an array");
    assert_eq!(entries.len(), 8);
    assert!(entries.iter().any(|entry| entry.get("id")
        == Some(&serde_json::Value::String("summit".to_string()))));
}

//! Contract Test: GET /

use crate::support::app::{create_test_app, send};
use axum::http::{Method, StatusCode};
use serde_json::json;

#[tokio::test]
async fn test_root_returns_hello_world() {
    let (app, _pool) = create_test_app().await;

    let (status, body) = send(&app, Method::GET, "/", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Hello World" }));
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let (app, _pool) = create_test_app().await;

    let (status, _) = send(&app, Method::GET, "/products", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

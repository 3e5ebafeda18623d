//! Contract Test: GET /product, GET /product/:id

use crate::support::app::{create_test_app, send, widget};
use axum::http::{Method, StatusCode};
use serde_json::json;

#[tokio::test]
async fn test_list_empty_returns_empty_array() {
    let (app, _pool) = create_test_app().await;

    let (status, body) = send(&app, Method::GET, "/product", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_list_returns_all_products_in_id_order() {
    let (app, _pool) = create_test_app().await;
    for name in ["Alpha", "Beta", "Gamma"] {
        let mut payload = widget();
        payload["name"] = json!(name);
        send(&app, Method::POST, "/product", Some(payload)).await;
    }

    let (status, body) = send(&app, Method::GET, "/product", None).await;

    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Alpha", "Beta", "Gamma"]);
}

#[tokio::test]
async fn test_get_returns_created_product() {
    let (app, _pool) = create_test_app().await;
    let (_, created) = send(&app, Method::POST, "/product", Some(widget())).await;

    let (status, body) = send(&app, Method::GET, "/product/1", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, created);
}

#[tokio::test]
async fn test_get_unknown_id_is_not_found() {
    let (app, _pool) = create_test_app().await;

    let (status, body) = send(&app, Method::GET, "/product/42", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["type"], "not_found_error");
    assert_eq!(body["error"]["message"], "Product 42 not found");
}

#[tokio::test]
async fn test_get_non_numeric_id_is_bad_request() {
    let (app, _pool) = create_test_app().await;

    let (status, body) = send(&app, Method::GET, "/product/abc", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["type"], "invalid_request_error");
}

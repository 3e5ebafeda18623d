//! Contract Test: DELETE /product/:id

use crate::support::app::{create_test_app, send, widget};
use axum::http::{Method, StatusCode};

#[tokio::test]
async fn test_create_get_delete_lifecycle() {
    let (app, _pool) = create_test_app().await;

    let (status, created) = send(&app, Method::POST, "/product", Some(widget())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["id"], 1);

    let (status, fetched) = send(&app, Method::GET, "/product/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let (status, deleted) = send(&app, Method::DELETE, "/product/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted, created);

    let (status, _) = send(&app, Method::GET, "/product/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_unknown_id_is_not_found() {
    let (app, _pool) = create_test_app().await;

    let (status, body) = send(&app, Method::DELETE, "/product/5", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["type"], "not_found_error");
}

#[tokio::test]
async fn test_deleted_id_is_not_reused() {
    let (app, _pool) = create_test_app().await;
    send(&app, Method::POST, "/product", Some(widget())).await;
    send(&app, Method::DELETE, "/product/1", None).await;

    let (status, recreated) = send(&app, Method::POST, "/product", Some(widget())).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(recreated["id"], 2);
}

#[tokio::test]
async fn test_deleted_name_can_be_reused() {
    let (app, _pool) = create_test_app().await;
    send(&app, Method::POST, "/product", Some(widget())).await;
    send(&app, Method::DELETE, "/product/1", None).await;

    let (_, body) = send(&app, Method::GET, "/product", None).await;
    assert_eq!(body, serde_json::json!([]));

    let (status, _) = send(&app, Method::POST, "/product", Some(widget())).await;
    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn test_delete_non_numeric_id_is_bad_request() {
    let (app, _pool) = create_test_app().await;
    send(&app, Method::POST, "/product", Some(widget())).await;

    let (status, body) = send(&app, Method::DELETE, "/product/one", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["type"], "invalid_request_error");

    let (_, listed) = send(&app, Method::GET, "/product", None).await;
    assert_eq!(listed.as_array().unwrap().len(), 1);
}

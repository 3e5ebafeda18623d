//! Contract Test: PUT /product/:id

use crate::support::app::{create_test_app, send, widget};
use axum::http::{Method, StatusCode};
use serde_json::json;

fn gadget() -> serde_json::Value {
    json!({
        "name": "Gadget",
        "description": "A gadget",
        "price": 20.0,
        "quantity": 1
    })
}

#[tokio::test]
async fn test_update_overwrites_all_fields() {
    let (app, _pool) = create_test_app().await;
    send(&app, Method::POST, "/product", Some(widget())).await;

    let (status, body) = send(&app, Method::PUT, "/product/1", Some(gadget())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "id": 1,
            "name": "Gadget",
            "description": "A gadget",
            "price": 20.0,
            "quantity": 1
        })
    );

    let (_, fetched) = send(&app, Method::GET, "/product/1", None).await;
    assert_eq!(fetched, body);
}

#[tokio::test]
async fn test_update_with_same_name_is_allowed() {
    let (app, _pool) = create_test_app().await;
    send(&app, Method::POST, "/product", Some(widget())).await;
    let mut payload = widget();
    payload["quantity"] = json!(99);

    let (status, body) = send(&app, Method::PUT, "/product/1", Some(payload)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["quantity"], 99);
}

#[tokio::test]
async fn test_update_unknown_id_is_not_found() {
    let (app, pool) = create_test_app().await;

    let (status, _) = send(&app, Method::PUT, "/product/7", Some(gadget())).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[tokio::test]
async fn test_update_to_existing_name_is_conflict() {
    let (app, _pool) = create_test_app().await;
    send(&app, Method::POST, "/product", Some(widget())).await;
    send(&app, Method::POST, "/product", Some(gadget())).await;

    let (status, body) = send(&app, Method::PUT, "/product/2", Some(widget())).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"]["type"], "conflict_error");

    let (_, unchanged) = send(&app, Method::GET, "/product/2", None).await;
    assert_eq!(unchanged["name"], "Gadget");
}

#[tokio::test]
async fn test_update_missing_fields_is_bad_request() {
    let (app, _pool) = create_test_app().await;
    send(&app, Method::POST, "/product", Some(widget())).await;

    let (status, _) = send(
        &app,
        Method::PUT,
        "/product/1",
        Some(json!({ "name": "Renamed" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let (_, unchanged) = send(&app, Method::GET, "/product/1", None).await;
    assert_eq!(unchanged["name"], "Widget");
}

#[tokio::test]
async fn test_update_non_numeric_id_is_bad_request() {
    let (app, _pool) = create_test_app().await;

    let (status, body) = send(&app, Method::PUT, "/product/abc", Some(gadget())).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["type"], "invalid_request_error");
}

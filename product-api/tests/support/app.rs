//! テスト用アプリケーション構築ヘルパー

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use product_api::{api, db, AppState};
use serde_json::Value;
use sqlx::SqlitePool;
use tower::ServiceExt;

/// インメモリDBでマイグレーション済みのルーターとプールを返す
pub async fn create_test_app() -> (Router, SqlitePool) {
    let pool = db::migrations::initialize_database("sqlite::memory:", 1)
        .await
        .expect("Failed to initialize test database");
    let app = api::create_app(AppState::new(pool.clone()));
    (app, pool)
}

/// リクエストを1件送信し、ステータスとJSONボディを返す
///
/// ボディが空またはJSONでない場合は`Value::Null`。
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let request = match body {
        Some(json) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&json).unwrap()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };
    send_request(app, request).await
}

/// 組み立て済みリクエストを送信する（不正なボディのテスト用）
pub async fn send_request(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

/// 標準的な商品ペイロード
pub fn widget() -> Value {
    serde_json::json!({
        "name": "Widget",
        "description": "A widget",
        "price": 10.0,
        "quantity": 5
    })
}

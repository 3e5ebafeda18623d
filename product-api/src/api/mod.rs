//! REST APIハンドラー
//!
//! 商品CRUD APIのルーティング

pub mod error;
pub mod products;
pub mod root;

use crate::AppState;
use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

/// APIルーターを作成
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(root::hello))
        .route(
            "/product",
            get(products::list_products).post(products::create_product),
        )
        .route(
            "/product/:id",
            get(products::get_product)
                .put(products::update_product)
                .delete(products::delete_product),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

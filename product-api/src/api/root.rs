//! ルートAPI

use axum::Json;
use serde::Serialize;

/// メッセージのみのレスポンス
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    /// メッセージ本文
    pub message: &'static str,
}

/// GET / - 疎通確認用の挨拶
pub async fn hello() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Hello World",
    })
}

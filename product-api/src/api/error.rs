//! APIエラーレスポンス型
//!
//! axum用の共通エラーハンドリング

use crate::common::error::{ApiError, CommonError};
use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    response::IntoResponse,
    Json,
};

/// Axum用のエラーレスポンス型
#[derive(Debug)]
pub struct AppError(pub ApiError);

impl From<ApiError> for AppError {
    fn from(err: ApiError) -> Self {
        AppError(err)
    }
}

impl From<CommonError> for AppError {
    fn from(err: CommonError) -> Self {
        AppError(ApiError::Common(err))
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError(ApiError::validation(format!(
            "Invalid request body: {}",
            rejection.body_text()
        )))
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError(ApiError::validation(format!(
            "Invalid product id: {}",
            rejection.body_text()
        )))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = self.0.status_code();
        // サーバーエラーの詳細はログにのみ出力し、レスポンスには汎用メッセージを返す
        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = %self.0, "Request failed");
        } else {
            tracing::debug!(status = status.as_u16(), error = %self.0, "Request rejected");
        }

        (status, Json(self.0.to_error_response())).into_response()
    }
}

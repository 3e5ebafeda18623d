//! エラー型定義
//!
//! 統一エラー型（thiserror使用）
//!
//! # 構造化エラーレスポンス
//!
//! `ApiError`は`error_type()`と`status_code()`メソッドを提供し、
//! `{"error": {"message", "type", "code"}}` 形式のレスポンスを生成できます。

use axum::http::StatusCode;
use serde::Serialize;
use thiserror::Error;

/// Common layer error type
#[derive(Debug, Error)]
pub enum CommonError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Product API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Common layer error
    #[error(transparent)]
    Common(#[from] CommonError),

    /// Product not found
    #[error("Product not found: {0}")]
    ProductNotFound(i64),

    /// Conflict error (e.g., duplicate product name)
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Shorthand for a validation failure.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Common(CommonError::Validation(message.into()))
    }

    /// Returns a safe error message for external clients.
    ///
    /// Client errors describe what was wrong with the request. Server errors
    /// return a generic message; the full details only go to the server log.
    pub fn external_message(&self) -> String {
        match self {
            Self::Common(CommonError::Validation(msg)) => msg.clone(),
            Self::Common(CommonError::Config(_)) => "Configuration error".to_string(),
            Self::ProductNotFound(id) => format!("Product {} not found", id),
            Self::Conflict(msg) => msg.clone(),
            Self::Database(_) => "Database error".to_string(),
            Self::Internal(_) => "Internal server error".to_string(),
        }
    }

    /// Returns the error type string.
    ///
    /// # Error Types
    ///
    /// - `invalid_request_error`: Missing or malformed fields
    /// - `not_found_error`: Resource not found
    /// - `conflict_error`: Unique constraint violated
    /// - `server_error`: Internal server errors
    pub fn error_type(&self) -> &'static str {
        match self {
            Self::Common(CommonError::Validation(_)) => "invalid_request_error",
            Self::Common(CommonError::Config(_)) => "server_error",
            Self::ProductNotFound(_) => "not_found_error",
            Self::Conflict(_) => "conflict_error",
            Self::Database(_) => "server_error",
            Self::Internal(_) => "server_error",
        }
    }

    /// Returns the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Common(CommonError::Validation(_)) => StatusCode::BAD_REQUEST,
            Self::Common(CommonError::Config(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::ProductNotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Converts this error to a structured error response body.
    pub fn to_error_response(&self) -> ErrorResponse {
        ErrorResponse {
            error: ErrorDetail {
                message: self.external_message(),
                error_type: self.error_type().to_string(),
                code: Some(self.status_code().as_u16().to_string()),
            },
        }
    }
}

/// 構造化エラーレスポンス
///
/// # Example
///
/// ```json
/// {
///   "error": {
///     "message": "Product 1 not found",
///     "type": "not_found_error",
///     "code": "404"
///   }
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// The error details
    pub error: ErrorDetail,
}

/// エラー詳細
#[derive(Debug, Clone, Serialize)]
pub struct ErrorDetail {
    /// Human-readable error message
    pub message: String,
    /// Error type (e.g., "invalid_request_error", "server_error")
    #[serde(rename = "type")]
    pub error_type: String,
    /// Error code (optional, typically HTTP status as string)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

/// Result type alias (Common)
pub type CommonResult<T> = Result<T, CommonError>;

/// Result type alias (API)
pub type ApiResult<T> = Result<T, ApiError>;

//! 共通型定義

/// エラー型
pub mod error;

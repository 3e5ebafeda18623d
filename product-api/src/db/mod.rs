//! データベースアクセス層
//!
//! SQLiteベースのデータ永続化

/// データベースマイグレーション
pub mod migrations;

/// 商品管理
pub mod products;

/// Repository traitパターン（ハンドラーへの注入用）
pub mod traits;

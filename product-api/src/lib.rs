//! Product API Server
//!
//! 単一の商品テーブルに対するCRUD REST API

#![warn(missing_docs)]

/// 共通型定義（エラー型）
pub mod common;

/// REST APIハンドラー
pub mod api;

/// データベースアクセス
pub mod db;

/// ロギング初期化ユーティリティ
pub mod logging;

/// 設定管理（環境変数ヘルパー）
pub mod config;

/// CLIインターフェース
pub mod cli;

/// HTTPサーバー起動・シャットダウン
pub mod server;

/// 型定義
pub mod types;

use std::sync::Arc;

/// アプリケーション状態
///
/// ハンドラーへ渡される明示的なアプリケーションコンテキスト。
#[derive(Clone)]
pub struct AppState {
    /// 商品リポジトリ
    pub products: Arc<dyn db::traits::ProductRepository>,
}

impl AppState {
    /// SQLiteプールを商品リポジトリとして使うAppStateを作成
    pub fn new(db_pool: sqlx::SqlitePool) -> Self {
        Self::with_repository(Arc::new(db_pool))
    }

    /// 任意のリポジトリ実装を注入してAppStateを作成
    pub fn with_repository(products: Arc<dyn db::traits::ProductRepository>) -> Self {
        Self { products }
    }
}

//! Repository traitパターン定義
//!
//! DB操作を抽象化し、ハンドラーへ注入できるようにするためのtrait。
//! 各メソッドは `db::products` のフリー関数に対応する。

use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::common::error::ApiError;
use crate::types::product::{Product, ProductDraft};

// ---------------------------------------------------------------------------
// ProductRepository
// ---------------------------------------------------------------------------

/// 商品CRUD操作のRepository trait
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// 商品を作成
    async fn create_product(&self, draft: &ProductDraft) -> Result<Product, ApiError>;
    /// すべての商品を取得
    async fn list_products(&self) -> Result<Vec<Product>, ApiError>;
    /// IDで商品を取得
    async fn find_product(&self, id: i64) -> Result<Option<Product>, ApiError>;
    /// 商品の全フィールドを上書き
    async fn update_product(&self, id: i64, draft: &ProductDraft) -> Result<Product, ApiError>;
    /// 商品を削除し、削除前の値を返す
    async fn delete_product(&self, id: i64) -> Result<Product, ApiError>;
}

// ===========================================================================
// SqlitePool implementations
// ===========================================================================

#[async_trait]
impl ProductRepository for SqlitePool {
    async fn create_product(&self, draft: &ProductDraft) -> Result<Product, ApiError> {
        super::products::create(self, draft).await
    }

    async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        super::products::list(self).await
    }

    async fn find_product(&self, id: i64) -> Result<Option<Product>, ApiError> {
        super::products::find_by_id(self, id).await
    }

    async fn update_product(&self, id: i64, draft: &ProductDraft) -> Result<Product, ApiError> {
        super::products::update(self, id, draft).await
    }

    async fn delete_product(&self, id: i64) -> Result<Product, ApiError> {
        super::products::delete(self, id).await
    }
}

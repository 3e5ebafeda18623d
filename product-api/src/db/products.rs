//! 商品CRUD操作
//!
//! `products` テーブルへのクエリ。更新と削除は1リクエスト内で完結する
//! トランザクションとして実行する。

use crate::common::error::ApiError;
use crate::types::product::{Product, ProductDraft};
use sqlx::SqlitePool;

const SELECT_COLUMNS: &str = "SELECT id, name, description, price, quantity FROM products";

/// 商品を作成
///
/// # Arguments
/// * `pool` - データベース接続プール
/// * `draft` - 商品フィールド
///
/// # Returns
/// * `Ok(Product)` - 採番済みの商品
/// * `Err(ApiError::Conflict)` - 商品名が既に存在する
/// * `Err(ApiError::Database)` - その他のDBエラー
pub async fn create(pool: &SqlitePool, draft: &ProductDraft) -> Result<Product, ApiError> {
    let result = sqlx::query(
        "INSERT INTO products (name, description, price, quantity) VALUES (?, ?, ?, ?)",
    )
    .bind(&draft.name)
    .bind(&draft.description)
    .bind(draft.price)
    .bind(draft.quantity)
    .execute(pool)
    .await
    .map_err(|e| map_write_error(e, &draft.name, "create"))?;

    Ok(draft.clone().into_product(result.last_insert_rowid()))
}

/// すべての商品を取得（ID昇順）
pub async fn list(pool: &SqlitePool) -> Result<Vec<Product>, ApiError> {
    let rows = sqlx::query_as::<_, ProductRow>(&format!("{} ORDER BY id ASC", SELECT_COLUMNS))
        .fetch_all(pool)
        .await
        .map_err(|e| ApiError::Database(format!("Failed to list products: {}", e)))?;

    Ok(rows.into_iter().map(Product::from).collect())
}

/// IDで商品を検索
///
/// # Returns
/// * `Ok(Some(Product))` - 商品が見つかった
/// * `Ok(None)` - 商品が見つからなかった
/// * `Err(ApiError)` - 検索失敗
pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Product>, ApiError> {
    let row = sqlx::query_as::<_, ProductRow>(&format!("{} WHERE id = ?", SELECT_COLUMNS))
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(|e| ApiError::Database(format!("Failed to find product: {}", e)))?;

    Ok(row.map(Product::from))
}

/// 商品の全フィールドを上書き
///
/// # Returns
/// * `Ok(Product)` - 更新後の商品
/// * `Err(ApiError::ProductNotFound)` - IDが存在しない
/// * `Err(ApiError::Conflict)` - 別の商品と名前が重複する
pub async fn update(pool: &SqlitePool, id: i64, draft: &ProductDraft) -> Result<Product, ApiError> {
    let mut tx = pool
        .begin()
        .await
        .map_err(|e| ApiError::Database(format!("Failed to begin transaction: {}", e)))?;

    let result = sqlx::query(
        "UPDATE products SET name = ?, description = ?, price = ?, quantity = ? WHERE id = ?",
    )
    .bind(&draft.name)
    .bind(&draft.description)
    .bind(draft.price)
    .bind(draft.quantity)
    .bind(id)
    .execute(&mut *tx)
    .await
    .map_err(|e| map_write_error(e, &draft.name, "update"))?;

    // 未コミットのトランザクションはdrop時にロールバックされる
    if result.rows_affected() == 0 {
        return Err(ApiError::ProductNotFound(id));
    }

    tx.commit()
        .await
        .map_err(|e| ApiError::Database(format!("Failed to commit update: {}", e)))?;

    Ok(draft.clone().into_product(id))
}

/// 商品を削除し、削除した商品を返す
///
/// # Returns
/// * `Ok(Product)` - 削除された商品
/// * `Err(ApiError::ProductNotFound)` - IDが存在しない
pub async fn delete(pool: &SqlitePool, id: i64) -> Result<Product, ApiError> {
    let mut tx = pool
        .begin()
        .await
        .map_err(|e| ApiError::Database(format!("Failed to begin transaction: {}", e)))?;

    let row = sqlx::query_as::<_, ProductRow>(&format!("{} WHERE id = ?", SELECT_COLUMNS))
        .bind(id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| ApiError::Database(format!("Failed to find product: {}", e)))?
        .ok_or(ApiError::ProductNotFound(id))?;

    sqlx::query("DELETE FROM products WHERE id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(|e| ApiError::Database(format!("Failed to delete product: {}", e)))?;

    tx.commit()
        .await
        .map_err(|e| ApiError::Database(format!("Failed to commit delete: {}", e)))?;

    Ok(row.into())
}

/// 書き込み系のsqlxエラーを変換する（UNIQUE制約違反はConflict）
fn map_write_error(err: sqlx::Error, name: &str, action: &str) -> ApiError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() {
            return ApiError::Conflict(format!("Product with name '{}' already exists", name));
        }
    }
    ApiError::Database(format!("Failed to {} product: {}", action, err))
}

#[derive(sqlx::FromRow)]
struct ProductRow {
    id: i64,
    name: String,
    description: String,
    price: f64,
    quantity: i64,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Product {
            id: row.id,
            name: row.name,
            description: row.description,
            price: row.price,
            quantity: row.quantity,
        }
    }
}

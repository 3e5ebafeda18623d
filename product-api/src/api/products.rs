//! 商品API
//!
//! `/product` 配下のCRUDハンドラーと、レスポンスのシリアライズ契約（`ProductSchema`）。

use super::error::AppError;
use crate::common::error::ApiError;
use crate::types::product::{Product, ProductDraft};
use crate::AppState;
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

/// 商品作成・更新リクエスト
///
/// 欠落フィールドをまとめて報告するため、すべて`Option`で受ける。
/// `null` は欠落と同じ扱い。
#[derive(Debug, Default, Deserialize)]
pub struct ProductPayload {
    /// 商品名
    #[serde(default)]
    pub name: Option<String>,
    /// 説明
    #[serde(default)]
    pub description: Option<String>,
    /// 価格
    #[serde(default)]
    pub price: Option<f64>,
    /// 在庫数
    #[serde(default)]
    pub quantity: Option<i64>,
}

impl ProductPayload {
    /// 必須フィールドと制約を検証してドラフトに変換する
    pub fn into_draft(self) -> Result<ProductDraft, ApiError> {
        let mut missing = Vec::new();
        if self.name.is_none() {
            missing.push("name");
        }
        if self.description.is_none() {
            missing.push("description");
        }
        if self.price.is_none() {
            missing.push("price");
        }
        if self.quantity.is_none() {
            missing.push("quantity");
        }

        match (self.name, self.description, self.price, self.quantity) {
            (Some(name), Some(description), Some(price), Some(quantity)) => {
                let draft = ProductDraft::new(name, description, price, quantity);
                draft.validate()?;
                Ok(draft)
            }
            _ => Err(ApiError::validation(format!(
                "Missing required field(s): {}",
                missing.join(", ")
            ))),
        }
    }
}

/// 商品レスポンス（シリアライズ契約）
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductSchema {
    /// 商品ID
    pub id: i64,
    /// 商品名
    pub name: String,
    /// 説明
    pub description: String,
    /// 価格
    pub price: f64,
    /// 在庫数
    pub quantity: i64,
}

impl From<Product> for ProductSchema {
    fn from(product: Product) -> Self {
        ProductSchema {
            id: product.id,
            name: product.name,
            description: product.description,
            price: product.price,
            quantity: product.quantity,
        }
    }
}

/// POST /product - 商品作成
///
/// # Returns
/// * `201 Created` - 作成された商品
/// * `400 Bad Request` - フィールド欠落・不正
/// * `409 Conflict` - 商品名重複
pub async fn create_product(
    State(state): State<AppState>,
    payload: Result<Json<ProductPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<ProductSchema>), AppError> {
    let Json(payload) = payload?;
    let draft = payload.into_draft()?;

    let product = state.products.create_product(&draft).await?;
    tracing::info!(product_id = product.id, name = %product.name, "Product created");

    Ok((StatusCode::CREATED, Json(ProductSchema::from(product))))
}

/// GET /product - 商品一覧取得
pub async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProductSchema>>, AppError> {
    let products = state.products.list_products().await?;
    Ok(Json(products.into_iter().map(ProductSchema::from).collect()))
}

/// GET /product/:id - 商品取得
///
/// # Returns
/// * `200 OK` - 商品
/// * `404 Not Found` - 存在しないID
pub async fn get_product(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<ProductSchema>, AppError> {
    let Path(id) = id?;
    let product = state
        .products
        .find_product(id)
        .await?
        .ok_or(ApiError::ProductNotFound(id))?;
    Ok(Json(ProductSchema::from(product)))
}

/// PUT /product/:id - 商品の全フィールド上書き
///
/// # Returns
/// * `200 OK` - 更新後の商品
/// * `400 Bad Request` - フィールド欠落・不正
/// * `404 Not Found` - 存在しないID
/// * `409 Conflict` - 他商品と名前が重複
pub async fn update_product(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<ProductPayload>, JsonRejection>,
) -> Result<Json<ProductSchema>, AppError> {
    let Path(id) = id?;
    let Json(payload) = payload?;
    let draft = payload.into_draft()?;

    let product = state.products.update_product(id, &draft).await?;
    tracing::info!(product_id = id, "Product updated");

    Ok(Json(ProductSchema::from(product)))
}

/// DELETE /product/:id - 商品削除
///
/// 確認用に削除した商品を返す。
pub async fn delete_product(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<ProductSchema>, AppError> {
    let Path(id) = id?;
    let product = state.products.delete_product(id).await?;
    tracing::info!(product_id = id, name = %product.name, "Product deleted");

    Ok(Json(ProductSchema::from(product)))
}

//! 商品型定義

use crate::common::error::CommonError;
use serde::{Deserialize, Serialize};

/// 商品名の最大文字数
pub const MAX_NAME_LEN: usize = 100;

/// 商品説明の最大文字数
pub const MAX_DESCRIPTION_LEN: usize = 200;

/// 永続化済みの商品
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// 一意識別子（自動採番、作成後は不変）
    pub id: i64,
    /// 商品名（一意）
    pub name: String,
    /// 説明
    pub description: String,
    /// 価格
    pub price: f64,
    /// 在庫数
    pub quantity: i64,
}

/// 作成・全体更新に使う商品フィールド一式
///
/// IDを持たない。作成時はストレージ側で採番され、更新時はパスのIDが使われる。
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    /// 商品名
    pub name: String,
    /// 説明
    pub description: String,
    /// 価格
    pub price: f64,
    /// 在庫数
    pub quantity: i64,
}

impl ProductDraft {
    /// 新しいドラフトを作成
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        quantity: i64,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            price,
            quantity,
        }
    }

    /// フィールド制約を検証する
    ///
    /// SQLiteは `VARCHAR(n)` の長さを強制しないため、ここで文字数を確認する。
    pub fn validate(&self) -> Result<(), CommonError> {
        let name_len = self.name.chars().count();
        if name_len > MAX_NAME_LEN {
            return Err(CommonError::Validation(format!(
                "name must be at most {} characters (got {})",
                MAX_NAME_LEN, name_len
            )));
        }

        let description_len = self.description.chars().count();
        if description_len > MAX_DESCRIPTION_LEN {
            return Err(CommonError::Validation(format!(
                "description must be at most {} characters (got {})",
                MAX_DESCRIPTION_LEN, description_len
            )));
        }

        if !self.price.is_finite() {
            return Err(CommonError::Validation(
                "price must be a finite number".to_string(),
            ));
        }

        Ok(())
    }

    /// 採番済みIDと組み合わせて商品を構築
    pub fn into_product(self, id: i64) -> Product {
        Product {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
            quantity: self.quantity,
        }
    }
}

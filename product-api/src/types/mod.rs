//! 型定義モジュール
//!
//! ドメインエンティティの型定義を提供

/// 商品関連の型定義
pub mod product;

pub use product::{Product, ProductDraft};

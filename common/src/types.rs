//! 注文クライアントの型定義
//!
//! 状態管理とWeb(WASM)で共有される型:
//! - MenuItem: メニュー商品（読み取り専用）
//! - CartLine: カート内の1行（商品 + 数量）
//! - OrderState: 注文フラグ（注文済み・注文合計・支払済み）
//! - TableSession: テーブルとセッショントークン

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// メニュー商品ID
pub type ItemId = u32;

/// メニュー商品
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: ItemId,
    pub name: String,
    /// 単価
    pub price: f64,
    /// 画像パス
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub description: String,
}

impl MenuItem {
    pub fn in_category(&self, label: &str) -> bool {
        self.categories.iter().any(|c| c == label)
    }
}

/// カート行
///
/// 数量は常に1以上。同じ商品IDの行は1つだけ。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub item: MenuItem,
    pub quantity: u32,
}

impl CartLine {
    pub fn new(item: MenuItem) -> Self {
        Self { item, quantity: 1 }
    }

    pub fn id(&self) -> ItemId {
        self.item.id
    }

    /// 小計（単価 × 数量）
    pub fn subtotal(&self) -> f64 {
        crate::money::line_total(self.item.price, self.quantity)
    }
}

/// 注文フラグ
///
/// `order_total` は `has_ordered` が true の間だけ意味を持つ。
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderState {
    pub has_ordered: bool,
    pub order_total: f64,
    pub is_paid: bool,
}

impl OrderState {
    /// 注文済みかつ未払い
    pub fn is_outstanding(&self) -> bool {
        self.has_ordered && !self.is_paid
    }
}

/// テーブルセッション
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableSession {
    pub table_id: String,
    pub business_id: String,
    pub session_token: String,
    pub started_at: DateTime<Utc>,
}

impl TableSession {
    /// テーブルIDとトークンが揃っているか
    pub fn is_complete(&self) -> bool {
        !self.table_id.is_empty() && !self.session_token.is_empty()
    }
}

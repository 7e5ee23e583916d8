//! 支払い金額の算出
//!
//! 注文済み・未払いなら確定済みの注文合計が請求額。その後カートに
//! 追加した商品は「未注文」として別表示にし、請求額には含めない。
//! それ以外はカートの合計が請求額。

use crate::cart::CartState;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaymentSummary {
    /// 請求額
    pub amount_due: f64,
    /// 確定済み注文の合計（未注文なら0）
    pub ordered_total: f64,
    /// 未注文の追加分
    pub new_items_total: f64,
    pub new_items_count: u32,
    /// 支払いリクエストを送れるか
    pub can_request: bool,
}

impl PaymentSummary {
    pub fn from_cart(cart: &CartState) -> Self {
        let order = cart.order_state();
        let live_total = cart.total();

        if order.is_outstanding() {
            Self {
                amount_due: order.order_total,
                ordered_total: order.order_total,
                new_items_total: live_total,
                new_items_count: cart.item_count(),
                can_request: true,
            }
        } else {
            Self {
                amount_due: live_total,
                ordered_total: 0.0,
                new_items_total: 0.0,
                new_items_count: 0,
                can_request: false,
            }
        }
    }

    pub fn has_new_items(&self) -> bool {
        self.new_items_count > 0
    }
}

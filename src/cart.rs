//! カート・注文状態
//!
//! カート行と注文フラグを1つの状態として持つリデューサ。
//! 状態遷移は純粋で、ストレージには触らない。呼び出し側は
//! `Applied::order_changed()` を見て `order_status::persist_order_state` を呼ぶ。

use table_order_common::{money, CartLine, ItemId, MenuItem, OrderState};

/// カート操作
#[derive(Debug, Clone, PartialEq)]
pub enum CartAction {
    AddItem(MenuItem),
    RemoveItem(ItemId),
    SetQuantity { id: ItemId, quantity: u32 },
    Clear,
    PlaceOrder,
    MarkPaid,
    ResetOrderStatus,
}

impl CartAction {
    pub fn kind(&self) -> &'static str {
        match self {
            CartAction::AddItem(_) => "add_item",
            CartAction::RemoveItem(_) => "remove_item",
            CartAction::SetQuantity { .. } => "set_quantity",
            CartAction::Clear => "clear",
            CartAction::PlaceOrder => "place_order",
            CartAction::MarkPaid => "mark_paid",
            CartAction::ResetOrderStatus => "reset_order_status",
        }
    }
}

/// 操作の結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    /// 受け付けなかった（数量0、存在しない行など）
    Ignored,
    /// カート行だけが変わった
    CartChanged,
    /// 注文フラグが変わった（保存が必要）
    OrderChanged,
}

impl Applied {
    pub fn is_accepted(&self) -> bool {
        !matches!(self, Applied::Ignored)
    }

    pub fn order_changed(&self) -> bool {
        matches!(self, Applied::OrderChanged)
    }
}

/// 確定した注文の控え
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedOrder {
    pub order_number: u32,
    pub lines: Vec<CartLine>,
    /// この注文分の合計
    pub total: f64,
    /// 未払い分を含めた累計
    pub outstanding_total: f64,
}

#[derive(Debug, Clone)]
pub struct CartState {
    lines: Vec<CartLine>,
    order: OrderState,
    last_order: Option<PlacedOrder>,
    next_order_number: u32,
}

impl Default for CartState {
    fn default() -> Self {
        Self::with_order_state(OrderState::default())
    }
}

impl CartState {
    pub fn new() -> Self {
        Self::default()
    }

    /// ストレージから復元した注文フラグで開始
    pub fn with_order_state(order: OrderState) -> Self {
        Self {
            lines: Vec::new(),
            order,
            last_order: None,
            next_order_number: 1,
        }
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn order_state(&self) -> OrderState {
        self.order
    }

    pub fn last_order(&self) -> Option<&PlacedOrder> {
        self.last_order.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// 数量の合計（バッジ表示用）
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    pub fn quantity_of(&self, id: ItemId) -> u32 {
        self.lines
            .iter()
            .find(|line| line.id() == id)
            .map(|line| line.quantity)
            .unwrap_or(0)
    }

    /// 単価 × 数量の合計
    pub fn total(&self) -> f64 {
        money::sum_lines(&self.lines)
    }

    pub fn apply(&mut self, action: CartAction) -> Applied {
        let kind = action.kind();
        let applied = self.reduce(action);
        if applied.is_accepted() {
            log::debug!("cart action: {} -> {:?}", kind, applied);
        } else {
            log::debug!("cart action ignored: {}", kind);
        }
        applied
    }

    fn reduce(&mut self, action: CartAction) -> Applied {
        match action {
            CartAction::AddItem(item) => self.add(item),
            CartAction::RemoveItem(id) => self.remove(id),
            CartAction::SetQuantity { id, quantity } => self.update_quantity(id, quantity),
            CartAction::Clear => {
                if self.lines.is_empty() {
                    return Applied::Ignored;
                }
                self.lines.clear();
                Applied::CartChanged
            }
            CartAction::PlaceOrder => {
                self.place();
                Applied::OrderChanged
            }
            CartAction::MarkPaid => {
                self.order = OrderState {
                    has_ordered: false,
                    order_total: 0.0,
                    is_paid: true,
                };
                self.lines.clear();
                log::info!("支払い完了");
                Applied::OrderChanged
            }
            CartAction::ResetOrderStatus => {
                self.order = OrderState::default();
                Applied::OrderChanged
            }
        }
    }

    pub fn add_item(&mut self, item: MenuItem) -> Applied {
        self.apply(CartAction::AddItem(item))
    }

    pub fn remove_item(&mut self, id: ItemId) -> Applied {
        self.apply(CartAction::RemoveItem(id))
    }

    pub fn set_quantity(&mut self, id: ItemId, quantity: u32) -> Applied {
        self.apply(CartAction::SetQuantity { id, quantity })
    }

    pub fn clear(&mut self) -> Applied {
        self.apply(CartAction::Clear)
    }

    /// カートを注文として確定し、控えを返す
    pub fn place_order(&mut self) -> PlacedOrder {
        self.apply(CartAction::PlaceOrder);
        // place() は必ず last_order を設定する
        self.last_order.clone().unwrap_or_else(|| PlacedOrder {
            order_number: 0,
            lines: Vec::new(),
            total: 0.0,
            outstanding_total: self.order.order_total,
        })
    }

    pub fn mark_paid(&mut self) -> Applied {
        self.apply(CartAction::MarkPaid)
    }

    pub fn reset_order_status(&mut self) -> Applied {
        self.apply(CartAction::ResetOrderStatus)
    }

    fn add(&mut self, item: MenuItem) -> Applied {
        match self.lines.iter_mut().find(|line| line.id() == item.id) {
            Some(line) => line.quantity += 1,
            None => self.lines.push(CartLine::new(item)),
        }

        // 支払い後の追加は新しい注文サイクル
        if self.order.is_paid {
            self.order.is_paid = false;
            return Applied::OrderChanged;
        }
        Applied::CartChanged
    }

    fn remove(&mut self, id: ItemId) -> Applied {
        let before = self.lines.len();
        self.lines.retain(|line| line.id() != id);
        if self.lines.len() == before {
            Applied::Ignored
        } else {
            Applied::CartChanged
        }
    }

    fn update_quantity(&mut self, id: ItemId, quantity: u32) -> Applied {
        if quantity < 1 {
            return Applied::Ignored;
        }
        match self.lines.iter_mut().find(|line| line.id() == id) {
            Some(line) if line.quantity != quantity => {
                line.quantity = quantity;
                Applied::CartChanged
            }
            _ => Applied::Ignored,
        }
    }

    fn place(&mut self) {
        let total = self.total();
        let previous = if self.order.is_outstanding() {
            self.order.order_total
        } else {
            0.0
        };
        let outstanding_total = money::add(previous, total);

        self.order = OrderState {
            has_ordered: true,
            order_total: outstanding_total,
            is_paid: false,
        };

        let order_number = self.next_order_number;
        self.next_order_number += 1;
        self.last_order = Some(PlacedOrder {
            order_number,
            lines: std::mem::take(&mut self.lines),
            total,
            outstanding_total,
        });

        log::info!(
            "注文確定 #{}: 今回 {} / 累計 {}",
            order_number,
            total,
            outstanding_total
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use table_order_common::find;

    fn pizza() -> MenuItem {
        find(1).cloned().expect("Margherita Pizza")
    }

    fn cola() -> MenuItem {
        find(5).cloned().expect("Cola")
    }

    #[test]
    fn test_add_item_inserts_then_increments() {
        let mut cart = CartState::new();
        assert_eq!(cart.add_item(cola()), Applied::CartChanged);
        assert_eq!(cart.add_item(cola()), Applied::CartChanged);

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.quantity_of(5), 2);
        assert_eq!(cart.item_count(), 2);
    }

    #[test]
    fn test_add_item_after_payment_clears_paid_flag() {
        let mut cart = CartState::new();
        cart.add_item(pizza());
        cart.place_order();
        cart.mark_paid();
        assert!(cart.order_state().is_paid);

        assert_eq!(cart.add_item(cola()), Applied::OrderChanged);
        assert!(!cart.order_state().is_paid);
    }

    #[test]
    fn test_remove_item() {
        let mut cart = CartState::new();
        cart.add_item(pizza());
        cart.add_item(cola());

        assert_eq!(cart.remove_item(1), Applied::CartChanged);
        assert_eq!(cart.lines().len(), 1);
        // 存在しないIDは何もしない
        assert_eq!(cart.remove_item(1), Applied::Ignored);
        assert_eq!(cart.lines().len(), 1);
    }

    #[test]
    fn test_set_quantity_floor() {
        let mut cart = CartState::new();
        cart.add_item(cola());

        assert_eq!(cart.set_quantity(5, 0), Applied::Ignored);
        assert_eq!(cart.quantity_of(5), 1);

        assert_eq!(cart.set_quantity(5, 4), Applied::CartChanged);
        assert_eq!(cart.quantity_of(5), 4);

        assert_eq!(cart.set_quantity(99, 3), Applied::Ignored);
    }

    #[test]
    fn test_clear() {
        let mut cart = CartState::new();
        assert_eq!(cart.clear(), Applied::Ignored);
        cart.add_item(pizza());
        assert_eq!(cart.clear(), Applied::CartChanged);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_total() {
        let mut cart = CartState::new();
        cart.add_item(pizza());
        cart.add_item(cola());
        cart.add_item(cola());
        assert_eq!(cart.total(), 120.0);
    }

    #[test]
    fn test_place_order_receipt() {
        let mut cart = CartState::new();
        cart.add_item(pizza());
        cart.add_item(cola());

        let receipt = cart.place_order();
        assert_eq!(receipt.order_number, 1);
        assert_eq!(receipt.lines.len(), 2);
        assert_eq!(receipt.total, 100.0);
        assert_eq!(receipt.outstanding_total, 100.0);
        assert!(cart.is_empty());

        cart.add_item(cola());
        let receipt = cart.place_order();
        assert_eq!(receipt.order_number, 2);
        assert_eq!(receipt.total, 20.0);
        assert_eq!(receipt.outstanding_total, 120.0);
    }

    #[test]
    fn test_place_order_after_payment_starts_fresh() {
        let mut cart = CartState::with_order_state(OrderState {
            has_ordered: false,
            order_total: 0.0,
            is_paid: true,
        });
        cart.add_item(pizza());
        cart.place_order();
        assert_eq!(cart.order_state().order_total, 80.0);
    }

    #[test]
    fn test_place_order_empty_cart_accumulates_zero() {
        let mut cart = CartState::new();
        cart.add_item(pizza());
        cart.place_order();
        cart.place_order();

        let order = cart.order_state();
        assert!(order.has_ordered);
        assert_eq!(order.order_total, 80.0);
    }

    #[test]
    fn test_mark_paid() {
        let mut cart = CartState::new();
        cart.add_item(pizza());
        cart.place_order();
        cart.add_item(cola());

        assert_eq!(cart.mark_paid(), Applied::OrderChanged);
        assert_eq!(
            cart.order_state(),
            OrderState { has_ordered: false, order_total: 0.0, is_paid: true }
        );
        assert!(cart.is_empty());
    }

    #[test]
    fn test_reset_order_status_keeps_cart() {
        let mut cart = CartState::new();
        cart.add_item(pizza());
        cart.place_order();
        cart.add_item(cola());

        assert_eq!(cart.reset_order_status(), Applied::OrderChanged);
        assert_eq!(cart.order_state(), OrderState::default());
        assert_eq!(cart.quantity_of(5), 1);
    }

    #[test]
    fn test_set_quantity_through_apply_and_method_agree() {
        let mut by_method = CartState::new();
        let mut by_action = CartState::new();
        by_method.add_item(cola());
        by_action.apply(CartAction::AddItem(cola()));

        assert_eq!(by_method.set_quantity(5, 3), Applied::CartChanged);
        assert_eq!(
            by_action.apply(CartAction::SetQuantity { id: 5, quantity: 3 }),
            Applied::CartChanged
        );
        assert_eq!(by_method.quantity_of(5), by_action.quantity_of(5));
        // 同じ数量の再設定は受け付けない
        assert_eq!(by_method.set_quantity(5, 3), Applied::Ignored);
    }

    #[test]
    fn test_action_kind() {
        assert_eq!(CartAction::SetQuantity { id: 1, quantity: 2 }.kind(), "set_quantity");
        assert_eq!(CartAction::MarkPaid.kind(), "mark_paid");
    }

    #[test]
    fn test_applied_flags() {
        assert!(!Applied::Ignored.is_accepted());
        assert!(Applied::CartChanged.is_accepted());
        assert!(!Applied::CartChanged.order_changed());
        assert!(Applied::OrderChanged.order_changed());
    }
}

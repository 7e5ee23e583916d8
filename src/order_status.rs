//! 注文フラグの永続化
//!
//! `hasOrdered` / `orderTotal` / `isPaid` を文字列でストレージに保存し、
//! 起動時に復元する。

use crate::cart::{Applied, CartAction, CartState};
use crate::error::Result;
use crate::storage::{keys, KeyValueStore};
use table_order_common::{is_representable, OrderState};

/// ストレージから注文フラグを復元（なければ false / 0 / false）
///
/// 合計が数値でない・負・Decimal の範囲外なら 0 として扱う。
pub fn load_order_state(store: &dyn KeyValueStore) -> OrderState {
    OrderState {
        has_ordered: read_bool(store, keys::HAS_ORDERED),
        order_total: read_amount(store, keys::ORDER_TOTAL),
        is_paid: read_bool(store, keys::IS_PAID),
    }
}

pub fn save_order_state(store: &mut dyn KeyValueStore, state: &OrderState) -> Result<()> {
    store.set(keys::HAS_ORDERED, bool_str(state.has_ordered))?;
    store.set(keys::ORDER_TOTAL, &state.order_total.to_string())?;
    store.set(keys::IS_PAID, bool_str(state.is_paid))?;
    Ok(())
}

/// 状態遷移後の保存ステップ
///
/// 失敗してもメモリ上の状態はそのまま使う。
pub fn persist_order_state(store: &mut dyn KeyValueStore, state: &OrderState) {
    if let Err(e) = save_order_state(store, state) {
        log::warn!("注文フラグの保存に失敗: {}", e);
    }
}

/// カート操作を適用し、注文フラグが変わったときだけ保存
pub fn apply_and_persist(
    cart: &mut CartState,
    store: &mut dyn KeyValueStore,
    action: CartAction,
) -> Applied {
    let applied = cart.apply(action);
    if applied.order_changed() {
        persist_order_state(store, &cart.order_state());
    }
    applied
}

fn bool_str(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

fn read_bool(store: &dyn KeyValueStore, key: &str) -> bool {
    store.get(key).as_deref() == Some("true")
}

fn read_amount(store: &dyn KeyValueStore, key: &str) -> f64 {
    store
        .get(key)
        .and_then(|raw| raw.trim().parse::<f64>().ok())
        .filter(|value| *value >= 0.0 && is_representable(*value))
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_load_defaults_when_absent() {
        let store = MemoryStore::new();
        assert_eq!(load_order_state(&store), OrderState::default());
    }

    #[test]
    fn test_save_writes_string_values() {
        let mut store = MemoryStore::new();
        let state = OrderState { has_ordered: true, order_total: 120.0, is_paid: false };
        save_order_state(&mut store, &state).unwrap();

        assert_eq!(store.get(keys::HAS_ORDERED).as_deref(), Some("true"));
        assert_eq!(store.get(keys::ORDER_TOTAL).as_deref(), Some("120"));
        assert_eq!(store.get(keys::IS_PAID).as_deref(), Some("false"));
        assert_eq!(load_order_state(&store), state);
    }

    #[test]
    fn test_load_fractional_total() {
        let store = MemoryStore::new()
            .with_entry(keys::HAS_ORDERED, "true")
            .with_entry(keys::ORDER_TOTAL, "12.5");
        let state = load_order_state(&store);
        assert!(state.has_ordered);
        assert_eq!(state.order_total, 12.5);
        assert!(!state.is_paid);
    }

    #[test]
    fn test_load_garbage_values() {
        let store = MemoryStore::new()
            .with_entry(keys::HAS_ORDERED, "yes")
            .with_entry(keys::ORDER_TOTAL, "abc")
            .with_entry(keys::IS_PAID, "TRUE");
        assert_eq!(load_order_state(&store), OrderState::default());

        let store = MemoryStore::new().with_entry(keys::ORDER_TOTAL, "NaN");
        assert_eq!(load_order_state(&store).order_total, 0.0);
    }

    #[test]
    fn test_load_total_out_of_decimal_range() {
        let store = MemoryStore::new()
            .with_entry(keys::HAS_ORDERED, "true")
            .with_entry(keys::ORDER_TOTAL, "1e29");
        let state = load_order_state(&store);
        assert!(state.has_ordered);
        assert_eq!(state.order_total, 0.0);

        // 復元した合計に次の注文が加算される
        let mut cart = CartState::with_order_state(state);
        let cola = table_order_common::find(5).cloned().unwrap();
        cart.add_item(cola);
        cart.place_order();
        assert_eq!(cart.order_state().order_total, 20.0);
    }
}

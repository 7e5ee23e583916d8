//! カート画面

use gloo::timers::callback::Timeout;
use leptos::prelude::*;
use table_order::CartAction;
use table_order_common::CartLine;
use crate::app::{AppState, View};

#[component]
pub fn CartPage(state: AppState) -> impl IntoView {
    let (is_placing, set_is_placing) = signal(false);
    // 画面を離れたら擬似待ちタイマーも破棄
    let pending = StoredValue::new_local(None::<Timeout>);
    on_cleanup(move || {
        pending.try_update_value(|t| t.take());
    });

    let lines = move || state.cart.with(|c| c.lines().to_vec());
    let is_empty = move || state.cart.with(|c| c.is_empty());
    let total = move || state.price(state.cart.with(|c| c.total()));
    let order = move || state.cart.with(|c| c.order_state());

    let on_place_order = move |_| {
        if is_placing.get_untracked() || state.cart.with_untracked(|c| c.is_empty()) {
            return;
        }
        set_is_placing.set(true);
        let delay = state.config.with_value(|c| c.order_delay_ms);
        let timeout = Timeout::new(delay, move || {
            state.place_order();
            set_is_placing.set(false);
            state.navigate(View::Confirmation);
        });
        pending.set_value(Some(timeout));
    };

    view! {
        <section class="cart">
            <Show
                when=move || !is_empty()
                fallback=move || view! {
                    <p class="text-muted">"カートは空です"</p>
                    <button class="btn btn-secondary" on:click=move |_| state.navigate(View::Menu)>
                        "メニューを見る"
                    </button>
                }
            >
                <ul class="cart-lines">
                    <For
                        each=lines
                        key=|line| (line.id(), line.quantity)
                        children=move |line| view! { <CartLineRow line=line state=state /> }
                    />
                </ul>
            </Show>

            <Show when=move || order().is_outstanding()>
                <p class="notice">
                    {move || format!("注文済み: {}（お会計時に合算されます）", state.price(order().order_total))}
                </p>
            </Show>

            <div class="cart-summary">
                <span>"合計"</span>
                <span class="price">{total}</span>
            </div>

            <button
                class="btn btn-primary"
                disabled=move || is_empty() || is_placing.get()
                on:click=on_place_order
            >
                {move || if is_placing.get() { "注文中..." } else { "注文する" }}
            </button>
        </section>
    }
}

#[component]
fn CartLineRow(line: CartLine, state: AppState) -> impl IntoView {
    let id = line.id();
    let quantity = line.quantity;
    let subtotal = state.price(line.subtotal());

    view! {
        <li class="cart-line">
            <span class="name">{line.item.name.clone()}</span>
            <div class="quantity">
                <button
                    class="btn btn-small"
                    disabled=quantity <= 1
                    on:click=move |_| {
                        let quantity = quantity.saturating_sub(1);
                        state.dispatch(CartAction::SetQuantity { id, quantity });
                    }
                >
                    "−"
                </button>
                <span>{quantity}</span>
                <button
                    class="btn btn-small"
                    on:click=move |_| {
                        state.dispatch(CartAction::SetQuantity { id, quantity: quantity + 1 });
                    }
                >
                    "+"
                </button>
            </div>
            <span class="price">{subtotal}</span>
            <button
                class="btn btn-tertiary btn-small"
                on:click=move |_| {
                    state.dispatch(CartAction::RemoveItem(id));
                }
            >
                "削除"
            </button>
        </li>
    }
}

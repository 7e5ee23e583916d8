//! お会計画面

use leptos::prelude::*;
use table_order::{CartAction, PaymentSummary};
use crate::app::{AppState, View};

#[component]
pub fn PaymentPage(state: AppState) -> impl IntoView {
    let summary = Memo::new(move |_| state.cart.with(PaymentSummary::from_cart));
    let is_paid = move || state.cart.with(|c| c.order_state().is_paid);

    let on_request = move |_| {
        if summary.get_untracked().can_request {
            state.dispatch(CartAction::MarkPaid);
        }
    };

    view! {
        <section class="payment">
            <Show
                when=move || !is_paid()
                fallback=move || view! {
                    <h2>"お支払いが完了しました"</h2>
                    <p>"ありがとうございました。"</p>
                    <button class="btn btn-secondary" on:click=move |_| state.navigate(View::Menu)>
                        "メニューに戻る"
                    </button>
                }
            >
                <div class="payment-summary">
                    <span>"ご請求額"</span>
                    <span class="price">{move || state.price(summary.get().amount_due)}</span>
                </div>

                <Show when=move || summary.get().has_new_items()>
                    <p class="notice">
                        {move || {
                            let s = summary.get();
                            format!(
                                "未注文の商品 {}点（{}）はご請求額に含まれていません",
                                s.new_items_count,
                                state.price(s.new_items_total)
                            )
                        }}
                    </p>
                </Show>

                <button
                    class="btn btn-primary"
                    disabled=move || !summary.get().can_request
                    on:click=on_request
                >
                    "お会計をお願いする"
                </button>
                <Show when=move || !summary.get().can_request>
                    <p class="text-muted">"注文が確定するとお会計をリクエストできます"</p>
                </Show>
            </Show>
        </section>
    }
}

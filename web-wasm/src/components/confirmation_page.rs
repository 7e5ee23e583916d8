//! 注文完了画面

use leptos::prelude::*;
use crate::app::{AppState, View};

#[component]
pub fn ConfirmationPage(state: AppState) -> impl IntoView {
    let receipt = move || state.cart.with(|c| c.last_order().cloned());

    view! {
        <section class="confirmation">
            {move || match receipt() {
                Some(order) => view! {
                    <h2>{format!("ご注文 #{} を受け付けました", order.order_number)}</h2>
                    <ul class="receipt-lines">
                        {order.lines
                            .iter()
                            .map(|line| view! {
                                <li>
                                    <span>{format!("{} × {}", line.item.name, line.quantity)}</span>
                                    <span class="price">{state.price(line.subtotal())}</span>
                                </li>
                            })
                            .collect_view()}
                    </ul>
                    <p class="receipt-total">{format!("今回のご注文: {}", state.price(order.total))}</p>
                    <p class="receipt-total">{format!("お会計予定額: {}", state.price(order.outstanding_total))}</p>
                }.into_any(),
                None => view! {
                    <p class="text-muted">"このセッションで確定した注文はありません"</p>
                }.into_any(),
            }}

            <div class="actions">
                <button class="btn btn-primary" on:click=move |_| state.navigate(View::Tracking)>
                    "注文状況を見る"
                </button>
                <button class="btn btn-secondary" on:click=move |_| state.navigate(View::Menu)>
                    "追加で注文する"
                </button>
            </div>
        </section>
    }
}

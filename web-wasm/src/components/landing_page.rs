//! トップ画面（セッション終了後）

use leptos::prelude::*;
use crate::app::{AppState, View};

#[component]
pub fn LandingPage(state: AppState) -> impl IntoView {
    let has_unpaid = move || state.cart.with(|c| c.order_state().is_outstanding());

    let on_start = move |_| {
        state.start_session();
        state.navigate(View::Menu);
    };

    view! {
        <section class="landing">
            <h2>"ご来店ありがとうございます"</h2>
            <p>"テーブルのQRコードを読み取って注文を始めてください。"</p>
            <Show when=has_unpaid>
                <p class="notice">"未払いの注文があります。お会計をお忘れなく。"</p>
            </Show>
            <button class="btn btn-primary" on:click=on_start>
                "注文を始める"
            </button>
        </section>
    }
}

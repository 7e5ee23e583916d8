//! ヘッダーコンポーネント

use leptos::prelude::*;
use crate::app::{AppState, View};

#[component]
pub fn Header(state: AppState) -> impl IntoView {
    let table_label = move || {
        state.session.with(|s| {
            s.session()
                .map(|session| format!("テーブル {}", session.table_id))
                .unwrap_or_default()
        })
    };
    let item_count = move || state.cart.with(|c| c.item_count());

    let nav_button = move |view: View| {
        view! {
            <button
                class="nav-link"
                class:active=move || state.view.get() == view
                on:click=move |_| state.navigate(view)
            >
                {view.title()}
                {(view == View::Cart).then(|| view! {
                    <span class="badge">{item_count}</span>
                })}
            </button>
        }
    };

    view! {
        <header class="header">
            <h1>"Table Order"</h1>
            <Show when=move || state.is_active()>
                <span class="table-label">{table_label}</span>
                <nav class="nav">
                    {nav_button(View::Menu)}
                    {nav_button(View::Cart)}
                    {nav_button(View::Tracking)}
                    {nav_button(View::Payment)}
                </nav>
                <button class="btn btn-tertiary btn-small" on:click=move |_| state.end_session()>
                    "セッション終了"
                </button>
            </Show>
        </header>
    }
}

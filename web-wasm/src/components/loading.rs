use leptos::prelude::*;

#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="loading">
            <div class="spinner" />
            <p class="text-muted">"読み込み中..."</p>
        </div>
    }
}

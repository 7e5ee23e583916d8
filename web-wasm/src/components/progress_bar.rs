//! プログレスバーコンポーネント

use leptos::prelude::*;

#[component]
pub fn ProgressBar(progress: f32, label: &'static str) -> impl IntoView {
    view! {
        <div class="progress-container">
            <div class="progress-bar">
                <div
                    class="progress-fill"
                    style=format!("width: {:.0}%", progress * 100.0)
                />
            </div>
            <p class="progress-text">{label}</p>
        </div>
    }
}

//! 注文状況画面（モック）

use gloo::timers::callback::Timeout;
use leptos::prelude::*;
use table_order::{tracking_entries, TrackingEntry};
use crate::app::{AppState, View};
use crate::components::{loading::Loading, progress_bar::ProgressBar};

#[component]
pub fn TrackingPage(state: AppState) -> impl IntoView {
    let (entries, set_entries) = signal(None::<Vec<TrackingEntry>>);

    // 取得待ちを擬似的に再現
    let delay = state.config.with_value(|c| c.tracking_delay_ms);
    let pending = StoredValue::new_local(Some(Timeout::new(delay, move || {
        let list = state.cart.with_untracked(|c| tracking_entries(c.last_order()));
        set_entries.set(Some(list));
    })));
    on_cleanup(move || {
        pending.try_update_value(|t| t.take());
    });

    view! {
        <section class="tracking">
            {move || match entries.get() {
                None => view! { <Loading /> }.into_any(),
                Some(list) => view! {
                    <ul class="tracking-list">
                        {list
                            .into_iter()
                            .map(|entry| view! {
                                <li class=format!("tracking-entry status-{}", entry.status.as_str())>
                                    <div class="tracking-head">
                                        <span>{format!("{} × {}", entry.name, entry.quantity)}</span>
                                        <span class="eta">
                                            {match entry.eta_minutes() {
                                                0 => String::new(),
                                                m => format!("約{}分", m),
                                            }}
                                        </span>
                                    </div>
                                    <ProgressBar progress=entry.status.progress() label=entry.status.label() />
                                </li>
                            })
                            .collect_view()}
                    </ul>
                }.into_any(),
            }}

            <button class="btn btn-secondary" on:click=move |_| state.navigate(View::Payment)>
                "お会計へ"
            </button>
        </section>
    }
}

//! メニュー画面

use leptos::prelude::*;
use table_order::CartAction;
use table_order_common::{catalog, categories, filter_by_category, MenuItem};
use crate::app::AppState;

#[component]
pub fn MenuPage(state: AppState) -> impl IntoView {
    // None はすべて表示
    let (category, set_category) = signal(None::<&'static str>);

    let items = move || -> Vec<MenuItem> {
        match category.get() {
            Some(label) => filter_by_category(label).into_iter().cloned().collect(),
            None => catalog().to_vec(),
        }
    };

    view! {
        <section class="menu">
            <div class="category-tabs">
                <button
                    class="tab"
                    class:active=move || category.get().is_none()
                    on:click=move |_| set_category.set(None)
                >
                    "すべて"
                </button>
                {categories()
                    .into_iter()
                    .map(|label| view! {
                        <button
                            class="tab"
                            class:active=move || category.get() == Some(label)
                            on:click=move |_| set_category.set(Some(label))
                        >
                            {label}
                        </button>
                    })
                    .collect_view()}
            </div>

            <div class="menu-grid">
                <For
                    each=items
                    key=|item| item.id
                    children=move |item| view! { <MenuCard item=item state=state /> }
                />
            </div>
        </section>
    }
}

#[component]
fn MenuCard(item: MenuItem, state: AppState) -> impl IntoView {
    let id = item.id;
    let in_cart = move || state.cart.with(|c| c.quantity_of(id));
    let price = state.price(item.price);

    let on_add = {
        let item = item.clone();
        move |_| {
            state.dispatch(CartAction::AddItem(item.clone()));
        }
    };

    view! {
        <div class="menu-card">
            <img class="menu-image" src=item.image.clone() alt=item.name.clone() />
            <div class="menu-body">
                <h3>{item.name.clone()}</h3>
                <p class="description">{item.description.clone()}</p>
                <div class="tags">
                    {item.categories
                        .iter()
                        .map(|c| view! { <span class="tag">{c.clone()}</span> })
                        .collect_view()}
                </div>
                <div class="menu-footer">
                    <span class="price">{price}</span>
                    <button class="btn btn-primary btn-small" on:click=on_add>
                        "追加"
                        <Show when=move || { in_cart() > 0 }>
                            <span class="badge">{in_cart}</span>
                        </Show>
                    </button>
                </div>
            </div>
        </div>
    }
}

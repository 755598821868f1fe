//! Category Tab Bar Component
//!
//! One tab per catalog category, in priority order. Clicking a tab sets
//! the store's active category; the category view reacts from there.

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn TabBar() -> impl IntoView {
    let store = use_app_store();

    // The catalog is immutable after startup; compute the tab list once
    let catalog = store.catalog().get_untracked();
    let tabs: Vec<(String, String)> = catalog
        .ordered()
        .into_iter()
        .map(|c| (c.key.clone(), c.title.clone()))
        .collect();

    view! {
        <nav class="tabs">
            <For
                each=move || tabs.clone()
                key=|(key, _)| key.clone()
                children=move |(key, title)| {
                    let tab_key = key.clone();
                    let is_active = move || store.active_category().get() == tab_key;
                    let tab_class = move || {
                        if is_active() { "tab-btn active" } else { "tab-btn" }
                    };

                    view! {
                        <button
                            class=tab_class
                            on:click=move |_| store.active_category().set(key.clone())
                        >
                            {title}
                        </button>
                    }
                }
            />
        </nav>
    }
}

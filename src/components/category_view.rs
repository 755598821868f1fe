//! Category View Component
//!
//! Renders the active category's cards and runs the two-phase swap when
//! the selection changes: fade out, replace content after a fixed delay,
//! fade back in. Every swap rebuilds all cards from scratch, so counter
//! state never survives a category change.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::components::DhikrCard;
use crate::store::{use_app_store, AppStateStoreFields};

/// Fixed delay of the content swap, matching the CSS fade duration
const FADE_MS: u32 = 200;

#[component]
pub fn CategoryView() -> impl IntoView {
    let store = use_app_store();

    // `shown` trails the store's active category by one fade delay
    let (shown, set_shown) = signal(store.active_category().get_untracked());
    let (visible, set_visible) = signal(true);
    let (swap_gen, set_swap_gen) = signal(0u32);

    Effect::new(move |_| {
        let key = store.active_category().get();
        if key == shown.get_untracked() {
            return;
        }
        set_visible.set(false);
        Timeout::new(FADE_MS, move || {
            set_shown.set(key);
            set_swap_gen.update(|g| *g += 1);
            set_visible.set(true);
        })
        .forget();
    });

    let items = move || {
        let catalog = store.catalog().get_untracked();
        catalog
            .get(&shown.get())
            .map(|c| c.items.clone())
            .unwrap_or_default()
    };

    let container_class = move || {
        if visible.get() {
            "adhkar-container"
        } else {
            "adhkar-container fading"
        }
    };

    view! {
        <div class=container_class>
            {move || {
                let items = items();
                if items.is_empty() {
                    // Unknown key and empty category render the same notice
                    view! {
                        <p class="empty-state">"لا توجد أذكار في هذا القسم حالياً."</p>
                    }
                    .into_any()
                } else {
                    let generation = swap_gen.get();
                    view! {
                        <For
                            each={move || items.clone().into_iter().enumerate().collect::<Vec<_>>()}
                            key={move |(idx, _)| (generation, *idx)}
                            children={|(_, item)| view! { <DhikrCard item=item /> }}
                        />
                    }
                    .into_any()
                }
            }}
        </div>
    }
}

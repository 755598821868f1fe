//! Theme Toggle Component
//!
//! Header button switching between dark and light, persisted across
//! visits via localStorage.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};
use crate::theme;

const PULSE_MS: u32 = 500;

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let store = use_app_store();
    let (pulse, set_pulse) = signal(false);

    let on_toggle = move |_| {
        let next = store.theme().get_untracked().toggled();
        store.theme().set(next);
        theme::apply(next);
        theme::save(next);
        set_pulse.set(true);
        Timeout::new(PULSE_MS, move || set_pulse.set(false)).forget();
    };

    let class = move || {
        if pulse.get() {
            "theme-toggle pulse"
        } else {
            "theme-toggle"
        }
    };

    view! {
        <button id="theme-toggle" class=class on:click=on_toggle>
            {move || store.theme().get().icon()}
        </button>
    }
}

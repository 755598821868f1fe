//! Adhkar UI App
//!
//! Root component: loads the embedded catalog, restores the saved theme,
//! and provides the app store to the header, tab bar, and category view.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{CategoryView, TabBar, ThemeToggle};
use crate::data;
use crate::store::AppState;
use crate::theme;

#[component]
pub fn App() -> impl IntoView {
    let catalog = data::load_catalog();
    web_sys::console::log_1(
        &format!("[APP] loaded catalog with {} categories", catalog.categories.len()).into(),
    );

    let saved_theme = theme::load();
    theme::apply(saved_theme);

    let store = Store::new(AppState::new(catalog, saved_theme));
    provide_context(store);

    view! {
        <header class="app-header">
            <h1>"أذكاري"</h1>
            <ThemeToggle />
        </header>

        <TabBar />

        <main class="main-content">
            <CategoryView />
        </main>
    }
}

//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Catalog;
use crate::theme::Theme;

/// App-wide state: the content catalog plus the externally injected
/// selections (active category, theme). Per-card counter state lives in
/// the cards themselves, never here.
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Immutable content catalog, loaded once at startup
    pub catalog: Catalog,
    /// Key of the currently selected category
    pub active_category: String,
    /// Current color theme
    pub theme: Theme,
}

impl AppState {
    pub fn new(catalog: Catalog, theme: Theme) -> Self {
        let active_category = catalog.first_key().unwrap_or_default();
        Self {
            catalog,
            active_category,
            theme,
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

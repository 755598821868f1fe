//! Adhkar UI Entry Point

mod app;
mod components;
mod counter;
mod data;
mod models;
mod store;
mod text;
mod theme;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}

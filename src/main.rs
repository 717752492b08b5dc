//! Team Dashboard Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod flows;
mod generation;
mod models;
mod render;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    wasm_tracing::set_as_global_default();

    tracing::info!("starting team dashboard frontend");
    mount_to_body(App);
}

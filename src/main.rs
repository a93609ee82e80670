//! Portfolio Gallery Frontend Entry Point

mod models;
mod error;
mod decode;
mod store;
mod selection;
mod update;
mod render;
mod config;
mod api;
mod context;
mod components;
mod app;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let config = AppConfig::from_document();
    web_sys::console::log_1(&format!("[APP] Portfolio API: {}", config.api_url).into());
    mount_to_body(move || view! { <App config=config /> });
}

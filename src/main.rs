//! Todo Board Frontend Entry Point

mod actions;
mod api;
mod app;
mod collection;
mod components;
mod config;
mod context;
mod detail;
mod logging;
mod models;
mod route;
mod store;
mod view;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_document();
    logging::init(config.log_level);
    log::info!("[APP] Starting against {}", config.api.base_url);

    mount_to_body(move || view! { <App config=config /> });
}

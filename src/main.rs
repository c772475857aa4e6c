//! Routed Anecdotes Frontend Entry Point

mod models;
mod collection;
mod error;
mod config;
mod logging;
mod notification;
mod routes;
mod history;
mod store;
mod context;
mod components;
mod app;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::load().unwrap_or_else(|err| {
        web_sys::console::error_1(&err.to_string().into());
        AppConfig::default()
    });
    logging::init(config.level_filter());
    log::debug!("[APP] config {:?}", config);

    mount_to_body(move || view! { <App config=config /> });
}

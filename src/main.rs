//! User Directory Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod error;
mod form;
mod logger;
mod models;
mod store;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_env();
    logger::init(config.log_level);
    log::info!("[APP] Starting, users endpoint {}", config.users_endpoint);

    mount_to_body(move || view! { <App config=config.clone() /> });
}

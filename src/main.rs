//! Task Board Frontend Entry Point

mod actions;
mod app;
mod commands;
mod components;
mod config;
mod context;
mod error;
mod logging;
mod models;
mod store;
mod sync;
mod view_model;

use app::App;
use config::BoardConfig;
use leptos::prelude::*;
use tracing::info;

fn main() {
    console_error_panic_hook::set_once();

    let config = BoardConfig::from_page();
    logging::init(config.log_level);
    info!("Task board starting, API at {}", config.api_base);

    mount_to_body(move || view! { <App config=config /> });
}

mod app;
mod config;
mod error;
mod features;
mod models;
mod pages;

use leptos::prelude::*;
use app::App;
use config::BoardConfig;

fn main() {
    console_error_panic_hook::set_once();

    let config = BoardConfig::load();
    web_sys::console::log_1(
        &format!("Mounting board: {} seed cards, rows of {}", config.seed_cards, config.row_len).into(),
    );

    leptos::mount::mount_to_body(move || view! { <App config=config /> })
}

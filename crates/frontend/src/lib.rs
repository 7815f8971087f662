pub mod app;
pub mod layout;
pub mod sections;
pub mod shared;

use leptos::prelude::*;
use shared::config::load_config;
use wasm_bindgen::prelude::wasm_bindgen;

pub fn mount() {
    let loaded = load_config();
    let config = loaded.as_ref().cloned().unwrap_or_default();

    // initializes logging using the `log` crate
    _ = console_log::init_with_level(config.logging.level());
    console_error_panic_hook::set_once();

    if let Err(e) = &loaded {
        log::warn!("storefront config rejected, using defaults: {:#}", e);
    }

    leptos::mount::mount_to_body(move || view! { <app::App config=config /> });
}

#[wasm_bindgen(start)]
pub fn start() {
    mount();
}


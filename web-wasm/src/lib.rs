//! Table Order Web App (Leptos + WASM)

mod app;
mod browser;
mod components;
mod console_logger;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    console_logger::init(log::LevelFilter::Info);
    leptos::mount::mount_to_body(app::App);
}

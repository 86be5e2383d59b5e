//! NYC Finder Web App (Leptos + WASM)

mod app;
pub mod browser;
mod components;
pub mod api;

use wasm_bindgen::prelude::*;
use leptos::prelude::*;
use nyc_finder_common::DOCUMENT_TITLE;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    // 二重初期化は無視
    let _ = console_log::init_with_level(level);

    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        document.set_title(DOCUMENT_TITLE);
    }

    leptos::mount::mount_to_body(app::App);
}

//! # client
//!
//! Leptos + WASM frontend for the lineup board.
//!
//! This crate contains the pages, components, application state, and REST
//! helpers. It renders on the server (`ssr`) and hydrates in the browser
//! (`hydrate`). Pitch arithmetic and the export renderer live in the `pitch`
//! crate; the shared data model lives in `roster`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&format!("console logger unavailable: {e}").into());
    }
    leptos::mount::hydrate_body(app::App);
}

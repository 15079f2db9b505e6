//! # client
//!
//! Leptos + WASM front end for the "useless thought of the day" widget.
//!
//! This crate is a thin adapter over the `qotd` core: it supplies browser
//! `localStorage`, the `quotes.json` fetch, clipboard and native-share
//! wrappers, and the components that bind the five user actions. All quote
//! selection logic stays in `qotd`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic/console hooks and hydrate the SSR shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&format!("console logger already set: {e}").into());
    }
    leptos::mount::hydrate_body(app::App);
}

//! # profile-client
//!
//! Leptos + WASM frontend for a single-page personal profile. The page shows
//! a fixed sidebar and four tabs (home, about, articles, photos) whose content
//! is compiled in; the selected tab is the only runtime state.
//!
//! The crate renders to HTML on the server (`ssr` feature, mounted by the host
//! binary) and hydrates in the browser (`hydrate` feature).

pub mod app;
pub mod components;
pub mod content;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach to the server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger unavailable: {err}");
    }
    log::info!("hydrating profile page");
    leptos::mount::hydrate_body(app::App);
}

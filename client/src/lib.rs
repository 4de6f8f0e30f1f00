//! # client
//!
//! Leptos + WASM frontend for the cybersecurity portfolio site.
//!
//! Pages and components render the site; `content` holds the static copy,
//! `state` the small testable models behind each interaction, and `util` the
//! browser glue. Animated backdrops are drawn by the `canvas` crate.

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
    // Fails only if a logger is already installed.
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}

//! # client
//!
//! Leptos frontend for the portfolio site. Rendered on the server by the
//! `portfolio` binary (`ssr` feature) and hydrated in the browser as WASM
//! (`hydrate` feature).
//!
//! The page is a fixed sequence of presentational sections fed by the typed
//! static data in [`content`]. Browser-only concerns (printing, scroll reveal,
//! the current year) live behind [`util`] so server rendering stays
//! deterministic.

pub mod app;
pub mod components;
pub mod content;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attaches the browser runtime to the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}

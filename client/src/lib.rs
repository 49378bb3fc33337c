//! # highfive-client
//!
//! Leptos frontend for the High Five charity landing page. Compiled with
//! `ssr` for the Axum host and with `hydrate` for the browser bundle.
//!
//! This crate contains the page and its components, the theme preference
//! manager, navigation and newsletter state, and the static site content.

pub mod app;
pub mod components;
pub mod content;
pub mod pages;
pub mod state;
pub mod theme;
pub mod util;

/// Browser entry point: attach the reactive app to the server-rendered DOM.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}

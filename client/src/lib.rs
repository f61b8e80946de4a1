//! # client
//!
//! Leptos + WASM frontend for the film recommender.
//!
//! This crate contains pages, components, application state, and the thin
//! REST layer that talks to the recommendation backend through the `filmrec`
//! server's `/api` forwarder. All analytics happen server-side; the client only
//! authenticates, uploads Letterboxd data, and renders what comes back.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}

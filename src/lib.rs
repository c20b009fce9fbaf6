//! # menu-assistant
//!
//! Leptos + WASM conversational widget: a floating panel that forwards free
//! text queries to a reply endpoint and renders the replies, including
//! structured result items, as a running transcript.
//!
//! `state` holds the transcript and session, `net` owns the request
//! lifecycle, `render` projects state into display data, and `components`
//! turns that data into markup.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod render;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logging unavailable: {err}");
    }
    leptos::mount::hydrate_body(app::App);
}

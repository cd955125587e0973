//! # client
//!
//! Leptos + WASM frontend for the LLaMA MindMap application.
//!
//! This crate contains the page, components, session/view state, and the REST
//! helpers that talk to the auth API. The server renders it with the `ssr`
//! feature; the browser hydrates it with the `hydrate` feature.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}

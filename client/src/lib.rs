//! # client
//!
//! Leptos + WASM front end for the BioCure / Dishom Classes learning platform.
//!
//! This crate contains the route-level pages, shared layout components, the
//! REST client for the backend auth API, and the client-side session layer
//! (token persistence, session context, route guard).
//!
//! SYSTEM CONTEXT
//! ==============
//! The `server` crate renders the HTML shell via SSR; the browser then
//! hydrates [`app::App`] through [`hydrate`]. All browser glue is gated behind
//! the `hydrate` feature so the session logic compiles and tests natively.

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

    let config = config::AppConfig::from_build_env();
    let level = if config.enable_debug { log::Level::Debug } else { log::Level::Warn };
    let _ = console_log::init_with_level(level);
    log::debug!("{} {} starting against {}", config.app_name, config.app_version, config.api_base_url);

    leptos::mount::hydrate_body(app::App);
}

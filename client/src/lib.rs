//! # client
//!
//! Leptos + WASM single-page client for POINTSE account sign-up and sign-in.
//!
//! This crate contains pages, route gates, the session store, and the auth
//! gateway. Browser-only code sits behind the `csr` feature; without it the
//! crate builds natively so the session and gateway logic can be unit tested.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod routes;
pub mod session;
pub mod state;
pub mod util;

/// Wasm entry point: install logging and mount the app on `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("auth API at {}", config::api_base_url());
    leptos::mount::mount_to_body(app::App);
}

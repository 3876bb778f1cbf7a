//! # skycast
//!
//! Leptos + WASM single-page weather client: authenticate against the
//! backend, keep the issued session token in `localStorage`, and look up
//! weather by city name or browser geolocation.
//!
//! This crate contains pages, components, application state, the network
//! layer, and browser utility glue. Everything that needs a real browser is
//! gated behind the `csr` feature so the state machinery stays testable on
//! the host with plain `cargo test`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: mounts the application onto `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}

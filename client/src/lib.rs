//! # client
//!
//! Leptos + WASM frontend for Postdesk, a small post-management app backed by
//! a remote REST API.
//!
//! This crate contains the session store and its startup verification, the
//! API gateway with its global 401 policy, the route guard, form validation,
//! and the pages and components that use them.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}

//! # kanban
//!
//! Leptos + WASM frontend for the kanban task-board application.
//!
//! This crate contains the route table, the navigation guard that gates every
//! route transition behind the session check, the client-side kanban store,
//! REST helpers, and the route-level pages.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod router;
pub mod state;

/// Browser entry point: installs console logging and hydrates the SSR shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}

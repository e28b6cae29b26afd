//! Client-side routing: the static route table, the navigation guard, and
//! the host component that applies guard outcomes to the Leptos router.
//!
//! ARCHITECTURE
//! ============
//! `routes` and `guard` are plain Rust and unit-tested without a browser.
//! `host` is the only piece that touches `leptos_router`.

pub mod guard;
pub mod host;
pub mod routes;

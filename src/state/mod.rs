//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `kanban` holds the plain state model and its transitions; `store` wraps it
//! in a reactive signal and exposes the narrow interface the navigation guard
//! drives.

pub mod kanban;
pub mod store;

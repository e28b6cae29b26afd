//! Network layer: REST helpers and shared DTOs.

pub mod api;
pub mod types;

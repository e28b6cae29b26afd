//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Pages render from kanban state that the navigation guard has already
//! synchronized with the route; they never decide access themselves.

pub mod board;
pub mod dashboard;
pub mod login;

//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render dashboard chrome from the kanban state provided through
//! Leptos context.

pub mod board_card;
pub mod view_tabs;

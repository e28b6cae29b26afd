//! Shared REST DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! Optional fields default on deserialize so older servers that omit
//! per-user board flags still produce a usable inventory.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// The currently authenticated user as returned by `/api/auth/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

/// A board summary as listed by `/api/boards`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSummary {
    /// Board identifier used in `/board/:id`.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Whether the current user starred this board.
    #[serde(default)]
    pub favorite: bool,
    /// Number of open tasks on this board assigned to the current user.
    #[serde(default)]
    pub assigned_to_me: u32,
}

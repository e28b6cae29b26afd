//! Reactive kanban store and the interface the navigation guard drives.
//!
//! ARCHITECTURE
//! ============
//! `NavigationStore` is the whole contract between the guard and application
//! state: two flags to read, an async `initialize`, and two mutators. The
//! guard receives the store as an argument, so tests substitute a recording
//! implementation and the app passes `KanbanStore` from context.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use leptos::prelude::*;

use super::kanban::{ActiveView, KanbanState};
use crate::net::api;

/// Error returned by [`NavigationStore::initialize`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The session check failed for a reason other than "logged out".
    #[error("session check failed: {0}")]
    Session(String),
    /// The board inventory could not be loaded for a signed-in user.
    #[error("board inventory failed to load: {0}")]
    Boards(String),
}

/// State handle consumed by the navigation guard.
#[allow(async_fn_in_trait)]
pub trait NavigationStore {
    fn is_logged_in(&self) -> bool;

    fn is_data_loaded(&self) -> bool;

    /// Populate the session and inventory. Calling it again after a
    /// successful load is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the session or inventory fetch fails.
    async fn initialize(&self) -> Result<(), StoreError>;

    fn select_board(&self, id: Option<&str>);

    fn set_view(&self, view: ActiveView);
}

/// Signal-backed store provided through Leptos context.
#[derive(Clone, Copy, Debug)]
pub struct KanbanStore {
    state: RwSignal<KanbanState>,
}

impl KanbanStore {
    pub fn new(state: RwSignal<KanbanState>) -> Self {
        Self { state }
    }

    /// Underlying signal, for pages that render from state.
    pub fn state(&self) -> RwSignal<KanbanState> {
        self.state
    }

    /// Drop the session after a logout round-trip.
    pub fn clear_session(&self) {
        self.state.update(KanbanState::clear_session);
    }
}

impl NavigationStore for KanbanStore {
    fn is_logged_in(&self) -> bool {
        self.state.with_untracked(KanbanState::is_logged_in)
    }

    fn is_data_loaded(&self) -> bool {
        self.state.with_untracked(|s| s.data_loaded)
    }

    async fn initialize(&self) -> Result<(), StoreError> {
        if self.is_data_loaded() {
            return Ok(());
        }
        let user = api::fetch_session().await.map_err(StoreError::Session)?;
        let boards = if user.is_some() {
            api::fetch_boards().await.map_err(StoreError::Boards)?
        } else {
            Vec::new()
        };
        leptos::logging::log!(
            "kanban store initialized: logged_in={} boards={}",
            user.is_some(),
            boards.len()
        );
        self.state.update(|s| s.apply_session(user, boards));
        Ok(())
    }

    fn select_board(&self, id: Option<&str>) {
        self.state.update(|s| s.select_board(id));
    }

    fn set_view(&self, view: ActiveView) {
        self.state.update(|s| s.set_view(view));
    }
}

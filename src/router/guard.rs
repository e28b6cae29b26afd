//! Navigation guard run before every route transition.
//!
//! SYSTEM CONTEXT
//! ==============
//! Called by `host::GuardHost` whenever the browser location changes. The
//! guard makes sure the session has been checked once, applies the login
//! gate, and on an allowed navigation points the store at the board or view
//! filter the route names.
//!
//! ERROR HANDLING
//! ==============
//! The guard has no recovery of its own: a failed `initialize` is returned
//! to the host untouched and no store mutation happens.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use super::routes::{ResolvedRoute, RouteName};
use crate::state::kanban::ActiveView;
use crate::state::store::{NavigationStore, StoreError};

/// What the host should do with a navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Render the requested route as-is.
    Proceed,
    /// Replace the requested route with another one.
    Redirect(RouteName),
}

/// Decide whether the navigation `from -> to` may proceed.
///
/// Suspends only while the store initializes, which happens at most until the
/// store reports a session or a completed load.
///
/// # Errors
///
/// Propagates the store's [`StoreError`] if initialization fails.
pub async fn guard_navigation<S: NavigationStore>(
    store: &S,
    to: &ResolvedRoute,
    from: Option<&ResolvedRoute>,
) -> Result<GuardOutcome, StoreError> {
    if !store.is_logged_in() && !store.is_data_loaded() {
        store.initialize().await?;
    }

    let authenticated = store.is_logged_in();

    if !authenticated && !to.is_public() {
        leptos::logging::log!("guard: {} -> {to} requires login", describe(from));
        return Ok(GuardOutcome::Redirect(RouteName::Login));
    }
    if authenticated && to.name == RouteName::Login {
        leptos::logging::log!("guard: {} -> {to} already signed in", describe(from));
        return Ok(GuardOutcome::Redirect(RouteName::Dashboard));
    }

    // Login while logged out lands here too and resets the selection.
    sync_store_with_route(store, to);
    Ok(GuardOutcome::Proceed)
}

/// Point the store at what `to` shows: a board, or a dashboard filter.
fn sync_store_with_route<S: NavigationStore>(store: &S, to: &ResolvedRoute) {
    if to.name == RouteName::Board {
        store.select_board(to.params.id.as_deref());
        return;
    }
    store.select_board(None);
    store.set_view(view_for_route(to.name));
}

/// Dashboard filter implied by a non-board route.
pub fn view_for_route(name: RouteName) -> ActiveView {
    match name {
        RouteName::MyTasks => ActiveView::MyTasks,
        RouteName::Favorites => ActiveView::Favorites,
        _ => ActiveView::Dashboard,
    }
}

fn describe(from: Option<&ResolvedRoute>) -> String {
    from.map_or_else(|| "(initial)".to_owned(), ToString::to_string)
}

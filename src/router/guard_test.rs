use std::cell::{Cell, RefCell};

use futures::executor::block_on;

use super::*;

/// Store mutation observed by the recording store.
#[derive(Clone, Debug, PartialEq, Eq)]
enum Call {
    SelectBoard(Option<String>),
    SetView(ActiveView),
}

/// In-memory store that records every call the guard makes.
#[derive(Default)]
struct RecordingStore {
    logged_in: Cell<bool>,
    data_loaded: Cell<bool>,
    /// Session state `initialize` reports.
    session_on_initialize: bool,
    fail_initialize: bool,
    initialize_calls: Cell<u32>,
    calls: RefCell<Vec<Call>>,
}

impl RecordingStore {
    fn logged_out() -> Self {
        Self::default()
    }

    fn with_session() -> Self {
        Self {
            session_on_initialize: true,
            ..Self::default()
        }
    }

    fn failing() -> Self {
        Self {
            fail_initialize: true,
            ..Self::default()
        }
    }

    fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }
}

impl NavigationStore for RecordingStore {
    fn is_logged_in(&self) -> bool {
        self.logged_in.get()
    }

    fn is_data_loaded(&self) -> bool {
        self.data_loaded.get()
    }

    async fn initialize(&self) -> Result<(), StoreError> {
        self.initialize_calls.set(self.initialize_calls.get() + 1);
        if self.fail_initialize {
            return Err(StoreError::Session("offline".to_owned()));
        }
        self.logged_in.set(self.session_on_initialize);
        self.data_loaded.set(true);
        Ok(())
    }

    fn select_board(&self, id: Option<&str>) {
        self.calls.borrow_mut().push(Call::SelectBoard(id.map(str::to_owned)));
    }

    fn set_view(&self, view: ActiveView) {
        self.calls.borrow_mut().push(Call::SetView(view));
    }
}

fn navigate(store: &RecordingStore, to: &ResolvedRoute) -> Result<GuardOutcome, StoreError> {
    block_on(guard_navigation(store, to, None))
}

fn protected_routes() -> Vec<ResolvedRoute> {
    vec![
        ResolvedRoute::new(RouteName::Dashboard),
        ResolvedRoute::new(RouteName::MyTasks),
        ResolvedRoute::new(RouteName::Favorites),
        ResolvedRoute::board("42"),
    ]
}

// =============================================================
// Login gate
// =============================================================

#[test]
fn unauthenticated_protected_routes_redirect_to_login() {
    for to in protected_routes() {
        let store = RecordingStore::logged_out();
        assert_eq!(navigate(&store, &to), Ok(GuardOutcome::Redirect(RouteName::Login)), "{to}");
        assert!(store.calls().is_empty(), "{to} must not sync state");
    }
}

#[test]
fn authenticated_login_redirects_to_dashboard() {
    let store = RecordingStore::with_session();
    let origins = [
        None,
        Some(ResolvedRoute::new(RouteName::Favorites)),
        Some(ResolvedRoute::board("7")),
    ];
    for from in origins {
        let outcome = block_on(guard_navigation(
            &store,
            &ResolvedRoute::new(RouteName::Login),
            from.as_ref(),
        ));
        assert_eq!(outcome, Ok(GuardOutcome::Redirect(RouteName::Dashboard)));
    }
    assert!(store.calls().is_empty());
}

#[test]
fn unauthenticated_board_never_selects_board() {
    let store = RecordingStore::logged_out();
    let outcome = navigate(&store, &resolve_path("/board/42"));
    assert_eq!(outcome, Ok(GuardOutcome::Redirect(RouteName::Login)));
    assert!(!store.calls().contains(&Call::SelectBoard(Some("42".to_owned()))));
}

#[test]
fn unauthenticated_login_proceeds_and_resets_selection() {
    let store = RecordingStore::logged_out();
    let outcome = navigate(&store, &ResolvedRoute::new(RouteName::Login));
    assert_eq!(outcome, Ok(GuardOutcome::Proceed));
    assert_eq!(
        store.calls(),
        [Call::SelectBoard(None), Call::SetView(ActiveView::Dashboard)]
    );
}

// =============================================================
// State synchronization
// =============================================================

#[test]
fn authenticated_board_selects_board_without_view_change() {
    let store = RecordingStore::with_session();
    let outcome = navigate(&store, &ResolvedRoute::board("X"));
    assert_eq!(outcome, Ok(GuardOutcome::Proceed));
    assert_eq!(store.calls(), [Call::SelectBoard(Some("X".to_owned()))]);
}

#[test]
fn authenticated_views_clear_board_then_set_view() {
    let cases = [
        ("/my-tasks", ActiveView::MyTasks),
        ("/favorites", ActiveView::Favorites),
        ("/", ActiveView::Dashboard),
    ];
    for (path, view) in cases {
        let store = RecordingStore::with_session();
        assert_eq!(navigate(&store, &resolve_path(path)), Ok(GuardOutcome::Proceed));
        assert_eq!(store.calls(), [Call::SelectBoard(None), Call::SetView(view)], "{path}");
    }
}

#[test]
fn view_for_route_defaults_to_dashboard() {
    assert_eq!(view_for_route(RouteName::MyTasks), ActiveView::MyTasks);
    assert_eq!(view_for_route(RouteName::Favorites), ActiveView::Favorites);
    assert_eq!(view_for_route(RouteName::Dashboard), ActiveView::Dashboard);
    assert_eq!(view_for_route(RouteName::Login), ActiveView::Dashboard);
}

// =============================================================
// Initialization
// =============================================================

#[test]
fn initialize_runs_once_across_navigations() {
    let store = RecordingStore::with_session();
    for path in ["/", "/my-tasks", "/board/1", "/favorites", "/login"] {
        let _ = navigate(&store, &resolve_path(path));
    }
    assert_eq!(store.initialize_calls.get(), 1);
}

#[test]
fn initialize_runs_once_when_logged_out_after_load() {
    let store = RecordingStore::logged_out();
    for path in ["/", "/login", "/board/3"] {
        let _ = navigate(&store, &resolve_path(path));
    }
    assert_eq!(store.initialize_calls.get(), 1);
}

#[test]
fn initialize_skipped_when_already_logged_in() {
    let store = RecordingStore::default();
    store.logged_in.set(true);
    let outcome = navigate(&store, &ResolvedRoute::new(RouteName::Dashboard));
    assert_eq!(outcome, Ok(GuardOutcome::Proceed));
    assert_eq!(store.initialize_calls.get(), 0);
}

#[test]
fn initialize_failure_propagates_without_sync() {
    let store = RecordingStore::failing();
    let outcome = navigate(&store, &ResolvedRoute::new(RouteName::MyTasks));
    assert_eq!(outcome, Err(StoreError::Session("offline".to_owned())));
    assert!(store.calls().is_empty());
}

#[test]
fn initialize_failure_retries_on_next_navigation() {
    let store = RecordingStore::failing();
    let _ = navigate(&store, &ResolvedRoute::new(RouteName::Dashboard));
    let _ = navigate(&store, &ResolvedRoute::new(RouteName::Dashboard));
    assert_eq!(store.initialize_calls.get(), 2);
}

// =============================================================
// Scenarios
// =============================================================

#[test]
fn scenario_authenticated_my_tasks_orders_calls() {
    let store = RecordingStore::with_session();
    let from = ResolvedRoute::board("9");
    let outcome = block_on(guard_navigation(&store, &resolve_path("/my-tasks"), Some(&from)));
    assert_eq!(outcome, Ok(GuardOutcome::Proceed));
    assert_eq!(
        store.calls(),
        [Call::SelectBoard(None), Call::SetView(ActiveView::MyTasks)]
    );
}

fn resolve_path(path: &str) -> ResolvedRoute {
    crate::router::routes::resolve(path).unwrap()
}

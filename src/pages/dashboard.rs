//! Dashboard page listing boards for the active view filter.
//!
//! SYSTEM CONTEXT
//! ==============
//! `/`, `/my-tasks`, and `/favorites` all render this page. The guard has set
//! `active_view` before the page renders, so the filter is read from state
//! rather than from the URL.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::board_card::BoardCard;
use crate::components::view_tabs::ViewTabs;
use crate::router::routes::RouteName;
use crate::state::kanban::{ActiveView, KanbanState};
use crate::state::store::KanbanStore;

/// Message shown when the active view has no boards.
fn empty_message(view: ActiveView) -> &'static str {
    match view {
        ActiveView::Dashboard => "No boards yet.",
        ActiveView::MyTasks => "Nothing is assigned to you.",
        ActiveView::Favorites => "Star a board to keep it here.",
    }
}

/// Greeting for the signed-in user, falling back when the name is blank.
fn greeting(state: &KanbanState) -> String {
    match state.user.as_ref().map(|u| u.name.trim()) {
        Some(name) if !name.is_empty() => format!("Signed in as {name}"),
        _ => "Signed in".to_owned(),
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let store = expect_context::<KanbanStore>();
    let state = store.state();
    let navigate = use_navigate();

    let on_logout = move |_| {
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            crate::net::api::logout().await;
            store.clear_session();
            navigate(RouteName::Login.path(), NavigateOptions::default());
        });
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>{move || state.with(|s| s.active_view.label())}</h1>
                <span class="dashboard-page__user">{move || state.with(greeting)}</span>
                <button class="btn" on:click=on_logout>
                    "Log out"
                </button>
            </header>
            <ViewTabs/>
            <div class="dashboard-page__cards">
                {move || {
                    let (view, boards) = state.with(|s| (s.active_view, s.visible_boards()));
                    if boards.is_empty() {
                        view! { <p class="dashboard-page__empty">{empty_message(view)}</p> }
                            .into_any()
                    } else {
                        boards
                            .into_iter()
                            .map(|b| {
                                view! {
                                    <BoardCard
                                        id=b.id
                                        name=b.name
                                        favorite=b.favorite
                                        assigned_to_me=b.assigned_to_me
                                    />
                                }
                            })
                            .collect::<Vec<_>>()
                            .into_any()
                    }
                }}
            </div>
        </div>
    }
}

//! Tab strip switching between the dashboard filters.
//!
//! DESIGN
//! ======
//! Tabs are plain links. Switching tabs is a navigation, so the guard sets
//! the active view and the tab highlight follows from state.

use leptos::prelude::*;

use crate::router::routes::RouteName;
use crate::state::kanban::{ActiveView, KanbanState};

/// Dashboard filter tabs, in display order.
pub const VIEW_TABS: [(ActiveView, RouteName); 3] = [
    (ActiveView::Dashboard, RouteName::Dashboard),
    (ActiveView::MyTasks, RouteName::MyTasks),
    (ActiveView::Favorites, RouteName::Favorites),
];

#[component]
pub fn ViewTabs() -> impl IntoView {
    let state = expect_context::<RwSignal<KanbanState>>();

    view! {
        <nav class="view-tabs">
            {VIEW_TABS
                .into_iter()
                .map(|(view, route)| {
                    let active = move || state.with(|s| s.active_view == view);
                    view! {
                        <a
                            class="view-tabs__tab"
                            class:view-tabs__tab--active=active
                            href=route.path()
                        >
                            {view.label()}
                        </a>
                    }
                })
                .collect::<Vec<_>>()}
        </nav>
    }
}

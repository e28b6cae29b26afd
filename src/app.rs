//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{board::BoardPage, dashboard::DashboardPage, login::LoginPage};
use crate::router::host::GuardHost;
use crate::state::kanban::KanbanState;
use crate::state::store::KanbanStore;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the kanban state and store, and registers one route per entry of
/// `router::routes::ROUTES` behind the navigation guard.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let state = RwSignal::new(KanbanState::default());
    provide_context(state);
    provide_context(KanbanStore::new(state));

    view! {
        <Stylesheet id="leptos" href="/pkg/kanban.css"/>
        <Title text="Kanban"/>

        <Router>
            <GuardHost>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("") view=DashboardPage/>
                    <Route path=StaticSegment("my-tasks") view=DashboardPage/>
                    <Route path=StaticSegment("favorites") view=DashboardPage/>
                    <Route path=(StaticSegment("board"), ParamSegment("id")) view=BoardPage/>
                </Routes>
            </GuardHost>
        </Router>
    }
}

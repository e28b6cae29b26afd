//! Board page for `/board/:id`.
//!
//! SYSTEM CONTEXT
//! ==============
//! The guard has already stored the route's board id as the selection; the
//! page looks it up in the inventory loaded at startup.

#[cfg(test)]
#[path = "board_test.rs"]
mod board_test;

use leptos::prelude::*;

use crate::router::routes::RouteName;
use crate::state::kanban::KanbanState;

/// Heading for the selected board.
fn board_heading(state: &KanbanState) -> String {
    match (state.selected_board(), state.selected_board_id.as_deref()) {
        (Some(board), _) => board.name.clone(),
        (None, Some(id)) => format!("Board {id} not found"),
        (None, None) => "No board selected".to_owned(),
    }
}

#[component]
pub fn BoardPage() -> impl IntoView {
    let state = expect_context::<RwSignal<KanbanState>>();

    let has_assignments =
        move || state.with(|s| s.selected_board().is_some_and(|b| b.assigned_to_me > 0));

    view! {
        <div class="board-page">
            <header class="board-page__header">
                <a class="board-page__back" href=RouteName::Dashboard.path()>
                    "← Boards"
                </a>
                <h1>{move || state.with(board_heading)}</h1>
            </header>
            <Show when=has_assignments>
                <p class="board-page__assigned">
                    {move || {
                        state
                            .with(|s| s.selected_board().map(|b| b.assigned_to_me))
                            .map(|n| format!("{n} open tasks assigned to you"))
                            .unwrap_or_default()
                    }}
                </p>
            </Show>
        </div>
    }
}

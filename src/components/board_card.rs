//! Reusable card component for board list items on the dashboard.

#[cfg(test)]
#[path = "board_card_test.rs"]
mod board_card_test;

use leptos::prelude::*;

use crate::router::routes::ResolvedRoute;

/// A clickable card linking to `/board/:id`.
#[component]
pub fn BoardCard(
    id: String,
    name: String,
    #[prop(optional)] favorite: bool,
    #[prop(optional)] assigned_to_me: u32,
) -> impl IntoView {
    let href = ResolvedRoute::board(id).href();

    view! {
        <a class="board-card" class:board-card--favorite=favorite href=href>
            <span class="board-card__name">{name}</span>
            <Show when=move || favorite>
                <span class="board-card__star" title="Favorite" aria-label="Favorite">"★"</span>
            </Show>
            <span class="board-card__meta">{assigned_label(assigned_to_me)}</span>
        </a>
    }
}

fn assigned_label(count: u32) -> String {
    match count {
        0 => "No tasks for you".to_owned(),
        1 => "1 task for you".to_owned(),
        n => format!("{n} tasks for you"),
    }
}

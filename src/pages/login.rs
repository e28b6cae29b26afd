//! Login page with the GitHub OAuth entry point.

use leptos::prelude::*;

use crate::net::api::GITHUB_LOGIN_URL;

/// Login page. Signed-in users never reach it; the guard sends them to the
/// dashboard.
#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Kanban"</h1>
                <p class="login-card__subtitle">"Boards, tasks, and favorites in one place"</p>
                <a href=GITHUB_LOGIN_URL class="login-button" rel="external">
                    "Sign in with GitHub"
                </a>
            </div>
        </div>
    }
}

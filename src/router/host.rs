//! Route-level host that runs the navigation guard on every location change.
//!
//! ARCHITECTURE
//! ============
//! The Leptos router renders whatever the URL matches. `GuardHost` wraps the
//! `<Routes>` tree, watches the pathname, runs [`guard_navigation`] and maps
//! its outcome to a [`HostAction`]: show the route, replace it with a
//! redirect, or block it.
//!
//! TRADE-OFFS
//! ==========
//! Route content renders only while the current pathname is the one the guard
//! last approved. Every transition therefore hides the tree until the store
//! has been synchronized, so pages never read the previous route's selection.

#[cfg(test)]
#[path = "host_test.rs"]
mod host_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use super::guard::{GuardOutcome, guard_navigation};
use super::routes::{ResolvedRoute, resolve};
use crate::state::store::{KanbanStore, StoreError};

/// What the host does once a guard run finishes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HostAction {
    /// A newer navigation started while this run was in flight.
    Stale,
    /// Render the route; it becomes the origin of the next navigation.
    Approve(ResolvedRoute),
    /// Replace the current history entry with this path.
    Redirect(&'static str),
    /// Keep the route hidden and show the failure.
    Block(String),
}

/// Map a finished guard run to a host action.
///
/// `seq` is the run's sequence number and `latest` the newest one issued;
/// only the newest run may act.
pub fn host_action(
    seq: u64,
    latest: u64,
    to: ResolvedRoute,
    result: Result<GuardOutcome, StoreError>,
) -> HostAction {
    if seq != latest {
        return HostAction::Stale;
    }
    match result {
        Ok(GuardOutcome::Proceed) => HostAction::Approve(to),
        Ok(GuardOutcome::Redirect(target)) => HostAction::Redirect(target.path()),
        Err(e) => HostAction::Block(e.to_string()),
    }
}

/// Wraps the routed tree and applies guard outcomes.
#[component]
pub fn GuardHost(children: ChildrenFn) -> impl IntoView {
    let store = expect_context::<KanbanStore>();
    let current_path = use_location().pathname;
    let navigate = use_navigate();

    let approved = RwSignal::new(None::<String>);
    let failure = RwSignal::new(None::<String>);
    let retry = RwSignal::new(0_u64);
    let run_seq = StoredValue::new(0_u64);
    let last_route = StoredValue::new(None::<ResolvedRoute>);

    Effect::new(move || {
        let pathname = current_path.get();
        retry.track();

        let seq = run_seq.get_value() + 1;
        run_seq.set_value(seq);

        let Some(to) = resolve(&pathname) else {
            // Unknown paths go straight to the router fallback.
            approved.set(Some(pathname));
            return;
        };

        let from = last_route.get_value();
        let navigate = navigate.clone();

        leptos::task::spawn_local(async move {
            let result = guard_navigation(&store, &to, from.as_ref()).await;
            match host_action(seq, run_seq.get_value(), to, result) {
                HostAction::Stale => {}
                HostAction::Approve(route) => {
                    failure.set(None);
                    last_route.set_value(Some(route));
                    approved.set(Some(pathname));
                }
                HostAction::Redirect(path) => {
                    navigate(
                        path,
                        NavigateOptions {
                            replace: true,
                            ..NavigateOptions::default()
                        },
                    );
                }
                HostAction::Block(message) => {
                    leptos::logging::warn!("navigation to {pathname} blocked: {message}");
                    failure.set(Some(message));
                }
            }
        });
    });

    let route_approved = move || {
        failure.with(Option::is_none)
            && approved.with(|a| a.as_deref() == Some(current_path.get().as_str()))
    };

    view! {
        <Show when=move || failure.get().is_some()>
            <div class="guard-error">
                <p class="guard-error__message">
                    "Could not load your workspace: "
                    {move || failure.get().unwrap_or_default()}
                </p>
                <button class="btn" on:click=move |_| retry.update(|n| *n += 1)>
                    "Retry"
                </button>
            </div>
        </Show>
        <Show when=route_approved>
            {children()}
        </Show>
    }
}

//! Landing page: session summary, logout, and the superuser roster.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::roster_panel::RosterPanel;
use crate::state::toast::{ToastKind, ToastState, notify};
use crate::state::user::{AppUserStore, Session};

/// Heading text for the current session.
fn greeting(session: &Session) -> String {
    if session.is_authenticated {
        format!("Welcome, {}", session.username)
    } else {
        "You are not signed in.".to_owned()
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let store = expect_context::<AppUserStore>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let session = store.session();

    let on_logout = move |_: leptos::ev::MouseEvent| {
        let store = store.clone();
        leptos::task::spawn_local(async move {
            match store.logout().await {
                Ok(()) => {
                    notify(toasts, ToastKind::Info, "Signed out.");
                }
                Err(e) => {
                    log::warn!("logout failed: {e}");
                    notify(toasts, ToastKind::Error, format!("Sign out failed: {e}"));
                }
            }
        });
    };

    view! {
        <div class="home-page">
            <h1 class="h3">{move || session.with(greeting)}</h1>
            <Show
                when=move || session.with(|s| s.is_authenticated)
                fallback=|| view! { <A href="/login" attr:class="btn btn-primary">"Sign in"</A> }
            >
                <button class="btn btn-outline-secondary" on:click=on_logout.clone()>
                    <i class="bi bi-box-arrow-right"></i>
                    " Sign out"
                </button>
            </Show>
            <Show when=move || session.with(|s| s.is_superuser && s.is_authenticated)>
                <RosterPanel/>
            </Show>
        </div>
    }
}

//! Username + password login against the backend session endpoint.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::{NavigateOptions, hooks::use_navigate};

use crate::net::api::ApiError;
use crate::state::toast::{ToastKind, ToastState, notify};
use crate::state::user::AppUserStore;

/// User-facing text for a failed sign-in attempt.
fn login_failed_message(err: &ApiError) -> String {
    match err {
        ApiError::Status(400 | 401 | 403) => "Invalid username or password.".to_owned(),
        other => format!("Sign in failed: {other}"),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let store = expect_context::<AppUserStore>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let user_value = username.get().trim().to_owned();
        let password_value = password.get();
        if user_value.is_empty() || password_value.is_empty() {
            notify(toasts, ToastKind::Error, "Enter both username and password.");
            return;
        }
        busy.set(true);

        let store = store.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match store.login(&user_value, &password_value).await {
                Ok(()) => {
                    password.set(String::new());
                    busy.set(false);
                    notify(toasts, ToastKind::Success, format!("Signed in as {user_value}."));
                    navigate("/", NavigateOptions::default());
                }
                Err(e) => {
                    log::warn!("login failed: {e}");
                    notify(toasts, ToastKind::Error, login_failed_message(&e));
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <div class="login-page row justify-content-center">
            <form class="login-form col-sm-6 col-lg-4" on:submit=on_submit>
                <h1 class="h4 mb-3">"Sign in"</h1>
                <input
                    class="form-control mb-2"
                    type="text"
                    autocomplete="username"
                    placeholder="Username"
                    prop:value=move || username.get()
                    on:input=move |ev| username.set(event_target_value(&ev))
                />
                <input
                    class="form-control mb-3"
                    type="password"
                    autocomplete="current-password"
                    placeholder="Password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <button class="btn btn-primary w-100" type="submit" disabled=move || busy.get()>
                    "Sign in"
                </button>
            </form>
        </div>
    }
}

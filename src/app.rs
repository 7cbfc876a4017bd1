//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toast_host::ToastHost;
use crate::config::AppConfig;
use crate::net::api::HttpUserApi;
use crate::pages::{home::HomePage, login::LoginPage};
use crate::state::toast::ToastState;
use crate::state::user::AppUserStore;

const BOOTSTRAP_CSS: &str = "/static/bootstrap/bootstrap.min.css";
const BOOTSTRAP_ICONS_CSS: &str = "/static/bootstrap/bootstrap-icons.min.css";
const APP_CSS: &str = "/pkg/dormitory-client.css";

/// Root application component.
///
/// Constructs the session store and toast stack, provides both as context,
/// kicks off the initial session fetch, and sets up client-side routing.
#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    provide_meta_context();

    let users = AppUserStore::new(HttpUserApi::new(config.api_base));
    let toasts = RwSignal::new(ToastState::new(config.toast));

    provide_context(users.clone());
    provide_context(toasts);

    // Runs before any route renders; pages see the anonymous defaults until
    // the response commits.
    users.start();

    view! {
        <Stylesheet id="bootstrap" href=BOOTSTRAP_CSS/>
        <Stylesheet id="bootstrap-icons" href=BOOTSTRAP_ICONS_CSS/>
        <Stylesheet id="dormitory" href=APP_CSS/>
        <Title text="Student Dormitory"/>

        <Router>
            <main class="container py-4">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                </Routes>
            </main>
        </Router>
        <ToastHost/>
    }
}

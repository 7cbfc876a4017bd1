//! Fixed-position container rendering the toast stack.

use leptos::prelude::*;

use crate::state::toast::ToastState;

/// Renders every queued toast in the configured screen corner.
///
/// Clicking a toast dismisses it early.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    let host_class = move || format!("toast-host toast-host--{}", toasts.with(|t| t.position.css_modifier()));

    view! {
        <div class=host_class role="status" aria-live="polite">
            {move || {
                toasts
                    .get()
                    .items
                    .into_iter()
                    .map(|toast| {
                        let id = toast.id;
                        let class = format!("toast-item toast-item--{}", toast.kind.css_modifier());
                        view! {
                            <div class=class on:click=move |_| toasts.update(|t| t.dismiss(id))>
                                {toast.message}
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}

//! Superuser roster table.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders `Session::users`, which the store only fills for superusers.

use leptos::prelude::*;

use crate::state::user::AppUserStore;

#[component]
pub fn RosterPanel() -> impl IntoView {
    let session = expect_context::<AppUserStore>().session();

    // Backend order is kept.
    let rows = move || session.with(|s| s.users.clone());

    view! {
        <section class="roster-panel">
            <h2 class="h5">{move || format!("Users ({})", session.with(|s| s.users.len()))}</h2>
            <Show
                when=move || session.with(|s| !s.users.is_empty())
                fallback=move || view! { <p class="text-muted">"No users loaded."</p> }
            >
                <table class="table table-sm">
                    <thead>
                        <tr>
                            <th>"ID"</th>
                            <th>"Username"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            rows()
                                .into_iter()
                                .map(|user| {
                                    let id = user.id().map(|id| id.to_string()).unwrap_or_default();
                                    let username = user.username().unwrap_or_default().to_owned();
                                    view! {
                                        <tr>
                                            <td>{id}</td>
                                            <td>{username}</td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                        }}
                    </tbody>
                </table>
            </Show>
        </section>
    }
}

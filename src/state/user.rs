//! Session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` constructs one [`UserStore`], provides it as context, and calls
//! [`UserStore::start`] before rendering routes. Pages read the session
//! reactively and call the store for login/logout.
//!
//! TRADE-OFFS
//! ==========
//! Requests are neither cancelled nor deduplicated. Two overlapping
//! `fetch_user` calls commit in response order, so the last response to
//! arrive wins even if it was issued first.

#[cfg(test)]
#[path = "user_test.rs"]
mod user_test;

use std::sync::Arc;

use leptos::prelude::*;

use crate::net::api::{ApiError, HttpUserApi, UserApi};
use crate::net::types::{RosterEntry, UserId, UserInfo};

/// Identity of the current session plus the superuser-only roster.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    pub is_authenticated: bool,
    pub username: String,
    pub user_id: Option<UserId>,
    pub is_superuser: bool,
    /// Only ever filled by a roster fetch issued while `is_superuser` was set.
    pub users: Vec<RosterEntry>,
}

impl Session {
    /// Overwrite all identity fields from one `/api/user/info/` payload.
    pub fn apply_info(&mut self, info: UserInfo) {
        self.is_authenticated = info.is_authenticated;
        self.username = info.username;
        self.user_id = info.user_id;
        self.is_superuser = info.is_superuser;
    }

    /// Return to the anonymous identity.
    ///
    /// `is_superuser` and `users` are left as they were.
    pub fn reset_identity(&mut self) {
        self.is_authenticated = false;
        self.username.clear();
        self.user_id = None;
    }
}

/// Store used by the running app.
pub type AppUserStore = UserStore<HttpUserApi>;

/// Reactive session container backed by a [`UserApi`].
pub struct UserStore<A> {
    session: RwSignal<Session>,
    api: Arc<A>,
}

impl<A> Clone for UserStore<A> {
    fn clone(&self) -> Self {
        Self { session: self.session, api: Arc::clone(&self.api) }
    }
}

impl<A: UserApi> UserStore<A> {
    pub fn new(api: A) -> Self {
        Self::from_shared(Arc::new(api))
    }

    pub fn from_shared(api: Arc<A>) -> Self {
        Self { session: RwSignal::new(Session::default()), api }
    }

    /// Read-only view of the session for components.
    pub fn session(&self) -> ReadSignal<Session> {
        self.session.read_only()
    }

    /// Schedule the initial [`fetch_user`](Self::fetch_user) on the local executor.
    ///
    /// The UI keeps rendering while the request is outstanding; a failure is
    /// logged and leaves the session anonymous.
    pub fn start(&self) {
        let store = self.clone();
        leptos::task::spawn_local(async move {
            if let Err(e) = store.fetch_user().await {
                log::warn!("initial session fetch failed: {e}");
            }
        });
    }

    /// Refresh identity fields from `/api/user/info/`.
    ///
    /// For superusers the roster is fetched next, inside the same call.
    ///
    /// # Errors
    ///
    /// Returns the first failing request. The session is untouched when the
    /// info request fails; identity fields stay updated when only the roster
    /// request fails.
    pub async fn fetch_user(&self) -> Result<(), ApiError> {
        let info = self.api.user_info().await?;
        let load_roster = info.is_superuser;
        log::debug!(
            "session info: authenticated={} user_id={:?} superuser={}",
            info.is_authenticated,
            info.user_id,
            info.is_superuser
        );
        self.session.update(|session| session.apply_info(info));

        if load_roster {
            self.fetch_users().await?;
        }
        Ok(())
    }

    /// Replace the roster with `/api/user/list/`.
    ///
    /// # Errors
    ///
    /// Returns the request failure; the previous roster is kept.
    pub async fn fetch_users(&self) -> Result<(), ApiError> {
        let users = self.api.user_list().await?;
        log::debug!("roster loaded: {} users", users.len());
        self.session.update(|session| session.users = users);
        Ok(())
    }

    /// Clear the identity fields synchronously.
    pub fn reset_user(&self) {
        self.session.update(Session::reset_identity);
    }

    /// Authenticate, then reload the session.
    ///
    /// # Errors
    ///
    /// Returns the login failure, or the follow-up session fetch failure.
    pub async fn login(&self, username: &str, password: &str) -> Result<(), ApiError> {
        self.api.login(username, password).await?;
        self.fetch_user().await
    }

    /// End the backend session, then clear identity fields.
    ///
    /// # Errors
    ///
    /// Returns the logout failure; the session is left as it was.
    pub async fn logout(&self) -> Result<(), ApiError> {
        self.api.logout().await?;
        self.reset_user();
        Ok(())
    }
}

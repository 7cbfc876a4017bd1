//! REST API client for the backend's user endpoints.
//!
//! Browser (csr): real HTTP calls via `gloo-net`.
//! Native builds: every call returns [`ApiError::Unavailable`] since these
//! endpoints are only reachable from the page's origin.
//!
//! ERROR HANDLING
//! ==============
//! Failures are returned as [`ApiError`] and never retried here; callers
//! decide whether a failure is logged, toasted, or ignored.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{RosterEntry, UserInfo};
#[cfg(feature = "csr")]
use super::types::LoginRequest;

pub const USER_INFO_PATH: &str = "/api/user/info/";
pub const USER_LIST_PATH: &str = "/api/user/list/";
pub const LOGIN_PATH: &str = "/api/user/login/";
pub const LOGOUT_PATH: &str = "/api/user/logout/";

#[cfg(any(test, feature = "csr"))]
const CSRF_COOKIE: &str = "csrftoken";
#[cfg(feature = "csr")]
const CSRF_HEADER: &str = "X-CSRFToken";

/// Failure of a single API request.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("malformed response: {0}")]
    Decode(String),
    #[error("not available outside the browser")]
    Unavailable,
}

/// Backend operations the user session store depends on.
///
/// The browser implementation is [`HttpUserApi`]; tests substitute an
/// in-memory fake.
#[allow(async_fn_in_trait)]
pub trait UserApi: Send + Sync + 'static {
    /// `GET /api/user/info/`.
    async fn user_info(&self) -> Result<UserInfo, ApiError>;

    /// `GET /api/user/list/`.
    async fn user_list(&self) -> Result<Vec<RosterEntry>, ApiError>;

    /// `POST /api/user/login/`; establishes the session cookie on success.
    async fn login(&self, username: &str, password: &str) -> Result<(), ApiError>;

    /// `POST /api/user/logout/`.
    async fn logout(&self) -> Result<(), ApiError>;
}

/// [`UserApi`] over `fetch`, relative to a configurable base URL.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HttpUserApi {
    base: String,
}

impl HttpUserApi {
    /// An empty `base` targets the page's own origin.
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    pub fn url(&self, path: &str) -> String {
        endpoint(&self.base, path)
    }
}

impl UserApi for HttpUserApi {
    async fn user_info(&self) -> Result<UserInfo, ApiError> {
        #[cfg(feature = "csr")]
        {
            get_json(&self.url(USER_INFO_PATH)).await
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    async fn user_list(&self) -> Result<Vec<RosterEntry>, ApiError> {
        #[cfg(feature = "csr")]
        {
            get_json(&self.url(USER_LIST_PATH)).await
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    async fn login(&self, username: &str, password: &str) -> Result<(), ApiError> {
        #[cfg(feature = "csr")]
        {
            let body = LoginRequest { user: username, password };
            let resp = with_csrf(gloo_net::http::Request::post(&self.url(LOGIN_PATH)))
                .json(&body)
                .map_err(|e| ApiError::Network(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            if !resp.ok() {
                return Err(ApiError::Status(resp.status()));
            }
            Ok(())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (username, password);
            Err(ApiError::Unavailable)
        }
    }

    async fn logout(&self) -> Result<(), ApiError> {
        #[cfg(feature = "csr")]
        {
            let resp = with_csrf(gloo_net::http::Request::post(&self.url(LOGOUT_PATH)))
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            if !resp.ok() {
                return Err(ApiError::Status(resp.status()));
            }
            Ok(())
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(ApiError::Unavailable)
        }
    }
}

/// Join a base URL and an absolute API path without doubling the slash.
fn endpoint(base: &str, path: &str) -> String {
    format!("{}{path}", base.trim_end_matches('/'))
}

/// Extract one cookie value from a `document.cookie` string.
#[cfg(any(test, feature = "csr"))]
fn cookie_value(cookies: &str, name: &str) -> Option<String> {
    cookies
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.to_owned())
        .filter(|value| !value.is_empty())
}

#[cfg(feature = "csr")]
async fn get_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let resp = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

/// Attach Django's CSRF header when the `csrftoken` cookie is readable.
#[cfg(feature = "csr")]
fn with_csrf(builder: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
    match csrf_token() {
        Some(token) => builder.header(CSRF_HEADER, &token),
        None => builder,
    }
}

#[cfg(feature = "csr")]
fn csrf_token() -> Option<String> {
    use wasm_bindgen::JsCast;

    let doc = web_sys::window()?.document()?;
    let cookies = doc.dyn_into::<web_sys::HtmlDocument>().ok()?.cookie().ok()?;
    cookie_value(&cookies, CSRF_COOKIE)
}

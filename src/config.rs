//! Startup configuration resolved at build time.
//!
//! The bundle runs in the browser, so there is no process environment to
//! read at runtime. `DORMITORY_API_BASE` is captured when the crate is
//! compiled; leaving it unset targets the page's own origin.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::state::toast::{ToastConfig, ToastPosition};

/// Id of the DOM element the app mounts into.
pub const DEFAULT_MOUNT_POINT_ID: &str = "app";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// Origin prefix for `/api/...` paths; empty means same origin.
    pub api_base: String,
    pub mount_point_id: String,
    pub toast: ToastConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            mount_point_id: DEFAULT_MOUNT_POINT_ID.to_owned(),
            toast: ToastConfig { position: ToastPosition::TopRight },
        }
    }
}

impl AppConfig {
    /// Build config from variables captured at compile time.
    ///
    /// Optional:
    /// - `DORMITORY_API_BASE`: backend origin, e.g. `http://localhost:8000`
    pub fn from_build_env() -> Self {
        Self::with_api_base(option_env!("DORMITORY_API_BASE"))
    }

    fn with_api_base(raw: Option<&str>) -> Self {
        let api_base = raw.map(str::trim).unwrap_or_default().trim_end_matches('/').to_owned();
        Self { api_base, ..Self::default() }
    }
}

//! # dormitory-client
//!
//! Leptos + WASM frontend for the student dormitory backend.
//!
//! This crate contains the browser bootstrap, the root `App` with routing and
//! toast notifications, the user session store, and REST helpers for the
//! `/api/user/*` endpoints.

pub mod app;
pub mod bootstrap;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;

/// WASM start hook; runs once when the module is instantiated.
///
/// # Errors
///
/// Startup failures are rethrown as JS exceptions.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() -> Result<(), wasm_bindgen::JsValue> {
    bootstrap::mount(config::AppConfig::from_build_env()).map_err(|e| wasm_bindgen::JsValue::from_str(&e.to_string()))
}

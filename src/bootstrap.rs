//! Browser entry point: panic hook, logging, and mounting `App`.
//!
//! Startup is not hardened. A missing window, document or mount element is
//! returned as [`MountError`] and surfaces as an uncaught JS exception.

#[cfg(test)]
#[path = "bootstrap_test.rs"]
mod bootstrap_test;

#[cfg(feature = "csr")]
use crate::config::AppConfig;

#[derive(Debug, thiserror::Error)]
pub enum MountError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("mount point #{0} not found")]
    MissingMountPoint(String),
}

/// Install browser diagnostics and mount the app into `#{mount_point_id}`.
///
/// # Errors
///
/// Returns [`MountError`] when the mount element cannot be resolved.
#[cfg(feature = "csr")]
pub fn mount(config: AppConfig) -> Result<(), MountError> {
    use leptos::prelude::*;
    use wasm_bindgen::JsCast;

    use crate::app::App;

    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    let _ = console_log::init_with_level(level);

    let document = web_sys::window().ok_or(MountError::NoWindow)?.document().ok_or(MountError::NoDocument)?;
    let root = document
        .get_element_by_id(&config.mount_point_id)
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
        .ok_or_else(|| MountError::MissingMountPoint(config.mount_point_id.clone()))?;

    log::info!("mounting into #{}", config.mount_point_id);
    leptos::mount::mount_to(root, move || view! { <App config/> }).forget();
    Ok(())
}

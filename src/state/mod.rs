//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`user`, `toast`) and handed to components
//! through Leptos context by the root `App` component, never through globals.

pub mod toast;
pub mod user;

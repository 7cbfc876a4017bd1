//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read shared state (`AppUserStore`, `RwSignal<ToastState>`)
//! from Leptos context providers installed by `App`.

pub mod roster_panel;
pub mod toast_host;

//! Toast notification stack.
//!
//! The screen corner is chosen once at startup through [`ToastConfig`];
//! components push messages with [`notify`] and `ToastHost` renders them.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use leptos::prelude::*;

/// How long a toast stays visible unless clicked away.
pub const DEFAULT_TIMEOUT_MS: u32 = 5_000;

/// Screen anchor for the toast stack.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastPosition {
    TopLeft,
    TopCenter,
    #[default]
    TopRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl ToastPosition {
    /// BEM modifier appended to the `toast-host` container class.
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::TopLeft => "top-left",
            Self::TopCenter => "top-center",
            Self::TopRight => "top-right",
            Self::BottomLeft => "bottom-left",
            Self::BottomCenter => "bottom-center",
            Self::BottomRight => "bottom-right",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ToastConfig {
    pub position: ToastPosition,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Error,
}

impl ToastKind {
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Visible toasts, oldest first.
#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub position: ToastPosition,
    pub items: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    pub fn new(config: ToastConfig) -> Self {
        Self { position: config.position, items: Vec::new(), next_id: 0 }
    }

    /// Append a toast and return its id.
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Toast { id, kind, message: message.into() });
        id
    }

    /// Remove a toast; unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|toast| toast.id != id);
    }
}

/// Show a toast and schedule its removal after [`DEFAULT_TIMEOUT_MS`].
pub fn notify(toasts: RwSignal<ToastState>, kind: ToastKind, message: impl Into<String>) -> u64 {
    let mut id = 0;
    toasts.update(|state| id = state.push(kind, message));

    #[cfg(feature = "csr")]
    gloo_timers::callback::Timeout::new(DEFAULT_TIMEOUT_MS, move || {
        toasts.update(|state| state.dismiss(id));
    })
    .forget();

    id
}

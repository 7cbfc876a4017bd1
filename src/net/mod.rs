//! Networking modules for the backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues HTTP calls against the `/api/user/*` endpoints and `types`
//! defines the JSON payloads those endpoints return.

pub mod api;
pub mod types;

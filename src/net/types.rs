//! Wire DTOs for the `/api/user/*` endpoints.
//!
//! DESIGN
//! ======
//! The backend omits identity fields for anonymous sessions and may send
//! `null` where a value is unset, so optional fields decode to their defaults
//! rather than failing the whole payload.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

/// Stable primary key of a backend user.
pub type UserId = i64;

/// Payload of `GET /api/user/info/`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    /// Whether the request carried a valid session.
    pub is_authenticated: bool,
    /// Display name; absent for anonymous sessions.
    #[serde(default, deserialize_with = "deserialize_null_as_default")]
    pub username: String,
    /// User key; absent for anonymous sessions.
    #[serde(default)]
    pub user_id: Option<UserId>,
    /// Elevated-privilege flag; absent or `null` means `false`.
    #[serde(default, deserialize_with = "deserialize_null_as_default")]
    pub is_superuser: bool,
}

/// One element of the `GET /api/user/list/` roster, kept exactly as received.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RosterEntry(pub serde_json::Value);

impl RosterEntry {
    pub fn id(&self) -> Option<UserId> {
        self.0.get("id").and_then(serde_json::Value::as_i64)
    }

    pub fn username(&self) -> Option<&str> {
        self.0.get("username").and_then(serde_json::Value::as_str)
    }
}

/// Body of `POST /api/user/login/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest<'a> {
    pub user: &'a str,
    pub password: &'a str,
}

fn deserialize_null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

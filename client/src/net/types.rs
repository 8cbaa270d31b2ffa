//! Wire DTOs for the auth API boundary.
//!
//! DESIGN
//! ======
//! Request bodies are fully typed. Response bodies are decoded leniently
//! (every field optional) so that a missing field can be reported as a
//! contract violation instead of a parse failure.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Body of `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Body of `POST /auth/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterRequest<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

/// Raw 2xx login payload before contract checks.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct LoginResponseBody {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<serde_json::Value>,
}

/// Error envelope carried by non-2xx responses.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ApiMessage {
    #[serde(default)]
    pub message: Option<String>,
}

/// Profile record cached alongside the session token.
///
/// Kept as the raw JSON object the server sent so a store round-trip is
/// lossless. Accessors read the fields the dashboard renders and treat a
/// value of the wrong type as absent.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionUser(serde_json::Map<String, serde_json::Value>);

impl SessionUser {
    /// Non-empty string field `key`, if present.
    pub fn text(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(serde_json::Value::as_str).filter(|value| !value.is_empty())
    }

    pub fn username(&self) -> Option<&str> {
        self.text("username")
    }

    pub fn name(&self) -> Option<&str> {
        self.text("name")
    }

    pub fn email(&self) -> Option<&str> {
        self.text("email")
    }

    /// Account creation time; RFC 3339 text or epoch milliseconds.
    pub fn created_at(&self) -> Option<&serde_json::Value> {
        self.0.get("createdAt")
    }

    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.0.get(key)
    }

    /// Greeting name: `username`, then `name`, then `"User"`.
    pub fn display_name(&self) -> &str {
        self.username().or_else(|| self.name()).unwrap_or("User")
    }
}

impl From<serde_json::Map<String, serde_json::Value>> for SessionUser {
    fn from(fields: serde_json::Map<String, serde_json::Value>) -> Self {
        Self(fields)
    }
}

/// Successful login: the token/user pair that becomes the session.
#[derive(Clone, Debug, PartialEq)]
pub struct LoginSuccess {
    pub token: String,
    pub user: SessionUser,
}

/// Successful registration. The server may echo a message; nothing else is used.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterAck {
    pub message: Option<String>,
}

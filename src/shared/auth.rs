//! Authentication Wire Types
//!
//! Request and response types for the auth endpoints. Passwords only ever
//! live in transient request values; nothing here is persisted.

use serde::{Deserialize, Serialize};

/// User role as stored by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Regular account ("user" on the wire)
    User,
    Admin,
}

/// Response of `GET /auth/check`
///
/// The backend answers 401 with `{"authenticated": false}`, so every field
/// except the flag is optional.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthStatus {
    #[serde(default)]
    pub authenticated: bool,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub role: Option<Role>,
}

impl AuthStatus {
    /// Name shown in the user-display region: full name, falling back to
    /// the username.
    pub fn display_name(&self) -> &str {
        self.full_name
            .as_deref()
            .filter(|n| !n.is_empty())
            .or(self.username.as_deref())
            .unwrap_or_default()
    }

    pub fn is_admin(&self) -> bool {
        self.role == Some(Role::Admin)
    }
}

/// Login form payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Registration form input. `confirm_password` is checked locally and
/// never serialized.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub full_name: String,
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(skip)]
    pub confirm_password: String,
}

/// Mutation response envelope used by every POST/PUT/DELETE endpoint.
///
/// Success bodies look like `{"success": true, "message": "..."}`; error
/// bodies are `{"error": "..."}` with no `success` key at all, so the flag
/// defaults to false.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiOutcome {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ApiOutcome {
    /// Server-supplied error text, or the given fallback
    pub fn error_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.error
            .as_deref()
            .filter(|e| !e.is_empty())
            .unwrap_or(fallback)
    }
}

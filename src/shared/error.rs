//! Shared Error Types
//!
//! Error types for talking to the student-records backend. Authorization
//! failures (401/403) get their own variants because the page handlers
//! route them differently from plain transport failures.

use thiserror::Error;

/// Errors produced by the API client
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network-level failure (connection refused, DNS, TLS, timeout)
    #[error("Network error: {0}")]
    Transport(#[source] reqwest::Error),

    /// The response body could not be parsed as the expected JSON shape
    #[error("Failed to parse response: {0}")]
    Decode(#[source] reqwest::Error),

    /// 401 - no valid session
    #[error("Not authenticated")]
    Unauthorized,

    /// 403 - authenticated but not allowed to touch this record
    #[error("Permission denied")]
    Forbidden,
}

impl ApiError {
    /// Classify a reqwest error: decode failures are reported separately
    /// from transport failures.
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err)
        } else {
            Self::Transport(err)
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        Self::from_reqwest(err)
    }
}

/// Local form-validation failures, checked before any request is sent.
///
/// The `Display` strings are shown to the user verbatim.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Password must be at least 6 characters")]
    PasswordTooShort,

    #[error("Username must be at least 3 characters")]
    UsernameTooShort,

    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("Name, email and course are required")]
    MissingStudentFields,

    #[error("Please enter username and password")]
    MissingCredentials,
}

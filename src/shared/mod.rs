//! Types shared with the student-records backend
//!
//! Everything in here mirrors the backend's JSON contract: student
//! records, auth payloads, the mutation response envelope, and the error
//! types the client surfaces when a call goes wrong.

pub mod auth;
pub mod error;
pub mod student;

pub use auth::{ApiOutcome, AuthStatus, Credentials, Registration, Role};
pub use error::{ApiError, ValidationError};
pub use student::{Student, StudentDraft, StudentUpdate};

//! Form Validators
//!
//! Pure checks run before any network call. The first failing rule wins
//! and its message is shown to the user as-is.

use std::sync::OnceLock;

use regex::Regex;

use crate::shared::{Credentials, Registration, ValidationError};

/// Permissive email shape: something@something.something, with no
/// whitespace and no second `@` inside any segment. Not RFC validation.
fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"))
}

/// Check an email address against the permissive shape
pub fn is_valid_email(email: &str) -> bool {
    email_regex().is_match(email)
}

/// Validate a login form: both fields must be present
pub fn validate_login(credentials: &Credentials) -> Result<(), ValidationError> {
    if credentials.username.is_empty() || credentials.password.is_empty() {
        return Err(ValidationError::MissingCredentials);
    }
    Ok(())
}

/// Validate a registration form.
///
/// Rule order matches the user-visible behavior: password confirmation,
/// password length, username length, email shape.
pub fn validate_registration(form: &Registration) -> Result<(), ValidationError> {
    if form.password != form.confirm_password {
        return Err(ValidationError::PasswordMismatch);
    }
    if form.password.chars().count() < 6 {
        return Err(ValidationError::PasswordTooShort);
    }
    if form.username.chars().count() < 3 {
        return Err(ValidationError::UsernameTooShort);
    }
    if !is_valid_email(&form.email) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

/// Validate the student create/update form: name, email and course are
/// required, and the email must look like an email.
pub fn validate_student_fields(
    name: &str,
    email: &str,
    course: &str,
) -> Result<(), ValidationError> {
    if name.is_empty() || email.is_empty() || course.is_empty() {
        return Err(ValidationError::MissingStudentFields);
    }
    if !is_valid_email(email) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

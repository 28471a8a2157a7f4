//! Client-side form validation.
//!
//! Forms call these before any request is built; a rejected form never
//! reaches the network. Post rules mirror the API's own limits.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use crate::net::types::{LoginRequest, PostPayload, RegisterRequest};

pub const TITLE_MIN_CHARS: usize = 3;
pub const TITLE_MAX_CHARS: usize = 100;
pub const CONTENT_MIN_CHARS: usize = 10;
pub const CONTENT_MAX_CHARS: usize = 5000;
pub const PASSWORD_MIN_CHARS: usize = 6;

/// Per-field messages for a rejected form, in field order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(Vec<(&'static str, &'static str)>);

impl FieldErrors {
    fn push(&mut self, field: &'static str, message: &'static str) {
        self.0.push((field, message));
    }

    /// First message recorded for `field`.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&'static str> {
        self.0.iter().find(|(f, _)| *f == field).map(|(_, m)| *m)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() { Ok(value) } else { Err(self) }
    }
}

/// Validate the post editor. Lengths are counted in characters and the input
/// is not trimmed.
///
/// # Errors
///
/// Returns every failing field with its message.
pub fn validate_post_form(title: &str, content: &str, is_published: bool) -> Result<PostPayload, FieldErrors> {
    let mut errors = FieldErrors::default();

    let title_len = title.chars().count();
    if title_len < TITLE_MIN_CHARS {
        errors.push("title", "Title must be at least 3 characters");
    } else if title_len > TITLE_MAX_CHARS {
        errors.push("title", "Title must be less than 100 characters");
    }

    let content_len = content.chars().count();
    if content_len < CONTENT_MIN_CHARS {
        errors.push("content", "Content must be at least 10 characters");
    } else if content_len > CONTENT_MAX_CHARS {
        errors.push("content", "Content must be less than 5000 characters");
    }

    errors.into_result(PostPayload { title: title.to_owned(), content: content.to_owned(), is_published })
}

/// Validate the login form. The email is trimmed; the password is sent as typed.
///
/// # Errors
///
/// Returns every failing field with its message.
pub fn validate_login_form(email: &str, password: &str) -> Result<LoginRequest, FieldErrors> {
    let mut errors = FieldErrors::default();
    let email = email.trim();
    check_email(email, &mut errors);
    if password.is_empty() {
        errors.push("password", "Password is required");
    }
    errors.into_result(LoginRequest { email: email.to_owned(), password: password.to_owned() })
}

/// Validate the registration form.
///
/// # Errors
///
/// Returns every failing field with its message.
pub fn validate_register_form(name: &str, email: &str, password: &str) -> Result<RegisterRequest, FieldErrors> {
    let mut errors = FieldErrors::default();
    let name = name.trim();
    let email = email.trim();
    if name.is_empty() {
        errors.push("name", "Name is required");
    }
    check_email(email, &mut errors);
    if password.chars().count() < PASSWORD_MIN_CHARS {
        errors.push("password", "Password must be at least 6 characters");
    }
    errors.into_result(RegisterRequest {
        name: name.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
    })
}

fn check_email(email: &str, errors: &mut FieldErrors) {
    if email.is_empty() {
        errors.push("email", "Email is required");
    } else if !email.contains('@') {
        errors.push("email", "Enter a valid email address");
    }
}

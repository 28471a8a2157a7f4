//! User-initiated flows: validate, call the API, update the session.
//!
//! Views call these from event handlers and only render the outcome, so the
//! ordering rules (validation before any request, session update after a
//! successful login, session cleared on logout even if the call fails) live
//! in one place.

#[cfg(test)]
#[path = "actions_test.rs"]
mod actions_test;

use crate::net::api::ApiClient;
use crate::net::error::ApiError;
use crate::net::transport::Transport;
use crate::net::types::{Post, User};
use crate::util::validate::{FieldErrors, validate_login_form, validate_post_form, validate_register_form};

/// Why a form submission did not succeed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    /// Rejected locally; no request was sent.
    #[error("form has invalid fields")]
    Invalid(FieldErrors),

    #[error(transparent)]
    Api(#[from] ApiError),
}

impl SubmitError {
    /// Message for a field, when the form was rejected locally.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&'static str> {
        match self {
            Self::Invalid(errors) => errors.get(name),
            Self::Api(_) => None,
        }
    }

    /// Form-level message for API failures.
    #[must_use]
    pub fn banner(&self) -> Option<String> {
        match self {
            Self::Invalid(_) => None,
            Self::Api(e) => Some(e.user_message()),
        }
    }
}

/// Log in and publish the user to the session store.
///
/// # Errors
///
/// Returns [`SubmitError::Invalid`] without any request when the form is
/// invalid, or the API error from `/login`.
pub async fn sign_in<T: Transport>(api: &ApiClient<T>, email: &str, password: &str) -> Result<User, SubmitError> {
    let credentials = validate_login_form(email, password).map_err(SubmitError::Invalid)?;
    let response = api.login(&credentials).await?;
    api.session().set_authenticated(response.user.clone());
    Ok(response.user)
}

/// Create an account. Returns the server's confirmation message.
///
/// # Errors
///
/// Returns [`SubmitError::Invalid`] without any request when the form is
/// invalid, or the API error from `/register`.
pub async fn register_account<T: Transport>(
    api: &ApiClient<T>,
    name: &str,
    email: &str,
    password: &str,
) -> Result<String, SubmitError> {
    let account = validate_register_form(name, email, password).map_err(SubmitError::Invalid)?;
    let response = api.register(&account).await?;
    Ok(response.message)
}

/// Log out. The local session is cleared whether or not the server call
/// succeeds.
pub async fn sign_out<T: Transport>(api: &ApiClient<T>) {
    if let Err(e) = api.logout().await {
        log::warn!("logout request failed: {e}");
    }
    api.session().set_anonymous();
}

/// Create a post, or update `post_id` when editing.
///
/// # Errors
///
/// Returns [`SubmitError::Invalid`] without any request when the form is
/// invalid, or the API error from the create/update call.
pub async fn save_post<T: Transport>(
    api: &ApiClient<T>,
    post_id: Option<u64>,
    title: &str,
    content: &str,
    is_published: bool,
) -> Result<Post, SubmitError> {
    let payload = validate_post_form(title, content, is_published).map_err(SubmitError::Invalid)?;
    let post = match post_id {
        Some(id) => api.update_post(id, &payload).await?,
        None => api.create_post(&payload).await?,
    };
    Ok(post)
}

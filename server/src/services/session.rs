//! Session verification against the posts API.
//!
//! The server never validates the session token itself; it forwards the
//! browser's cookies to `/verify-cookie-token` and trusts the answer.

use axum::http::header::COOKIE;
use client::net::types::VerifySessionResponse;

#[derive(Debug, thiserror::Error)]
pub enum VerifyError {
    #[error("verify request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("verify endpoint returned status {0}")]
    Status(u16),
}

/// Ask the API whether the cookies in `cookie_header` carry a valid session.
///
/// Authenticated means the API reported `isAuthenticated` and included a
/// user.
///
/// # Errors
///
/// Returns an error if the request fails, the API answers with a non-2xx
/// status, or the body does not decode.
pub async fn verify_session(http: &reqwest::Client, api_url: &str, cookie_header: &str) -> Result<bool, VerifyError> {
    let response = http
        .get(format!("{api_url}/verify-cookie-token"))
        .header(COOKIE, cookie_header)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(VerifyError::Status(status.as_u16()));
    }

    let body: VerifySessionResponse = response.json().await?;
    Ok(body.into_authenticated_user().is_some())
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;

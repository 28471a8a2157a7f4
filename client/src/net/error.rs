//! Error taxonomy for API calls.
//!
//! ERROR HANDLING
//! ==============
//! `Unauthorized` is handled globally by the gateway (session reset and
//! redirect) before it reaches the caller; every other variant is the calling
//! view's job to turn into a message.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use super::types::ErrorBody;

/// Errors produced by [`crate::net::api::ApiClient`] calls.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced an HTTP response (offline, CORS, DNS).
    #[error("network error: {0}")]
    Transport(String),

    /// The server answered 401.
    #[error("unauthorized: {message}")]
    Unauthorized { message: String },

    /// The server answered with any other non-2xx status.
    #[error("server error {status}: {message}")]
    Server { status: u16, message: String },

    /// A request body could not be serialized.
    #[error("request encode failed: {0}")]
    Encode(String),

    /// A 2xx body did not match the expected shape.
    #[error("response decode failed: {0}")]
    Decode(String),

    /// HTTP calls are only made from the browser.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Build the error for a non-2xx response, preferring the API's
    /// `{ "error": ... }` message over the raw body.
    #[must_use]
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = error_message(body);
        if status == 401 { Self::Unauthorized { message } } else { Self::Server { status, message } }
    }

    /// HTTP status, when the server responded at all.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized { .. } => Some(401),
            Self::Server { status, .. } => Some(*status),
            Self::Transport(_) | Self::Encode(_) | Self::Decode(_) | Self::Unavailable => None,
        }
    }

    /// Text suitable for showing next to the action that failed.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Unauthorized { message } | Self::Server { message, .. } if !message.is_empty() => {
                message.clone()
            }
            Self::Unauthorized { .. } => "Your session has expired. Please sign in again.".to_owned(),
            Self::Server { status, .. } => format!("Request failed ({status})."),
            Self::Transport(_) => "Could not reach the server. Check your connection.".to_owned(),
            Self::Encode(_) => "Could not prepare the request.".to_owned(),
            Self::Decode(_) => "Unexpected response from the server.".to_owned(),
            Self::Unavailable => "Not available.".to_owned(),
        }
    }
}

fn error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) => parsed.error.trim().to_owned(),
        Err(_) => body.trim().to_owned(),
    }
}

//! API gateway for the posts REST API.
//!
//! Every call goes through [`ApiClient::send`], which resolves the URL, hands
//! the request to the [`Transport`], and applies the status policy:
//!
//! - 2xx: the body is returned to the caller.
//! - 401: the session store is reset to anonymous and the browser is sent to
//!   the login view, then the error is still returned to the caller.
//! - anything else: returned as an error, no side effects.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics so API failures degrade UI
//! behavior without crashing hydration.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::transport::{ApiRequest, BrowserTransport, Method, RawResponse, Transport};
use super::types::{
    AuthResponse, LoginRequest, MessageResponse, Post, PostPayload, PostWithAuthor, RegisterRequest, User,
    VerifySessionResponse,
};
use crate::config::LOGIN_PATH;
use crate::state::session::SessionStore;
use crate::util::navigate::Navigator;

fn post_endpoint(id: u64) -> String {
    format!("/posts/{id}")
}

/// HTTP client bound to one API base URL and one session store.
#[derive(Clone)]
pub struct ApiClient<T = BrowserTransport> {
    base_url: String,
    transport: T,
    session: SessionStore,
    navigator: Navigator,
}

impl ApiClient<BrowserTransport> {
    /// Browser client for the configured base URL.
    #[must_use]
    pub fn browser(session: SessionStore) -> Self {
        Self::new(crate::config::api_base_url(), BrowserTransport, session, Navigator::browser())
    }
}

impl<T: Transport> ApiClient<T> {
    pub fn new(base_url: impl Into<String>, transport: T, session: SessionStore, navigator: Navigator) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self { base_url, transport, session, navigator }
    }

    #[must_use]
    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    // =========================================================================
    // GENERIC REQUESTS
    // =========================================================================

    /// Send a request and decode a JSON success body.
    ///
    /// # Errors
    ///
    /// Returns the transport error, the status error (after the 401 policy
    /// has run), or a decode error when a 2xx body has the wrong shape.
    pub async fn request<R: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<R, ApiError> {
        let response = self.send(method, path, body).await?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Send a request whose success body is ignored.
    ///
    /// # Errors
    ///
    /// Returns the transport error or the status error.
    pub async fn request_empty(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<(), ApiError> {
        self.send(method, path, body).await.map(|_| ())
    }

    async fn send(&self, method: Method, path: &str, body: Option<serde_json::Value>) -> Result<RawResponse, ApiError> {
        let request = ApiRequest { method, url: format!("{}{path}", self.base_url), body };
        let response = self.transport.send(request).await.inspect_err(|e| {
            log::debug!("{} {path} failed before a response: {e}", method.as_str());
        })?;
        if response.is_success() {
            return Ok(response);
        }

        let err = ApiError::from_status(response.status, &response.body);
        if matches!(err, ApiError::Unauthorized { .. }) {
            self.on_unauthorized(method, path);
        }
        Err(err)
    }

    /// Global 401 policy: forget the session locally and go to login.
    fn on_unauthorized(&self, method: Method, path: &str) {
        if self.session.set_anonymous() {
            log::warn!("{} {path} returned 401; clearing session", method.as_str());
        } else {
            log::debug!("{} {path} returned 401 with no active session", method.as_str());
        }
        self.navigator.go(LOGIN_PATH);
    }

    // =========================================================================
    // AUTH ENDPOINTS
    // =========================================================================

    /// `POST /login`
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request fails or credentials are rejected.
    pub async fn login(&self, credentials: &LoginRequest) -> Result<AuthResponse, ApiError> {
        self.request(Method::Post, "/login", Some(json_body(credentials)?)).await
    }

    /// `POST /register`
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request fails or registration is rejected.
    pub async fn register(&self, account: &RegisterRequest) -> Result<MessageResponse, ApiError> {
        self.request(Method::Post, "/register", Some(json_body(account)?)).await
    }

    /// `POST /logout`
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request fails.
    pub async fn logout(&self) -> Result<(), ApiError> {
        self.request_empty(Method::Post, "/logout", None).await
    }

    /// `GET /me`
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request fails.
    pub async fn current_user(&self) -> Result<User, ApiError> {
        self.request(Method::Get, "/me", None).await
    }

    /// `GET /verify-cookie-token`
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request fails.
    pub async fn verify_session(&self) -> Result<VerifySessionResponse, ApiError> {
        self.request(Method::Get, "/verify-cookie-token", None).await
    }

    // =========================================================================
    // POST ENDPOINTS
    // =========================================================================

    /// `GET /posts`
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request fails.
    pub async fn list_posts(&self) -> Result<Vec<Post>, ApiError> {
        self.request(Method::Get, "/posts", None).await
    }

    /// `GET /post-detail`: every post with its author.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request fails.
    pub async fn list_posts_with_author(&self) -> Result<Vec<PostWithAuthor>, ApiError> {
        self.request(Method::Get, "/post-detail", None).await
    }

    /// `GET /posts/{id}`
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request fails.
    pub async fn get_post(&self, id: u64) -> Result<Post, ApiError> {
        self.request(Method::Get, &post_endpoint(id), None).await
    }

    /// `GET /posts/my`: posts owned by the session user.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request fails.
    pub async fn my_posts(&self) -> Result<Vec<Post>, ApiError> {
        self.request(Method::Get, "/posts/my", None).await
    }

    /// `POST /posts`
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request fails.
    pub async fn create_post(&self, post: &PostPayload) -> Result<Post, ApiError> {
        self.request(Method::Post, "/posts", Some(json_body(post)?)).await
    }

    /// `PUT /posts/{id}`
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request fails.
    pub async fn update_post(&self, id: u64, post: &PostPayload) -> Result<Post, ApiError> {
        self.request(Method::Put, &post_endpoint(id), Some(json_body(post)?)).await
    }

    /// `DELETE /posts/{id}`
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request fails.
    pub async fn delete_post(&self, id: u64) -> Result<(), ApiError> {
        self.request_empty(Method::Delete, &post_endpoint(id), None).await
    }
}

fn json_body<B: Serialize>(body: &B) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(body).map_err(|e| ApiError::Encode(e.to_string()))
}

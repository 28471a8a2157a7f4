//! Wire DTOs for the posts REST API.
//!
//! DESIGN
//! ======
//! Field names follow the API's JSON exactly: posts and users are snake_case,
//! while the session-verification payload is camelCase. Users and posts are
//! opaque server values; the client never edits them in place.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

/// An account as returned by `/me`, `/login` and `/verify-cookie-token`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

/// A post row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    /// Owner of the post.
    pub user_id: u64,
    pub title: String,
    pub content: String,
    pub is_published: bool,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

/// A post with its author embedded, as returned by `/post-detail`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostWithAuthor {
    #[serde(flatten)]
    pub post: Post,
    pub user: User,
}

/// Body for `POST /posts` and `PUT /posts/{id}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostPayload {
    pub title: String,
    pub content: String,
    pub is_published: bool,
}

impl From<&Post> for PostPayload {
    fn from(post: &Post) -> Self {
        Self {
            title: post.title.clone(),
            content: post.content.clone(),
            is_published: post.is_published,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Successful `POST /login` response. The session cookie arrives alongside it.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub token: String,
    pub user: User,
}

/// Generic `{ "message": ... }` acknowledgement (register, logout).
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}

/// Error body returned by the API on non-2xx responses.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Response of `GET /verify-cookie-token`.
///
/// The server answers 200 in every case; an anonymous visitor gets
/// `isAuthenticated: false` and a zero-valued (or missing) `user`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifySessionResponse {
    #[serde(default, deserialize_with = "deserialize_present_user")]
    pub user: Option<User>,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub is_authenticated: bool,
    #[serde(default)]
    pub is_loading: bool,
}

impl VerifySessionResponse {
    /// The verified user, if the payload describes an authenticated session.
    ///
    /// Both the flag and a user are required; either one alone is treated as
    /// anonymous.
    #[must_use]
    pub fn into_authenticated_user(self) -> Option<User> {
        if self.is_authenticated { self.user } else { None }
    }
}

/// Maps `null`, a missing field, and the zero-valued user (`id == 0`) to `None`.
fn deserialize_present_user<'de, D>(deserializer: D) -> Result<Option<User>, D::Error>
where
    D: Deserializer<'de>,
{
    let user = Option::<User>::deserialize(deserializer)?;
    Ok(user.filter(|u| u.id != 0))
}

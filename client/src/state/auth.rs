//! Auth-session value for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Held by [`super::session::SessionStore`] and read by the route guard and
//! any user-aware view. Fields are private so every value is built through a
//! constructor that keeps `is_authenticated` and `user` in agreement.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Authentication state: who is signed in and whether that is known yet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    user: Option<User>,
    is_authenticated: bool,
    is_loading: bool,
}

impl Default for AuthState {
    /// Application start: nothing verified yet.
    fn default() -> Self {
        Self::loading()
    }
}

impl AuthState {
    /// Initial state before the session has been verified.
    #[must_use]
    pub fn loading() -> Self {
        Self { user: None, is_authenticated: false, is_loading: true }
    }

    #[must_use]
    pub fn authenticated(user: User) -> Self {
        Self { user: Some(user), is_authenticated: true, is_loading: false }
    }

    #[must_use]
    pub fn anonymous() -> Self {
        Self { user: None, is_authenticated: false, is_loading: false }
    }

    #[must_use]
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.is_authenticated
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }
}

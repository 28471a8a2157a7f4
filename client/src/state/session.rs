//! Session store: the single owner of the current [`AuthState`].
//!
//! DESIGN
//! ======
//! The state lives in a reactive signal, so every effect or view that reads
//! it through [`SessionStore::get`] is a subscriber and re-runs on change.
//! Writes go through the three `set_*` methods only; a write that leaves the
//! state unchanged does not notify.
//!
//! All reads and writes happen on the UI thread.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use super::auth::AuthState;
use crate::net::types::User;

#[derive(Clone)]
pub struct SessionStore {
    state: ArcRwSignal<AuthState>,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    /// A store in the initial loading state.
    #[must_use]
    pub fn new() -> Self {
        Self { state: ArcRwSignal::new(AuthState::loading()) }
    }

    /// Current state, subscribing the running effect (if any).
    #[must_use]
    pub fn get(&self) -> AuthState {
        self.state.get()
    }

    /// Current state without subscribing.
    #[must_use]
    pub fn snapshot(&self) -> AuthState {
        self.state.get_untracked()
    }

    /// Publish `user` as signed in. Returns whether the state changed.
    pub fn set_authenticated(&self, user: User) -> bool {
        self.replace(AuthState::authenticated(user))
    }

    /// Drop the current user. Used by logout, failed verification and the
    /// gateway's 401 policy. Returns whether the state changed.
    pub fn set_anonymous(&self) -> bool {
        self.replace(AuthState::anonymous())
    }

    fn replace(&self, next: AuthState) -> bool {
        let mut changed = false;
        self.state.maybe_update(|current| {
            if *current == next {
                return false;
            }
            *current = next;
            changed = true;
            true
        });
        changed
    }
}

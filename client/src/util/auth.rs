//! Route guard: keeps the current view consistent with the session.
//!
//! SYSTEM CONTEXT
//! ==============
//! Installed once by `AuthProvider`. It stays silent until the bootstrapper
//! has finished, then redirects anonymous visitors away from protected views
//! and signed-in users away from the login/register views. This is a UX
//! guard only; the API enforces access on every request.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::config::{LANDING_PATH, LOGIN_PATH, is_public_route};
use crate::state::auth::AuthState;
use crate::state::bootstrap::Bootstrapper;
use crate::state::session::SessionStore;

/// Where the guard sends the user from `path`, if anywhere.
#[must_use]
pub fn guard_redirect(initialized: bool, state: &AuthState, path: &str) -> Option<&'static str> {
    if !initialized || state.is_loading() {
        return None;
    }
    let public = is_public_route(path);
    if !state.is_authenticated() && !public {
        Some(LOGIN_PATH)
    } else if state.is_authenticated() && public {
        Some(LANDING_PATH)
    } else {
        None
    }
}

/// Whether the provider may render route content instead of the spinner.
///
/// False while verification is pending and while a redirect is about to
/// happen, so protected content never flashes for an anonymous visitor.
#[must_use]
pub fn can_render(initialized: bool, state: &AuthState, path: &str) -> bool {
    initialized && !state.is_loading() && guard_redirect(initialized, state, path).is_none()
}

/// Redirect whenever the session, the bootstrap phase or the path changes.
pub fn install_route_guard<F>(session: SessionStore, boot: Bootstrapper, pathname: Memo<String>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let initialized = boot.is_initialized();
        let state = session.get();
        let path = pathname.get();
        if let Some(target) = guard_redirect(initialized, &state, &path) {
            log::debug!("route guard: {path} -> {target}");
            navigate(target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}

//! Request-time redirect filter.
//!
//! SYSTEM CONTEXT
//! ==============
//! Runs before the Leptos SSR handler, so a visitor who already holds a
//! session cookie never sees the login or register view rendered. The check
//! is cookie presence only; a stale cookie is corrected by the client-side
//! guard after verification. The site root is resolved here too, with a real
//! verification call, since it has no view of its own.

use axum::extract::{Request, State};
use axum::http::header::COOKIE;
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::CookieJar;
use client::config::{LANDING_PATH, LOGIN_PATH, is_public_route};

use crate::services::session;
use crate::state::AppState;

/// Whether the filter looks at `path` at all: the public views and the
/// dashboard subtree.
#[must_use]
pub fn edge_matches(path: &str) -> bool {
    is_public_route(path)
        || path == LANDING_PATH
        || path.strip_prefix(LANDING_PATH).is_some_and(|rest| rest.starts_with('/'))
}

/// Short-circuit target for a request, or `None` to pass it through.
#[must_use]
pub fn edge_redirect_target(path: &str, has_session_cookie: bool) -> Option<&'static str> {
    (has_session_cookie && edge_matches(path) && is_public_route(path)).then_some(LANDING_PATH)
}

/// Axum middleware applying [`edge_redirect_target`] and the root redirect.
pub async fn edge_filter(State(state): State<AppState>, jar: CookieJar, request: Request, next: Next) -> Response {
    let path = request.uri().path();

    if path == "/" {
        let cookie_header = request.headers().get(COOKIE).and_then(|v| v.to_str().ok()).map(str::to_owned);
        let target = root_target(&state, cookie_header.as_deref()).await;
        tracing::debug!(location = %target, "root redirect");
        return Redirect::temporary(target).into_response();
    }

    let has_cookie = jar.get(&state.config.session_cookie).is_some_and(|c| !c.value().is_empty());
    if let Some(target) = edge_redirect_target(path, has_cookie) {
        tracing::debug!(%path, location = %target, "session cookie present; skipping public view");
        return Redirect::temporary(target).into_response();
    }

    next.run(request).await
}

/// Landing view when the API confirms the forwarded cookies, else login.
async fn root_target(state: &AppState, cookie_header: Option<&str>) -> &'static str {
    let Some(cookie_header) = cookie_header else {
        return LOGIN_PATH;
    };

    match session::verify_session(&state.http, &state.config.api_url, cookie_header).await {
        Ok(true) => LANDING_PATH,
        Ok(false) => LOGIN_PATH,
        Err(e) => {
            tracing::warn!(error = %e, "session verification failed");
            LOGIN_PATH
        }
    }
}

#[cfg(test)]
#[path = "edge_test.rs"]
mod tests;

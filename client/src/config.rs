//! Site configuration and route constants.
//!
//! SYSTEM CONTEXT
//! ==============
//! The API base URL is the only environment-driven setting. The browser bundle
//! bakes it in at compile time; the server resolves it at runtime through
//! [`resolve_api_base_url`] so both sides agree on defaults and trimming.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Environment variable selecting the API base URL.
pub const API_URL_ENV: &str = "POSTDESK_API_URL";
/// Base URL used when [`API_URL_ENV`] is unset or blank.
pub const DEFAULT_API_URL: &str = "http://localhost:8080/api";

/// Name of the server-issued session cookie.
pub const SESSION_COOKIE: &str = "authToken";

pub const LOGIN_PATH: &str = "/login";
pub const REGISTER_PATH: &str = "/register";
/// Where authenticated users land.
pub const LANDING_PATH: &str = "/dashboard";
pub const POSTS_PATH: &str = "/posts";
/// Views reachable without a session. Everything else is protected.
pub const PUBLIC_ROUTES: [&str; 2] = [LOGIN_PATH, REGISTER_PATH];

pub const SITE_NAME: &str = "Postdesk";
pub const SITE_DESCRIPTION: &str = "Simple Post Management";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub title: &'static str,
    pub href: &'static str,
}

/// Navigation shown on authenticated views.
pub const DASHBOARD_NAV: [NavItem; 2] = [
    NavItem { title: "Dashboard", href: LANDING_PATH },
    NavItem { title: "Posts", href: POSTS_PATH },
];

/// Whether `path` is a public-only view (login, register).
#[must_use]
pub fn is_public_route(path: &str) -> bool {
    PUBLIC_ROUTES.contains(&path)
}

/// Normalize a raw base URL setting: blank falls back to the default, and a
/// trailing `/` is dropped so endpoint paths can be appended directly.
#[must_use]
pub fn resolve_api_base_url(raw: Option<&str>) -> String {
    let value = raw.map(str::trim).filter(|v| !v.is_empty()).unwrap_or(DEFAULT_API_URL);
    value.trim_end_matches('/').to_owned()
}

/// API base URL compiled into this build.
#[must_use]
pub fn api_base_url() -> String {
    resolve_api_base_url(option_env!("POSTDESK_API_URL"))
}

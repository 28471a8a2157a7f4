//! Server configuration parsed from environment variables.

use client::config::{API_URL_ENV, SESSION_COOKIE, resolve_api_base_url};

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Remote posts API base URL, without trailing `/`.
    pub api_url: String,
    /// Cookie whose presence marks a (possibly stale) session.
    pub session_cookie: String,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `POSTDESK_API_URL`: default `http://localhost:8080/api`
    /// - `SESSION_COOKIE`: default `authToken`
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` is set but is not a valid port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Self::from_env`], reading values through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` is set but is not a valid port number.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT").map(|raw| raw.trim().to_owned()).filter(|raw| !raw.is_empty()) {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };
        let api_url = resolve_api_base_url(lookup(API_URL_ENV).as_deref());
        let session_cookie = lookup("SESSION_COOKIE")
            .map(|raw| raw.trim().to_owned())
            .filter(|raw| !raw.is_empty())
            .unwrap_or_else(|| SESSION_COOKIE.to_owned());

        Ok(Self { port, api_url, session_cookie })
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into the edge middleware via `State`. It holds the
//! parsed config and one pooled HTTP client for calls to the posts API.
//! `GET /` waits on that client, so it carries request and connect timeouts.

use std::sync::Arc;
use std::time::Duration;

use crate::config::ServerConfig;

pub const VERIFY_TIMEOUT_SECS: u64 = 5;
pub const VERIFY_CONNECT_TIMEOUT_SECS: u64 = 2;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub http: reqwest::Client,
}

impl AppState {
    /// State with the default verification timeouts.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: ServerConfig) -> Result<Self, reqwest::Error> {
        Self::with_timeouts(
            config,
            Duration::from_secs(VERIFY_TIMEOUT_SECS),
            Duration::from_secs(VERIFY_CONNECT_TIMEOUT_SECS),
        )
    }

    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn with_timeouts(config: ServerConfig, timeout: Duration, connect_timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(timeout).connect_timeout(connect_timeout).build()?;
        Ok(Self { config: Arc::new(config), http })
    }
}

//! Raw HTTP transport seam beneath the API gateway.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, always sending the
//! session cookie (`credentials: include`).
//! Server-side (SSR): every call fails with `ApiError::Unavailable`, since the
//! session cookie only lives in the browser.

#![allow(clippy::unused_async)]

use std::future::Future;

use super::error::ApiError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

/// A fully resolved outbound request.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub body: Option<serde_json::Value>,
}

/// Status and body of any response, successful or not.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends a request and returns whatever the server answered.
///
/// Implementations report only transport failures as errors; status handling
/// belongs to the gateway.
pub trait Transport {
    fn send(&self, request: ApiRequest) -> impl Future<Output = Result<RawResponse, ApiError>>;
}

/// Browser `fetch` transport.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

impl Transport for BrowserTransport {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::Request;
            use web_sys::RequestCredentials;

            let transport_err = |e: gloo_net::Error| ApiError::Transport(e.to_string());
            let builder = match request.method {
                Method::Get => Request::get(&request.url),
                Method::Post => Request::post(&request.url),
                Method::Put => Request::put(&request.url),
                Method::Delete => Request::delete(&request.url),
            }
            .credentials(RequestCredentials::Include)
            .header("Accept", "application/json");

            let req = match &request.body {
                Some(body) => builder.json(body).map_err(transport_err)?,
                None => builder.build().map_err(transport_err)?,
            };
            let resp = req.send().await.map_err(transport_err)?;
            let status = resp.status();
            let body = resp.text().await.map_err(transport_err)?;
            Ok(RawResponse { status, body })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(ApiError::Unavailable)
        }
    }
}

use axum::Router;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::get;

use super::*;

/// Serve `router` on an ephemeral port and return its `/api` base URL.
async fn spawn_api(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}/api")
}

/// Fake verify endpoint: authenticated only when `authToken=good` is sent.
fn fake_verify_api() -> Router {
    Router::new().route(
        "/api/verify-cookie-token",
        get(|headers: HeaderMap| async move {
            let cookie = headers.get(COOKIE).and_then(|v| v.to_str().ok()).unwrap_or_default();
            if cookie.contains("authToken=good") {
                r#"{"user":{"id":7,"name":"Alice","email":"a@example.com"},"token":"good","isAuthenticated":true,"isLoading":false}"#
            } else {
                r#"{"user":null,"token":null,"isAuthenticated":false,"isLoading":false}"#
            }
        }),
    )
}

// =============================================================================
// verify_session
// =============================================================================

#[tokio::test]
async fn forwards_cookie_and_reports_authenticated() {
    let api = spawn_api(fake_verify_api()).await;
    let http = reqwest::Client::new();

    assert!(verify_session(&http, &api, "theme=dark; authToken=good").await.unwrap());
}

#[tokio::test]
async fn stale_cookie_is_not_authenticated() {
    let api = spawn_api(fake_verify_api()).await;
    let http = reqwest::Client::new();

    assert!(!verify_session(&http, &api, "authToken=expired").await.unwrap());
}

#[tokio::test]
async fn flag_without_user_is_not_authenticated() {
    let api = spawn_api(Router::new().route(
        "/api/verify-cookie-token",
        get(|| async { r#"{"user":{"id":0,"name":"","email":""},"isAuthenticated":true,"isLoading":false}"# }),
    ))
    .await;
    let http = reqwest::Client::new();

    assert!(!verify_session(&http, &api, "authToken=x").await.unwrap());
}

#[tokio::test]
async fn non_success_status_is_error() {
    let api = spawn_api(Router::new().route(
        "/api/verify-cookie-token",
        get(|| async { (StatusCode::UNAUTHORIZED, r#"{"error":"unauthorized"}"#) }),
    ))
    .await;
    let http = reqwest::Client::new();

    let err = verify_session(&http, &api, "authToken=x").await.unwrap_err();
    assert!(matches!(err, VerifyError::Status(401)));
}

#[tokio::test]
async fn malformed_body_is_error() {
    let api = spawn_api(Router::new().route("/api/verify-cookie-token", get(|| async { "not json" }))).await;
    let http = reqwest::Client::new();

    let err = verify_session(&http, &api, "authToken=x").await.unwrap_err();
    assert!(matches!(err, VerifyError::Request(_)));
}

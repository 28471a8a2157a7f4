use futures::executor::block_on;

use super::*;
use crate::net::testing::{FakeTransport, TEST_BASE_URL, test_client};
use crate::state::auth::AuthState;

const USER_JSON: &str = r#"{"id":7,"name":"Alice","email":"alice@example.com","created_at":"t","updated_at":"t"}"#;
const POST_JSON: &str = r#"{"id":3,"user_id":7,"title":"Hello","content":"Hello world!","is_published":true,"created_at":"t","updated_at":"t"}"#;
const UNAUTHORIZED_BODY: &str = r#"{"error":"invalid or expired token"}"#;

fn make_user() -> User {
    serde_json::from_str(USER_JSON).unwrap()
}

fn make_payload() -> PostPayload {
    PostPayload { title: "Hello".to_owned(), content: "Hello world!".to_owned(), is_published: true }
}

/// Call every endpoint once, discarding success values.
async fn call_every_endpoint(api: &ApiClient<FakeTransport>) -> Vec<Result<(), ApiError>> {
    let login = LoginRequest { email: "a@b.c".to_owned(), password: "secret".to_owned() };
    let register = RegisterRequest { name: "A".to_owned(), email: "a@b.c".to_owned(), password: "secret".to_owned() };
    vec![
        api.login(&login).await.map(|_| ()),
        api.register(&register).await.map(|_| ()),
        api.logout().await,
        api.current_user().await.map(|_| ()),
        api.verify_session().await.map(|_| ()),
        api.list_posts().await.map(|_| ()),
        api.list_posts_with_author().await.map(|_| ()),
        api.get_post(3).await.map(|_| ()),
        api.my_posts().await.map(|_| ()),
        api.create_post(&make_payload()).await.map(|_| ()),
        api.update_post(3, &make_payload()).await.map(|_| ()),
        api.delete_post(3).await,
    ]
}

const ENDPOINT_COUNT: usize = 12;

// =============================================================
// Request shape
// =============================================================

#[test]
fn endpoints_use_fixed_methods_and_paths() {
    let transport = FakeTransport::default();
    for _ in 0..ENDPOINT_COUNT {
        transport.respond(200, "{}");
    }
    let (api, _) = test_client(transport.clone());
    block_on(call_every_endpoint(&api));

    let seen: Vec<(Method, String)> = transport
        .requests()
        .into_iter()
        .map(|r| (r.method, r.url.trim_start_matches(TEST_BASE_URL).to_owned()))
        .collect();
    let expected = [
        (Method::Post, "/login"),
        (Method::Post, "/register"),
        (Method::Post, "/logout"),
        (Method::Get, "/me"),
        (Method::Get, "/verify-cookie-token"),
        (Method::Get, "/posts"),
        (Method::Get, "/post-detail"),
        (Method::Get, "/posts/3"),
        (Method::Get, "/posts/my"),
        (Method::Post, "/posts"),
        (Method::Put, "/posts/3"),
        (Method::Delete, "/posts/3"),
    ];
    let expected: Vec<(Method, String)> = expected.iter().map(|(m, p)| (*m, (*p).to_owned())).collect();
    assert_eq!(seen, expected);
}

#[test]
fn create_post_sends_json_payload() {
    let transport = FakeTransport::default();
    transport.respond(201, POST_JSON);
    let (api, _) = test_client(transport.clone());

    let post = block_on(api.create_post(&make_payload())).unwrap();
    assert_eq!(post.id, 3);

    let sent = transport.requests().remove(0);
    assert_eq!(sent.url, format!("{TEST_BASE_URL}/posts"));
    assert_eq!(
        sent.body,
        Some(serde_json::json!({"title": "Hello", "content": "Hello world!", "is_published": true}))
    );
}

#[test]
fn base_url_trailing_slash_is_trimmed() {
    let transport = FakeTransport::default();
    transport.respond(200, "[]");
    let (navigator, _) = crate::net::testing::recording_navigator();
    let api = ApiClient::new("http://api.test/api/", transport.clone(), SessionStore::new(), navigator);
    block_on(api.list_posts()).unwrap();
    assert_eq!(transport.requests()[0].url, "http://api.test/api/posts");
}

// =============================================================
// Success decoding
// =============================================================

#[test]
fn login_decodes_user() {
    let transport = FakeTransport::default();
    transport.respond(200, &format!(r#"{{"token":"tok","user":{USER_JSON}}}"#));
    let (api, _) = test_client(transport);

    let resp = block_on(api.login(&LoginRequest { email: "a@b.c".to_owned(), password: "pw".to_owned() })).unwrap();
    assert_eq!(resp.user, make_user());
    assert_eq!(resp.token, "tok");
}

#[test]
fn list_posts_with_author_decodes_embedded_user() {
    let transport = FakeTransport::default();
    let mut item: serde_json::Value = serde_json::from_str(POST_JSON).unwrap();
    item["user"] = serde_json::from_str(USER_JSON).unwrap();
    transport.respond(200, &serde_json::Value::Array(vec![item]).to_string());
    let (api, _) = test_client(transport);

    let list = block_on(api.list_posts_with_author()).unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].user.name, "Alice");
}

#[test]
fn delete_ignores_response_body() {
    let transport = FakeTransport::default();
    transport.respond(204, "");
    let (api, _) = test_client(transport);
    assert_eq!(block_on(api.delete_post(3)), Ok(()));
}

#[test]
fn malformed_success_body_is_decode_error() {
    let transport = FakeTransport::default();
    transport.respond(200, "not json");
    let (api, _) = test_client(transport);
    assert!(matches!(block_on(api.current_user()), Err(ApiError::Decode(_))));
}

// =============================================================
// 401 policy
// =============================================================

#[test]
fn unauthorized_on_any_endpoint_resets_session_and_redirects() {
    let transport = FakeTransport::default();
    for _ in 0..ENDPOINT_COUNT {
        transport.respond(401, UNAUTHORIZED_BODY);
    }
    let (api, visited) = test_client(transport);

    // Authenticate before each call so each 401 is observed as a reset.
    let login = LoginRequest { email: "a@b.c".to_owned(), password: "pw".to_owned() };
    let register = RegisterRequest { name: "A".to_owned(), email: "a@b.c".to_owned(), password: "pw".to_owned() };
    let calls: Vec<Box<dyn Fn() -> Result<(), ApiError> + '_>> = vec![
        Box::new(|| block_on(api.login(&login)).map(|_| ())),
        Box::new(|| block_on(api.register(&register)).map(|_| ())),
        Box::new(|| block_on(api.logout())),
        Box::new(|| block_on(api.current_user()).map(|_| ())),
        Box::new(|| block_on(api.verify_session()).map(|_| ())),
        Box::new(|| block_on(api.list_posts()).map(|_| ())),
        Box::new(|| block_on(api.list_posts_with_author()).map(|_| ())),
        Box::new(|| block_on(api.get_post(1)).map(|_| ())),
        Box::new(|| block_on(api.my_posts()).map(|_| ())),
        Box::new(|| block_on(api.create_post(&make_payload())).map(|_| ())),
        Box::new(|| block_on(api.update_post(1, &make_payload())).map(|_| ())),
        Box::new(|| block_on(api.delete_post(1))),
    ];
    assert_eq!(calls.len(), ENDPOINT_COUNT);

    for (i, call) in calls.iter().enumerate() {
        api.session().set_authenticated(make_user());
        let result = call();
        assert_eq!(
            result,
            Err(ApiError::Unauthorized { message: "invalid or expired token".to_owned() }),
            "call #{i}"
        );
        assert_eq!(api.session().snapshot(), AuthState::anonymous(), "call #{i}");
        assert_eq!(visited.lock().unwrap().len(), i + 1, "call #{i}");
    }
    assert!(visited.lock().unwrap().iter().all(|p| p == "/login"));
}

#[test]
fn server_error_has_no_side_effects() {
    let transport = FakeTransport::default();
    transport.respond(500, r#"{"error":"boom"}"#);
    let (api, visited) = test_client(transport);
    api.session().set_authenticated(make_user());

    let result = block_on(api.my_posts());
    assert_eq!(result, Err(ApiError::Server { status: 500, message: "boom".to_owned() }));
    assert!(api.session().snapshot().is_authenticated());
    assert!(visited.lock().unwrap().is_empty());
}

#[test]
fn forbidden_is_not_treated_as_unauthorized() {
    let transport = FakeTransport::default();
    transport.respond(403, r#"{"error":"forbidden"}"#);
    let (api, visited) = test_client(transport);
    api.session().set_authenticated(make_user());

    assert!(matches!(block_on(api.delete_post(1)), Err(ApiError::Server { status: 403, .. })));
    assert!(api.session().snapshot().is_authenticated());
    assert!(visited.lock().unwrap().is_empty());
}

#[test]
fn transport_error_has_no_side_effects() {
    let transport = FakeTransport::default();
    transport.fail(ApiError::Transport("offline".to_owned()));
    let (api, visited) = test_client(transport);
    api.session().set_authenticated(make_user());

    assert_eq!(block_on(api.list_posts()), Err(ApiError::Transport("offline".to_owned())));
    assert!(api.session().snapshot().is_authenticated());
    assert!(visited.lock().unwrap().is_empty());
}

#[test]
fn missing_post_reports_not_found_status() {
    let transport = FakeTransport::default();
    transport.respond(404, r#"{"error":"post not found"}"#);
    let (api, visited) = test_client(transport);

    let err = block_on(api.get_post(42)).unwrap_err();
    assert_eq!(err.status(), Some(404));
    assert_eq!(err.user_message(), "post not found");
    assert!(visited.lock().unwrap().is_empty());
}

#[test]
fn unauthorized_when_already_signed_out_still_redirects() {
    let transport = FakeTransport::default();
    transport.respond(401, r#"{"error":"unauthorized"}"#);
    let (api, visited) = test_client(transport);
    api.session().set_anonymous();

    assert!(block_on(api.current_user()).is_err());
    assert_eq!(api.session().snapshot(), AuthState::anonymous());
    assert_eq!(visited.lock().unwrap().as_slice(), ["/login".to_owned()]);
}

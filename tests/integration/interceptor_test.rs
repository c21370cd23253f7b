//! Integration tests for per-call authorization.

mod helpers;

use axum::body::Body;
use chrono::{Duration, Utc};
use futures::stream;
use http::{Request, StatusCode};

use stack_auth::{LOGIN_METHOD, TokenManager};

#[tokio::test]
async fn test_skip_listed_method_without_metadata() {
    let app = helpers::TestApp::new();

    let response = app.request(helpers::VERSION, None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["version"], "test");
}

#[tokio::test]
async fn test_protected_method_without_metadata() {
    let app = helpers::TestApp::new();

    let response = app.request(helpers::WHOAMI, None, None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["code"], "unauthenticated");
}

#[tokio::test]
async fn test_invalid_token_message_is_generic() {
    let app = helpers::TestApp::new();

    let response = app.request(helpers::WHOAMI, None, Some("a.b.c")).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["message"], "invalid token");
}

#[tokio::test]
async fn test_bearer_scheme_is_not_accepted() {
    let app = helpers::TestApp::new();
    let token = app.login("admin", "admin").await;

    let response = app
        .request(helpers::WHOAMI, None, Some(&format!("Bearer {token}")))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_expired_token_rejected() {
    let app = helpers::TestApp::new();
    let token = app
        .auth
        .tokens()
        .generate_at("admin", true, Utc::now() - Duration::minutes(6))
        .expect("token");

    let response = app.request(helpers::WHOAMI, None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_foreign_key_token_rejected() {
    let app = helpers::TestApp::new();
    let foreign = TokenManager::new(Duration::minutes(5), "stackd").expect("manager");
    let token = foreign.generate("admin", true).expect("token");

    let response = app.request(helpers::WHOAMI, None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_unrouted_method_is_gated_before_unimplemented() {
    let app = helpers::TestApp::new();

    let anonymous = app
        .request("/stack.v1.StackService/ListZones", None, None)
        .await;
    assert_eq!(anonymous.status, StatusCode::UNAUTHORIZED);

    let token = app.login("admin", "admin").await;
    let authorized = app
        .request("/stack.v1.StackService/ListZones", None, Some(&token))
        .await;
    assert_eq!(authorized.status, StatusCode::NOT_IMPLEMENTED);
    assert_eq!(authorized.body["code"], "unimplemented");
}

#[tokio::test]
async fn test_streaming_call_gated_once_at_open() {
    let app = helpers::TestApp::new();
    let token = app.login("admin", "admin").await;

    let chunks: Vec<Result<&'static [u8], std::io::Error>> =
        ["zone a\n", "zone b\n", "zone c\n"]
            .into_iter()
            .map(|line| Ok(line.as_bytes()))
            .collect();
    let body = Body::from_stream(stream::iter(chunks));

    let request = Request::builder()
        .method("POST")
        .uri(helpers::LOAD)
        .header("authorization", &token)
        .body(body)
        .expect("request");

    let response = app.send(request).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["username"], "admin");
    assert_eq!(response.body["bytes"], 21);
}

#[tokio::test]
async fn test_streaming_call_without_token_rejected() {
    let app = helpers::TestApp::new();

    let request = Request::builder()
        .method("POST")
        .uri(helpers::LOAD)
        .body(Body::from("zone a\n"))
        .expect("request");

    let response = app.send(request).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_method_is_exempt() {
    let app = helpers::TestApp::new();
    assert!(app.auth.interceptor().skip_set().contains(LOGIN_METHOD));
}

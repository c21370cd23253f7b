//! Integration tests for the Login flow.

mod helpers;

use axum::body::Body;
use http::{Request, StatusCode};

use stack_auth::LOGIN_METHOD;

#[tokio::test]
async fn test_login_success() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            LOGIN_METHOD,
            Some(serde_json::json!({
                "username": "admin",
                "password": "admin",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let token = response.body["token"].as_str().expect("token");

    let claims = app.auth.tokens().verify(token).expect("valid token");
    assert_eq!(claims.username, "admin");
    assert!(claims.admin);
    assert_eq!(claims.iss, "stackd");
    assert_eq!(claims.sub, "access");
    assert_eq!(claims.exp - claims.iat, 300);
}

#[tokio::test]
async fn test_login_non_admin() {
    let app = helpers::TestApp::new();
    app.create_test_user("viewer", "password123");

    let token = app.login("viewer", "password123").await;
    let claims = app.auth.tokens().verify(&token).expect("valid token");
    assert_eq!(claims.username, "viewer");
    assert!(!claims.admin);
}

#[tokio::test]
async fn test_login_invalid_password() {
    let app = helpers::TestApp::new();
    app.create_test_user("testuser2", "password123");

    let response = app
        .request(
            LOGIN_METHOD,
            Some(serde_json::json!({
                "username": "testuser2",
                "password": "wrongpassword",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["code"], "unauthenticated");
    assert!(response.body.get("token").is_none());
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let app = helpers::TestApp::new();

    let unknown = app
        .request(
            LOGIN_METHOD,
            Some(serde_json::json!({ "username": "nobody", "password": "admin" })),
            None,
        )
        .await;
    let wrong = app
        .request(
            LOGIN_METHOD,
            Some(serde_json::json!({ "username": "admin", "password": "nope" })),
            None,
        )
        .await;

    assert_eq!(unknown.status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown.status, wrong.status);
    assert_eq!(unknown.body, wrong.body);
}

#[tokio::test]
async fn test_login_ignores_stale_token() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            LOGIN_METHOD,
            Some(serde_json::json!({ "username": "admin", "password": "admin" })),
            Some("not-a-token"),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_token_from_login_authorizes_calls() {
    let app = helpers::TestApp::new();
    let token = app.login("admin", "admin").await;

    let response = app.request(helpers::WHOAMI, None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["username"], "admin");
    assert_eq!(response.body["admin"], true);
}

#[tokio::test]
async fn test_restart_invalidates_tokens() {
    let first = helpers::TestApp::new();
    let token = first.login("admin", "admin").await;

    let second = helpers::TestApp::new();
    let response = second.request(helpers::WHOAMI, None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_missing_field_is_invalid_argument() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            LOGIN_METHOD,
            Some(serde_json::json!({ "username": "admin" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["code"], "invalid_argument");
    assert!(response.body["message"].is_string());
}

#[tokio::test]
async fn test_login_malformed_json_is_invalid_argument() {
    let app = helpers::TestApp::new();

    let request = Request::builder()
        .method("POST")
        .uri(LOGIN_METHOD)
        .header("content-type", "application/json")
        .body(Body::from("not json"))
        .expect("request");

    let response = app.send(request).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["code"], "invalid_argument");
}

#[tokio::test]
async fn test_login_empty_credentials_rejected_by_validation() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            LOGIN_METHOD,
            Some(serde_json::json!({ "username": "", "password": "" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["code"], "invalid_argument");
    let message = response.body["message"].as_str().expect("message");
    assert!(message.contains("Username is required"));
}

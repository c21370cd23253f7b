//! Shared test helpers for integration tests.

#![allow(dead_code)]

use axum::body::Body;
use axum::routing::post;
use axum::{Extension, Json, Router};
use http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use stack_api::{AppState, build_router_with};
use stack_auth::{AuthService, Claims, Credential, PasswordHasher};
use stack_core::config::{AppConfig, PasswordConfig};

/// A business method behind the interceptor.
pub const WHOAMI: &str = "/stack.v1.StackService/WhoAmI";
/// A client-streaming business method behind the interceptor.
pub const LOAD: &str = "/stack.v1.StackService/Load";
/// A business method registered as exempt.
pub const VERSION: &str = "/stack.v1.StackService/Version";

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// The auth service behind the router
    pub auth: AuthService,
}

/// Decoded response
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

pub fn cheap_hasher() -> PasswordHasher {
    PasswordHasher::from_config(&PasswordConfig {
        memory_kib: 64,
        iterations: 1,
        parallelism: 1,
    })
    .expect("valid hash params")
}

async fn whoami(Extension(claims): Extension<Claims>) -> Json<Value> {
    Json(serde_json::json!({
        "username": claims.username,
        "admin": claims.admin,
    }))
}

async fn load(Extension(claims): Extension<Claims>, body: Body) -> Json<Value> {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("read body");
    Json(serde_json::json!({
        "username": claims.username,
        "bytes": bytes.len(),
    }))
}

async fn version() -> Json<Value> {
    Json(serde_json::json!({ "version": "test" }))
}

impl TestApp {
    /// Create a new test application with `admin`/`admin` as bootstrap admin.
    pub fn new() -> Self {
        let hasher = cheap_hasher();
        let auth = AuthService::builder()
            .hasher(hasher)
            .user("admin", "admin")
            .skip(VERSION)
            .build()
            .expect("auth service");

        let services = Router::new()
            .route(WHOAMI, post(whoami))
            .route(LOAD, post(load))
            .route(VERSION, post(version));

        let state = AppState::new(AppConfig::default(), auth.clone());
        let router = build_router_with(state, services);

        Self { router, auth }
    }

    /// Add a non-admin user directly to the bootstrap store.
    pub fn create_test_user(&self, username: &str, password: &str) {
        let credential = Credential::new(username, password, false, self.auth.hasher())
            .expect("hash password");
        self.auth.users().save(credential).expect("save user");
    }

    /// Send a request with an optional JSON body and raw token.
    pub async fn request(&self, path: &str, body: Option<Value>, token: Option<&str>) -> TestResponse {
        let mut builder = Request::builder()
            .method("POST")
            .uri(path)
            .header("content-type", "application/json");

        if let Some(t) = token {
            builder = builder.header("authorization", t);
        }

        let body = match body {
            Some(b) => Body::from(serde_json::to_vec(&b).expect("serialize")),
            None => Body::from("{}"),
        };

        self.send(builder.body(body).expect("build request")).await
    }

    /// Send a prepared request.
    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self.router.clone().oneshot(request).await.expect("oneshot");
        let status = response.status();

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("read body");
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        TestResponse { status, body }
    }

    /// Log in and return the token.
    pub async fn login(&self, username: &str, password: &str) -> String {
        let response = self
            .request(
                stack_auth::LOGIN_METHOD,
                Some(serde_json::json!({
                    "username": username,
                    "password": password,
                })),
                None,
            )
            .await;
        assert_eq!(response.status, StatusCode::OK, "login failed: {}", response.body);

        response.body["token"]
            .as_str()
            .expect("token in response")
            .to_string()
    }
}

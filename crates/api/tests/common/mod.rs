//! Shared helpers for HTTP-level integration tests.
//!
//! `build_test_app` mirrors the production router construction so tests
//! exercise the same middleware stack (CORS, request ID, timeout, tracing,
//! panic recovery) that `main.rs` uses. Requests are driven through
//! `tower::ServiceExt::oneshot` without binding a socket.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use reelhub_api::auth::jwt::{generate_access_token, JwtConfig};
use reelhub_api::config::ServerConfig;
use reelhub_api::router::build_app_router;
use reelhub_api::state::AppState;
use reelhub_core::types::DbId;

/// Build a test `ServerConfig` with safe defaults and a fixed JWT secret.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        public_base_url: "https://reelhub.test".to_string(),
        checkout_base_url: "https://pay.test/session".to_string(),
        jwt: JwtConfig {
            secret: "integration-test-secret-not-for-production".to_string(),
            access_token_expiry_mins: 15,
            refresh_token_expiry_days: 7,
        },
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool. The CDN client is left unconfigured so upload
/// endpoints answer 503, which several tests assert.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        cdn: None,
    };
    build_app_router(state, &config)
}

/// Generate a valid access token for the given user id and role, signed
/// with the test secret.
pub fn token_for(user_id: DbId, role: &str) -> String {
    generate_access_token(user_id, role, &test_config().jwt)
        .expect("token generation should succeed")
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Send a GET request without authentication.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a GET request with a Bearer token.
pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a POST request with a JSON body, without authentication.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a POST request with a JSON body and a Bearer token.
pub async fn post_json_auth(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .header("authorization", format!("Bearer {token}"))
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a POST request with a Bearer token and an empty body.
pub async fn post_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a PUT request with a JSON body and a Bearer token.
pub async fn put_json_auth(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    let request = Request::builder()
        .method("PUT")
        .uri(uri)
        .header("content-type", "application/json")
        .header("authorization", format!("Bearer {token}"))
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a DELETE request with a Bearer token.
pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    let request = Request::builder()
        .method("DELETE")
        .uri(uri)
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Read a response body as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Read a response body as a UTF-8 string.
pub async fn body_string(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Assert a response has the expected status and return its JSON body.
pub async fn expect_status(response: Response<Body>, expected: StatusCode) -> serde_json::Value {
    let status = response.status();
    let json = body_json(response).await;
    assert_eq!(status, expected, "unexpected status, body: {json}");
    json
}

// ---------------------------------------------------------------------------
// Database seed helpers
// ---------------------------------------------------------------------------

/// Role ids as seeded by the first migration.
pub const ADMIN_ROLE_ID: DbId = 1;
pub const PRODUCER_ROLE_ID: DbId = 2;
pub const VIEWER_ROLE_ID: DbId = 3;

/// Create a user directly in the database and return the row plus the
/// plaintext password used.
pub async fn seed_user(
    pool: &PgPool,
    username: &str,
    role_id: DbId,
) -> (reelhub_db::models::user::User, String) {
    let password = "test_password_123!";
    let hashed =
        reelhub_api::auth::password::hash_password(password).expect("hashing should succeed");
    let input = reelhub_db::models::user::CreateUser {
        username: username.to_string(),
        email: format!("{username}@test.com"),
        password_hash: hashed,
        role_id,
    };
    let user = reelhub_db::repositories::UserRepo::create(pool, &input)
        .await
        .expect("user creation should succeed");
    (user, password.to_string())
}

/// Create a movie owned by `producer_id` directly in the database.
pub async fn seed_movie(
    pool: &PgPool,
    producer_id: DbId,
    title: &str,
) -> reelhub_db::models::movie::Movie {
    let input = reelhub_db::models::movie::CreateMovie {
        title: title.to_string(),
        genre: "drama".to_string(),
        description: None,
    };
    reelhub_db::repositories::MovieRepo::create(pool, producer_id, &input)
        .await
        .expect("movie creation should succeed")
}

/// Create an approved movie owned by `producer_id`.
pub async fn seed_approved_movie(
    pool: &PgPool,
    producer_id: DbId,
    title: &str,
) -> reelhub_db::models::movie::Movie {
    let movie = seed_movie(pool, producer_id, title).await;
    reelhub_db::repositories::MovieRepo::set_approval(pool, movie.id, true)
        .await
        .expect("approval should succeed")
        .expect("movie should exist")
}

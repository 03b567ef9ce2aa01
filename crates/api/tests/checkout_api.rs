//! HTTP-level integration tests for checkout sessions.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, get_auth, post_json, post_json_auth, seed_user, token_for, VIEWER_ROLE_ID,
};
use sqlx::PgPool;

/// A valid plan creates a session with the right price and a checkout URL
/// ending in the session uuid.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_checkout_basic_plan(pool: PgPool) {
    let (viewer, _) = seed_user(&pool, "buyer", VIEWER_ROLE_ID).await;
    let app = common::build_test_app(pool);

    let response = post_json_auth(
        app,
        "/api/v1/checkout/sessions",
        &token_for(viewer.id, "viewer"),
        serde_json::json!({ "plan": "basic" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["data"]["amount_cents"], 799);
    let session_id = json["data"]["session_id"].as_str().unwrap();
    let checkout_url = json["data"]["checkout_url"].as_str().unwrap();
    assert_eq!(
        checkout_url,
        format!("https://pay.test/session/{session_id}")
    );
}

/// The premium plan carries its own price.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_checkout_premium_plan(pool: PgPool) {
    let (viewer, _) = seed_user(&pool, "buyer", VIEWER_ROLE_ID).await;
    let app = common::build_test_app(pool);

    let response = post_json_auth(
        app,
        "/api/v1/checkout/sessions",
        &token_for(viewer.id, "viewer"),
        serde_json::json!({ "plan": "premium" }),
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["amount_cents"], 1499);
}

/// A session can be read back by its owner, but not by another user; an
/// unknown uuid is 404.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_checkout_session_lookup(pool: PgPool) {
    let (buyer, _) = seed_user(&pool, "buyer", VIEWER_ROLE_ID).await;
    let (other, _) = seed_user(&pool, "other", VIEWER_ROLE_ID).await;
    let app = common::build_test_app(pool);

    let response = post_json_auth(
        app.clone(),
        "/api/v1/checkout/sessions",
        &token_for(buyer.id, "viewer"),
        serde_json::json!({ "plan": "basic" }),
    )
    .await;
    let json = body_json(response).await;
    let session_id = json["data"]["session_id"].as_str().unwrap().to_string();
    let uri = format!("/api/v1/checkout/sessions/{session_id}");

    let response = get_auth(app.clone(), &uri, &token_for(buyer.id, "viewer")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["plan"], "basic");
    assert_eq!(json["data"]["status"], "pending");
    assert_eq!(json["data"]["amount_cents"], 799);

    let response = get_auth(app.clone(), &uri, &token_for(other.id, "viewer")).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let unknown = format!(
        "/api/v1/checkout/sessions/{}",
        uuid::Uuid::new_v4()
    );
    let response = get_auth(app, &unknown, &token_for(buyer.id, "viewer")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// An unknown plan is 400; an anonymous request is 401.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_checkout_errors(pool: PgPool) {
    let (viewer, _) = seed_user(&pool, "buyer", VIEWER_ROLE_ID).await;
    let app = common::build_test_app(pool);

    let response = post_json_auth(
        app.clone(),
        "/api/v1/checkout/sessions",
        &token_for(viewer.id, "viewer"),
        serde_json::json!({ "plan": "platinum" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = post_json(
        app,
        "/api/v1/checkout/sessions",
        serde_json::json!({ "plan": "basic" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

//! HTTP-level integration tests for upload credential issuance and the
//! byte proxy. The test app has no CDN configured, so the happy path ends
//! in 503; everything that must fail before the CDN call is asserted to
//! do so.

mod common;

use axum::http::StatusCode;
use common::{
    post_json, post_json_auth, seed_movie, seed_user, token_for, PRODUCER_ROLE_ID, VIEWER_ROLE_ID,
};
use reelhub_db::repositories::MovieRepo;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Credential issuance
// ---------------------------------------------------------------------------

/// Without a token the endpoint answers 401.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_credentials_require_auth(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "title": "Trailer" });
    let response = post_json(app, "/api/v1/uploads/credentials", body).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// Viewers may not request upload credentials.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_credentials_forbidden_for_viewers(pool: PgPool) {
    let (viewer, _) = seed_user(&pool, "view", VIEWER_ROLE_ID).await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "title": "Trailer" });
    let response = post_json_auth(
        app,
        "/api/v1/uploads/credentials",
        &token_for(viewer.id, "viewer"),
        body,
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

/// A title over 200 characters is rejected with 400 regardless of role.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_credentials_title_too_long(pool: PgPool) {
    let (producer, _) = seed_user(&pool, "prod", PRODUCER_ROLE_ID).await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "title": "x".repeat(201) });
    let response = post_json_auth(
        app,
        "/api/v1/uploads/credentials",
        &token_for(producer.id, "producer"),
        body,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// Linking an unowned movie fails with 403 before any CDN interaction
/// (the CDN here is unconfigured, and 503 is NOT the answer).
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_credentials_unowned_movie_fails_fast(pool: PgPool) {
    let (owner, _) = seed_user(&pool, "owner", PRODUCER_ROLE_ID).await;
    let (other, _) = seed_user(&pool, "other", PRODUCER_ROLE_ID).await;
    let movie = seed_movie(&pool, owner.id, "Not Yours").await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "title": "Trailer", "movie_id": movie.id });
    let response = post_json_auth(
        app,
        "/api/v1/uploads/credentials",
        &token_for(other.id, "producer"),
        body,
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

/// A nonexistent movie_id is a 404 before any CDN interaction.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_credentials_unknown_movie(pool: PgPool) {
    let (producer, _) = seed_user(&pool, "prod", PRODUCER_ROLE_ID).await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "title": "Trailer", "movie_id": 424242 });
    let response = post_json_auth(
        app,
        "/api/v1/uploads/credentials",
        &token_for(producer.id, "producer"),
        body,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// A valid request against an unconfigured CDN answers 503.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_credentials_cdn_unconfigured(pool: PgPool) {
    let (producer, _) = seed_user(&pool, "prod", PRODUCER_ROLE_ID).await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "title": "Trailer" });
    let response = post_json_auth(
        app,
        "/api/v1/uploads/credentials",
        &token_for(producer.id, "producer"),
        body,
    )
    .await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

// ---------------------------------------------------------------------------
// Byte proxy
// ---------------------------------------------------------------------------

/// The proxy requires producer/admin role.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_proxy_rbac(pool: PgPool) {
    let (viewer, _) = seed_user(&pool, "view", VIEWER_ROLE_ID).await;
    let app = common::build_test_app(pool);

    let response = post_json(app.clone(), "/api/v1/uploads/some-guid", serde_json::json!({})).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = post_json_auth(
        app,
        "/api/v1/uploads/some-guid",
        &token_for(viewer.id, "viewer"),
        serde_json::json!({}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

/// A video id no movie references is 404.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_proxy_unknown_video_id(pool: PgPool) {
    let (producer, _) = seed_user(&pool, "prod", PRODUCER_ROLE_ID).await;
    let app = common::build_test_app(pool);

    let response = post_json_auth(
        app,
        "/api/v1/uploads/unlinked-guid",
        &token_for(producer.id, "producer"),
        serde_json::json!({}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// A video id linked to someone else's movie is 403; ownership is
/// re-verified and never inferred from the token alone.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_proxy_foreign_video_id(pool: PgPool) {
    let (owner, _) = seed_user(&pool, "owner", PRODUCER_ROLE_ID).await;
    let (other, _) = seed_user(&pool, "other", PRODUCER_ROLE_ID).await;
    let movie = seed_movie(&pool, owner.id, "Guarded").await;
    MovieRepo::link_cdn_video(&pool, movie.id, "guarded-guid")
        .await
        .unwrap();
    let app = common::build_test_app(pool);

    let response = post_json_auth(
        app,
        "/api/v1/uploads/guarded-guid",
        &token_for(other.id, "producer"),
        serde_json::json!({}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

/// The owner reaches the CDN stage, which is unconfigured here: 503.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_proxy_owner_hits_cdn_stage(pool: PgPool) {
    let (owner, _) = seed_user(&pool, "owner", PRODUCER_ROLE_ID).await;
    let movie = seed_movie(&pool, owner.id, "Mine").await;
    MovieRepo::link_cdn_video(&pool, movie.id, "my-guid")
        .await
        .unwrap();
    let app = common::build_test_app(pool);

    let response = post_json_auth(
        app,
        "/api/v1/uploads/my-guid",
        &token_for(owner.id, "producer"),
        serde_json::json!({}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

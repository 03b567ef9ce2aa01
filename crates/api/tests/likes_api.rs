//! HTTP-level integration tests for the like toggle.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, post_auth, seed_approved_movie, seed_user, token_for, PRODUCER_ROLE_ID,
    VIEWER_ROLE_ID,
};
use sqlx::PgPool;

/// Toggling twice returns to the unliked state; the count follows.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_like_toggle_round_trip(pool: PgPool) {
    let (producer, _) = seed_user(&pool, "prod", PRODUCER_ROLE_ID).await;
    let (viewer, _) = seed_user(&pool, "view", VIEWER_ROLE_ID).await;
    let movie = seed_approved_movie(&pool, producer.id, "Likeable").await;
    let app = common::build_test_app(pool);
    let uri = format!("/api/v1/movies/{}/like", movie.id);
    let token = token_for(viewer.id, "viewer");

    let response = post_auth(app.clone(), &uri, &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["liked"], true);
    assert_eq!(json["data"]["like_count"], 1);

    let response = post_auth(app, &uri, &token).await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["liked"], false);
    assert_eq!(json["data"]["like_count"], 0);
}

/// Likes from different users accumulate independently.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_like_counts_per_user(pool: PgPool) {
    let (producer, _) = seed_user(&pool, "prod", PRODUCER_ROLE_ID).await;
    let (alice, _) = seed_user(&pool, "alice", VIEWER_ROLE_ID).await;
    let (bob, _) = seed_user(&pool, "bob", VIEWER_ROLE_ID).await;
    let movie = seed_approved_movie(&pool, producer.id, "Popular").await;
    let app = common::build_test_app(pool);
    let uri = format!("/api/v1/movies/{}/like", movie.id);

    post_auth(app.clone(), &uri, &token_for(alice.id, "viewer")).await;
    let response = post_auth(app, &uri, &token_for(bob.id, "viewer")).await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["like_count"], 2);
}

/// Liking a nonexistent movie is 404; liking without auth is 401.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_like_errors(pool: PgPool) {
    let (viewer, _) = seed_user(&pool, "view", VIEWER_ROLE_ID).await;
    let app = common::build_test_app(pool);

    let response = post_auth(
        app.clone(),
        "/api/v1/movies/424242/like",
        &token_for(viewer.id, "viewer"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let request = axum::http::Request::builder()
        .method("POST")
        .uri("/api/v1/movies/1/like")
        .body(axum::body::Body::empty())
        .unwrap();
    let response = tower::ServiceExt::oneshot(app, request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

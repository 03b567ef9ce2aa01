//! Integration tests for views, likes, and watchlist repositories.

use reelhub_db::models::movie::CreateMovie;
use reelhub_db::models::user::CreateUser;
use reelhub_db::repositories::{LikeRepo, MovieRepo, UserRepo, ViewRepo, WatchlistRepo};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Seed a viewer and a movie, returning (user_id, movie_id).
async fn seed(pool: &PgPool) -> (i64, i64) {
    let user = UserRepo::create(
        pool,
        &CreateUser {
            username: "fan".to_string(),
            email: "fan@test.com".to_string(),
            password_hash: "x".to_string(),
            role_id: 3, // viewer
        },
    )
    .await
    .unwrap();

    let producer = UserRepo::create(
        pool,
        &CreateUser {
            username: "maker".to_string(),
            email: "maker@test.com".to_string(),
            password_hash: "x".to_string(),
            role_id: 2, // producer
        },
    )
    .await
    .unwrap();

    let movie = MovieRepo::create(
        pool,
        producer.id,
        &CreateMovie {
            title: "Engaging".to_string(),
            genre: "drama".to_string(),
            description: None,
        },
    )
    .await
    .unwrap();

    (user.id, movie.id)
}

// ---------------------------------------------------------------------------
// Views
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn upsert_keeps_one_row_per_pair(pool: PgPool) {
    let (user_id, movie_id) = seed(&pool).await;

    ViewRepo::upsert_progress(&pool, movie_id, user_id, 10, false)
        .await
        .unwrap();
    ViewRepo::upsert_progress(&pool, movie_id, user_id, 50, false)
        .await
        .unwrap();
    ViewRepo::touch(&pool, movie_id, user_id).await.unwrap();

    let count = ViewRepo::count_for_pair(&pool, movie_id, user_id)
        .await
        .unwrap();
    assert_eq!(count, 1);

    let record = ViewRepo::find(&pool, movie_id, user_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(record.position_seconds, 50);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn completion_reflects_latest_save(pool: PgPool) {
    let (user_id, movie_id) = seed(&pool).await;

    let record = ViewRepo::upsert_progress(&pool, movie_id, user_id, 95, true)
        .await
        .unwrap();
    assert!(record.completed);

    // Rewinding to a partial position clears the flag.
    let record = ViewRepo::upsert_progress(&pool, movie_id, user_id, 5, false)
        .await
        .unwrap();
    assert!(!record.completed);
    assert_eq!(record.position_seconds, 5);
}

// ---------------------------------------------------------------------------
// Likes
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn like_toggle_round_trip(pool: PgPool) {
    let (user_id, movie_id) = seed(&pool).await;

    assert!(LikeRepo::toggle(&pool, movie_id, user_id).await.unwrap());
    assert!(LikeRepo::exists(&pool, movie_id, user_id).await.unwrap());
    assert_eq!(LikeRepo::count_for_movie(&pool, movie_id).await.unwrap(), 1);

    assert!(!LikeRepo::toggle(&pool, movie_id, user_id).await.unwrap());
    assert!(!LikeRepo::exists(&pool, movie_id, user_id).await.unwrap());
    assert_eq!(LikeRepo::count_for_movie(&pool, movie_id).await.unwrap(), 0);
}

// ---------------------------------------------------------------------------
// Watchlist
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn watchlist_toggle_and_listing(pool: PgPool) {
    let (user_id, movie_id) = seed(&pool).await;

    assert!(WatchlistRepo::toggle(&pool, user_id, movie_id)
        .await
        .unwrap());

    let items = WatchlistRepo::list_for_user(&pool, user_id).await.unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].movie_id, movie_id);
    assert_eq!(items[0].title, "Engaging");

    assert!(!WatchlistRepo::toggle(&pool, user_id, movie_id)
        .await
        .unwrap());
    let items = WatchlistRepo::list_for_user(&pool, user_id).await.unwrap();
    assert!(items.is_empty());
}

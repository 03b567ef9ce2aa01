//! Integration tests for the movie repository against a real database.

use reelhub_db::models::movie::{CreateMovie, UpdateMovie};
use reelhub_db::models::user::CreateUser;
use reelhub_db::repositories::{MovieRepo, UserRepo};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn seed_producer(pool: &PgPool, username: &str) -> i64 {
    let user = UserRepo::create(
        pool,
        &CreateUser {
            username: username.to_string(),
            email: format!("{username}@test.com"),
            password_hash: "x".to_string(),
            role_id: 2, // producer
        },
    )
    .await
    .expect("user creation should succeed");
    user.id
}

fn new_movie(title: &str) -> CreateMovie {
    CreateMovie {
        title: title.to_string(),
        genre: "drama".to_string(),
        description: None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_and_fetch_movie(pool: PgPool) {
    let producer_id = seed_producer(&pool, "maker").await;

    let movie = MovieRepo::create(&pool, producer_id, &new_movie("Debut"))
        .await
        .unwrap();
    assert_eq!(movie.title, "Debut");
    assert_eq!(movie.producer_id, producer_id);
    assert!(!movie.is_approved);
    assert_eq!(movie.total_views, 0);
    assert!(movie.cdn_video_id.is_none());

    let fetched = MovieRepo::find_by_id(&pool, movie.id).await.unwrap();
    assert_eq!(fetched.unwrap().id, movie.id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_applies_only_given_fields(pool: PgPool) {
    let producer_id = seed_producer(&pool, "maker").await;
    let movie = MovieRepo::create(&pool, producer_id, &new_movie("Before"))
        .await
        .unwrap();

    let updated = MovieRepo::update(
        &pool,
        movie.id,
        &UpdateMovie {
            title: Some("After".to_string()),
            genre: None,
            description: None,
        },
    )
    .await
    .unwrap()
    .unwrap();

    assert_eq!(updated.title, "After");
    assert_eq!(updated.genre, "drama");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn approval_gates_listing(pool: PgPool) {
    let producer_id = seed_producer(&pool, "maker").await;
    let movie = MovieRepo::create(&pool, producer_id, &new_movie("Gated"))
        .await
        .unwrap();

    let listed = MovieRepo::list_approved(&pool, None, 20, 0).await.unwrap();
    assert!(listed.is_empty());
    let pending = MovieRepo::list_pending(&pool).await.unwrap();
    assert_eq!(pending.len(), 1);

    MovieRepo::set_approval(&pool, movie.id, true).await.unwrap();

    let listed = MovieRepo::list_approved(&pool, None, 20, 0).await.unwrap();
    assert_eq!(listed.len(), 1);
    let by_genre = MovieRepo::list_approved(&pool, Some("drama"), 20, 0)
        .await
        .unwrap();
    assert_eq!(by_genre.len(), 1);
    let other_genre = MovieRepo::list_approved(&pool, Some("horror"), 20, 0)
        .await
        .unwrap();
    assert!(other_genre.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn increment_views_returns_new_count(pool: PgPool) {
    let producer_id = seed_producer(&pool, "maker").await;
    let movie = MovieRepo::create(&pool, producer_id, &new_movie("Counted"))
        .await
        .unwrap();

    assert_eq!(
        MovieRepo::increment_views(&pool, movie.id).await.unwrap(),
        Some(1)
    );
    assert_eq!(
        MovieRepo::increment_views(&pool, movie.id).await.unwrap(),
        Some(2)
    );
    assert_eq!(MovieRepo::increment_views(&pool, 424242).await.unwrap(), None);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn cdn_video_link_is_unique(pool: PgPool) {
    let producer_id = seed_producer(&pool, "maker").await;
    let first = MovieRepo::create(&pool, producer_id, &new_movie("First"))
        .await
        .unwrap();
    let second = MovieRepo::create(&pool, producer_id, &new_movie("Second"))
        .await
        .unwrap();

    assert!(MovieRepo::link_cdn_video(&pool, first.id, "guid-1")
        .await
        .unwrap());

    let found = MovieRepo::find_by_cdn_video_id(&pool, "guid-1")
        .await
        .unwrap();
    assert_eq!(found.unwrap().id, first.id);

    // The partial unique index rejects a second movie claiming the same guid.
    let err = MovieRepo::link_cdn_video(&pool, second.id, "guid-1")
        .await
        .unwrap_err();
    match err {
        sqlx::Error::Database(db_err) => {
            assert_eq!(db_err.code().as_deref(), Some("23505"));
        }
        other => panic!("expected unique violation, got {other:?}"),
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn sitemap_listing_only_includes_approved(pool: PgPool) {
    let producer_id = seed_producer(&pool, "maker").await;
    let approved = MovieRepo::create(&pool, producer_id, &new_movie("Yes"))
        .await
        .unwrap();
    MovieRepo::create(&pool, producer_id, &new_movie("No"))
        .await
        .unwrap();
    MovieRepo::set_approval(&pool, approved.id, true)
        .await
        .unwrap();

    let entries = MovieRepo::list_approved_for_sitemap(&pool).await.unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].0, approved.id);
}

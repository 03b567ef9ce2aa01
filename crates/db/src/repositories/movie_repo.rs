//! Repository for the `movies` table.

use reelhub_core::types::DbId;
use sqlx::PgPool;

use crate::models::movie::{CreateMovie, Movie, UpdateMovie};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, genre, description, cdn_video_id, duration_seconds, \
                        producer_id, total_views, is_approved, created_at, updated_at";

/// Provides CRUD and counter operations for movies.
pub struct MovieRepo;

impl MovieRepo {
    /// Insert a new movie owned by `producer_id`, returning the created row.
    pub async fn create(
        pool: &PgPool,
        producer_id: DbId,
        input: &CreateMovie,
    ) -> Result<Movie, sqlx::Error> {
        let query = format!(
            "INSERT INTO movies (title, genre, description, producer_id)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(&input.title)
            .bind(&input.genre)
            .bind(&input.description)
            .bind(producer_id)
            .fetch_one(pool)
            .await
    }

    /// Find a movie by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movies WHERE id = $1");
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a movie by its CDN video identifier.
    pub async fn find_by_cdn_video_id(
        pool: &PgPool,
        cdn_video_id: &str,
    ) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movies WHERE cdn_video_id = $1");
        sqlx::query_as::<_, Movie>(&query)
            .bind(cdn_video_id)
            .fetch_optional(pool)
            .await
    }

    /// List approved movies, optionally filtered by genre, newest first.
    pub async fn list_approved(
        pool: &PgPool,
        genre: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Movie>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM movies
             WHERE is_approved = true AND ($1::text IS NULL OR genre = $1)
             ORDER BY created_at DESC
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(genre)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// List approved movies ranked by total view count.
    pub async fn list_featured(pool: &PgPool, limit: i64) -> Result<Vec<Movie>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM movies
             WHERE is_approved = true
             ORDER BY total_views DESC, created_at DESC
             LIMIT $1"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// List movies awaiting approval, oldest first.
    pub async fn list_pending(pool: &PgPool) -> Result<Vec<Movie>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM movies WHERE is_approved = false ORDER BY created_at ASC"
        );
        sqlx::query_as::<_, Movie>(&query).fetch_all(pool).await
    }

    /// Update movie metadata. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateMovie,
    ) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!(
            "UPDATE movies SET
                title = COALESCE($2, title),
                genre = COALESCE($3, genre),
                description = COALESCE($4, description),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.genre)
            .bind(&input.description)
            .fetch_optional(pool)
            .await
    }

    /// Link a CDN video identifier to a movie (the Ownership Linker write).
    ///
    /// Returns `true` if the row was updated.
    pub async fn link_cdn_video(
        pool: &PgPool,
        id: DbId,
        cdn_video_id: &str,
    ) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("UPDATE movies SET cdn_video_id = $2, updated_at = NOW() WHERE id = $1")
                .bind(id)
                .bind(cdn_video_id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Store the duration reported by the CDN.
    pub async fn set_duration(
        pool: &PgPool,
        id: DbId,
        duration_seconds: i32,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE movies SET duration_seconds = $2, updated_at = NOW() WHERE id = $1",
        )
        .bind(id)
        .bind(duration_seconds)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Atomically increment the total view counter, returning the new value.
    ///
    /// A single UPDATE statement, so concurrent increments cannot lose
    /// counts.
    pub async fn increment_views(pool: &PgPool, id: DbId) -> Result<Option<i64>, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "UPDATE movies SET total_views = total_views + 1 WHERE id = $1 RETURNING total_views",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// Set the approval flag. Returns the updated row, or `None` if missing.
    pub async fn set_approval(
        pool: &PgPool,
        id: DbId,
        approved: bool,
    ) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!(
            "UPDATE movies SET is_approved = $2, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .bind(approved)
            .fetch_optional(pool)
            .await
    }

    /// List (id, updated_at) of all approved movies, for sitemap generation.
    pub async fn list_approved_for_sitemap(
        pool: &PgPool,
    ) -> Result<Vec<(DbId, reelhub_core::types::Timestamp)>, sqlx::Error> {
        sqlx::query_as::<_, (DbId, reelhub_core::types::Timestamp)>(
            "SELECT id, updated_at FROM movies WHERE is_approved = true ORDER BY id ASC",
        )
        .fetch_all(pool)
        .await
    }
}

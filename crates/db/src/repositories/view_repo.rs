//! Repository for the `views` table (watch progress).
//!
//! All writes go through an upsert on the `(movie_id, user_id)` unique
//! index so each pair has exactly one canonical row.

use reelhub_core::types::DbId;
use sqlx::PgPool;

use crate::models::view::ViewRecord;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, movie_id, user_id, position_seconds, completed, viewed_at";

/// Provides upsert and lookup operations for view records.
pub struct ViewRepo;

impl ViewRepo {
    /// Upsert the watch position for a (movie, user) pair.
    ///
    /// `completed` is recomputed by the caller on every save, so the
    /// stored flag always reflects the latest position.
    pub async fn upsert_progress(
        pool: &PgPool,
        movie_id: DbId,
        user_id: DbId,
        position_seconds: i32,
        completed: bool,
    ) -> Result<ViewRecord, sqlx::Error> {
        let query = format!(
            "INSERT INTO views (movie_id, user_id, position_seconds, completed)
             VALUES ($1, $2, $3, $4)
             ON CONFLICT (movie_id, user_id) DO UPDATE SET
                position_seconds = EXCLUDED.position_seconds,
                completed = EXCLUDED.completed,
                viewed_at = NOW()
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ViewRecord>(&query)
            .bind(movie_id)
            .bind(user_id)
            .bind(position_seconds)
            .bind(completed)
            .fetch_one(pool)
            .await
    }

    /// Touch the view row for a playback signal without moving the
    /// position (used by the view counter).
    pub async fn touch(
        pool: &PgPool,
        movie_id: DbId,
        user_id: DbId,
    ) -> Result<ViewRecord, sqlx::Error> {
        let query = format!(
            "INSERT INTO views (movie_id, user_id)
             VALUES ($1, $2)
             ON CONFLICT (movie_id, user_id) DO UPDATE SET viewed_at = NOW()
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ViewRecord>(&query)
            .bind(movie_id)
            .bind(user_id)
            .fetch_one(pool)
            .await
    }

    /// Fetch the canonical row for a (movie, user) pair.
    pub async fn find(
        pool: &PgPool,
        movie_id: DbId,
        user_id: DbId,
    ) -> Result<Option<ViewRecord>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM views WHERE movie_id = $1 AND user_id = $2");
        sqlx::query_as::<_, ViewRecord>(&query)
            .bind(movie_id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Count rows for a (movie, user) pair. Exists for tests asserting
    /// the single-canonical-row invariant.
    pub async fn count_for_pair(
        pool: &PgPool,
        movie_id: DbId,
        user_id: DbId,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM views WHERE movie_id = $1 AND user_id = $2",
        )
        .bind(movie_id)
        .bind(user_id)
        .fetch_one(pool)
        .await
    }
}

//! Repository for the `likes` table.

use reelhub_core::types::DbId;
use sqlx::PgPool;

/// Provides toggle and count operations for likes.
pub struct LikeRepo;

impl LikeRepo {
    /// Toggle the like for a (movie, user) pair.
    ///
    /// Returns `true` if the pair is liked after the call. Deletes first;
    /// if nothing was deleted the like did not exist and is inserted.
    pub async fn toggle(pool: &PgPool, movie_id: DbId, user_id: DbId) -> Result<bool, sqlx::Error> {
        let deleted = sqlx::query("DELETE FROM likes WHERE movie_id = $1 AND user_id = $2")
            .bind(movie_id)
            .bind(user_id)
            .execute(pool)
            .await?;

        if deleted.rows_affected() > 0 {
            return Ok(false);
        }

        sqlx::query(
            "INSERT INTO likes (movie_id, user_id) VALUES ($1, $2)
             ON CONFLICT (movie_id, user_id) DO NOTHING",
        )
        .bind(movie_id)
        .bind(user_id)
        .execute(pool)
        .await?;
        Ok(true)
    }

    /// Whether the pair is currently liked.
    pub async fn exists(pool: &PgPool, movie_id: DbId, user_id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM likes WHERE movie_id = $1 AND user_id = $2)",
        )
        .bind(movie_id)
        .bind(user_id)
        .fetch_one(pool)
        .await
    }

    /// Total likes for a movie.
    pub async fn count_for_movie(pool: &PgPool, movie_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM likes WHERE movie_id = $1")
            .bind(movie_id)
            .fetch_one(pool)
            .await
    }
}

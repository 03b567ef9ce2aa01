//! Repository for the `comments` table.

use reelhub_core::types::DbId;
use sqlx::PgPool;

use crate::models::comment::{Comment, CommentWithAuthor};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, movie_id, user_id, body, created_at, updated_at";

/// Provides CRUD operations for comments.
pub struct CommentRepo;

impl CommentRepo {
    /// Insert a new comment, returning the created row.
    pub async fn create(
        pool: &PgPool,
        movie_id: DbId,
        user_id: DbId,
        body: &str,
    ) -> Result<Comment, sqlx::Error> {
        let query = format!(
            "INSERT INTO comments (movie_id, user_id, body)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Comment>(&query)
            .bind(movie_id)
            .bind(user_id)
            .bind(body)
            .fetch_one(pool)
            .await
    }

    /// Find a comment by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Comment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM comments WHERE id = $1");
        sqlx::query_as::<_, Comment>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a movie's comments with author usernames, newest first.
    pub async fn list_for_movie(
        pool: &PgPool,
        movie_id: DbId,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<CommentWithAuthor>, sqlx::Error> {
        sqlx::query_as::<_, CommentWithAuthor>(
            "SELECT c.id, c.movie_id, c.user_id, u.username, c.body, c.created_at, c.updated_at
             FROM comments c
             JOIN users u ON u.id = c.user_id
             WHERE c.movie_id = $1
             ORDER BY c.created_at DESC
             LIMIT $2 OFFSET $3",
        )
        .bind(movie_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await
    }

    /// Update a comment's body. Returns the updated row, or `None` if missing.
    pub async fn update_body(
        pool: &PgPool,
        id: DbId,
        body: &str,
    ) -> Result<Option<Comment>, sqlx::Error> {
        let query = format!(
            "UPDATE comments SET body = $2, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Comment>(&query)
            .bind(id)
            .bind(body)
            .fetch_optional(pool)
            .await
    }

    /// Delete a comment. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

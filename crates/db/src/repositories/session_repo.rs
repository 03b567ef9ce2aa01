//! Repository for the `sessions` table.

use reelhub_core::types::DbId;
use sqlx::PgPool;

use crate::models::session::{CreateSession, Session};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, refresh_token_hash, expires_at, revoked_at, created_at";

/// Provides CRUD operations for refresh-token sessions.
pub struct SessionRepo;

impl SessionRepo {
    /// Insert a new session, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateSession) -> Result<Session, sqlx::Error> {
        let query = format!(
            "INSERT INTO sessions (user_id, refresh_token_hash, expires_at)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Session>(&query)
            .bind(input.user_id)
            .bind(&input.refresh_token_hash)
            .bind(input.expires_at)
            .fetch_one(pool)
            .await
    }

    /// Find an active (unrevoked, unexpired) session by refresh token hash.
    pub async fn find_active_by_token_hash(
        pool: &PgPool,
        token_hash: &str,
    ) -> Result<Option<Session>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM sessions
             WHERE refresh_token_hash = $1
               AND revoked_at IS NULL
               AND expires_at > NOW()"
        );
        sqlx::query_as::<_, Session>(&query)
            .bind(token_hash)
            .fetch_optional(pool)
            .await
    }

    /// Revoke a single session. Returns `true` if the row was updated.
    pub async fn revoke(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("UPDATE sessions SET revoked_at = NOW() WHERE id = $1 AND revoked_at IS NULL")
                .bind(id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Revoke all active sessions for a user (logout everywhere).
    pub async fn revoke_all_for_user(pool: &PgPool, user_id: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE sessions SET revoked_at = NOW() WHERE user_id = $1 AND revoked_at IS NULL",
        )
        .bind(user_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }
}

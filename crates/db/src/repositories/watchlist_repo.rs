//! Repository for the `watchlist_entries` table.

use reelhub_core::types::DbId;
use sqlx::PgPool;

use crate::models::watchlist::WatchlistItem;

/// Provides toggle and listing operations for watchlists.
pub struct WatchlistRepo;

impl WatchlistRepo {
    /// Toggle the watchlist entry for a (user, movie) pair.
    ///
    /// Returns `true` if the entry exists after the call (it was added),
    /// `false` if the call removed it.
    pub async fn toggle(pool: &PgPool, user_id: DbId, movie_id: DbId) -> Result<bool, sqlx::Error> {
        let deleted =
            sqlx::query("DELETE FROM watchlist_entries WHERE user_id = $1 AND movie_id = $2")
                .bind(user_id)
                .bind(movie_id)
                .execute(pool)
                .await?;

        if deleted.rows_affected() > 0 {
            return Ok(false);
        }

        sqlx::query(
            "INSERT INTO watchlist_entries (user_id, movie_id) VALUES ($1, $2)
             ON CONFLICT (user_id, movie_id) DO NOTHING",
        )
        .bind(user_id)
        .bind(movie_id)
        .execute(pool)
        .await?;
        Ok(true)
    }

    /// List a user's watchlist with movie summaries, most recent first.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<WatchlistItem>, sqlx::Error> {
        sqlx::query_as::<_, WatchlistItem>(
            "SELECT w.movie_id, m.title, m.genre, m.duration_seconds, w.added_at
             FROM watchlist_entries w
             JOIN movies m ON m.id = w.movie_id
             WHERE w.user_id = $1
             ORDER BY w.added_at DESC",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }
}

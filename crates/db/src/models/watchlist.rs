//! Watchlist entry model.

use reelhub_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A watchlist row joined with its movie summary for listing.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct WatchlistItem {
    pub movie_id: DbId,
    pub title: String,
    pub genre: String,
    pub duration_seconds: i32,
    pub added_at: Timestamp,
}

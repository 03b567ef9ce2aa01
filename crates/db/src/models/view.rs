//! View record (watch progress) model.

use reelhub_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// The canonical watch-progress row for one (movie, user) pair.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ViewRecord {
    pub id: DbId,
    pub movie_id: DbId,
    pub user_id: DbId,
    pub position_seconds: i32,
    pub completed: bool,
    pub viewed_at: Timestamp,
}

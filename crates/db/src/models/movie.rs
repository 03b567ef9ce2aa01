//! Movie entity model and DTOs.

use reelhub_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full movie row from the `movies` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Movie {
    pub id: DbId,
    pub title: String,
    pub genre: String,
    pub description: Option<String>,
    /// Identifier of the video at the external CDN. `None` until an
    /// upload credential has been linked to this movie.
    pub cdn_video_id: Option<String>,
    pub duration_seconds: i32,
    pub producer_id: DbId,
    pub total_views: i64,
    pub is_approved: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a movie. The producer id comes from the
/// authenticated caller, never from the request body.
#[derive(Debug, Deserialize)]
pub struct CreateMovie {
    pub title: String,
    pub genre: String,
    pub description: Option<String>,
}

/// DTO for updating movie metadata. All fields are optional.
#[derive(Debug, Deserialize)]
pub struct UpdateMovie {
    pub title: Option<String>,
    pub genre: Option<String>,
    pub description: Option<String>,
}

//! Comment entity model and DTOs.

use reelhub_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full comment row from the `comments` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Comment {
    pub id: DbId,
    pub movie_id: DbId,
    pub user_id: DbId,
    pub body: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Comment joined with its author's username for listing.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct CommentWithAuthor {
    pub id: DbId,
    pub movie_id: DbId,
    pub user_id: DbId,
    pub username: String,
    pub body: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Request body for creating or updating a comment.
#[derive(Debug, Deserialize)]
pub struct CommentBody {
    pub body: String,
}

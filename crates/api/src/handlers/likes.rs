//! Handler for the like toggle.

use axum::extract::{Path, State};
use axum::Json;
use reelhub_core::error::CoreError;
use reelhub_core::types::DbId;
use reelhub_db::repositories::{LikeRepo, MovieRepo};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAuth;
use crate::response::DataResponse;
use crate::state::AppState;

/// Response body for `POST /movies/{id}/like`.
#[derive(Debug, Serialize)]
pub struct LikeToggleResponse {
    /// Whether the caller likes the movie after this toggle.
    pub liked: bool,
    pub like_count: i64,
}

/// POST /api/v1/movies/{id}/like
///
/// Toggle the caller's like on a movie. Toggling twice returns to the
/// initial state.
pub async fn toggle_like(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    RequireAuth(user): RequireAuth,
) -> AppResult<Json<DataResponse<LikeToggleResponse>>> {
    let movie = MovieRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "movie",
            id,
        }))?;

    let liked = LikeRepo::toggle(&state.pool, movie.id, user.user_id).await?;
    let like_count = LikeRepo::count_for_movie(&state.pool, movie.id).await?;

    Ok(Json(DataResponse {
        data: LikeToggleResponse { liked, like_count },
    }))
}

//! Handlers for view counting and watch progress.

use axum::extract::{Path, State};
use axum::Json;
use reelhub_core::error::CoreError;
use reelhub_core::playback::is_completed;
use reelhub_core::types::DbId;
use reelhub_db::models::view::ViewRecord;
use reelhub_db::repositories::{MovieRepo, ViewRepo};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAuth;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /movies/{id}/progress`.
#[derive(Debug, Deserialize)]
pub struct ProgressRequest {
    pub position_seconds: i32,
    /// Explicit completion flag from the player. Optional; completion is
    /// otherwise derived from the position and stored duration.
    pub completed: Option<bool>,
}

/// Response body for `POST /movies/{id}/views`.
#[derive(Debug, Serialize)]
pub struct ViewCountResponse {
    pub movie_id: DbId,
    pub total_views: i64,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/movies/{id}/views
///
/// Record a playback start: atomically increment the movie's view counter
/// and touch the caller's view row. Returns the new total.
pub async fn record_view(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    RequireAuth(user): RequireAuth,
) -> AppResult<Json<DataResponse<ViewCountResponse>>> {
    // Single UPDATE statement; concurrent plays cannot lose counts.
    let total_views = MovieRepo::increment_views(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "movie",
            id,
        }))?;

    ViewRepo::touch(&state.pool, id, user.user_id).await?;

    Ok(Json(DataResponse {
        data: ViewCountResponse {
            movie_id: id,
            total_views,
        },
    }))
}

/// POST /api/v1/movies/{id}/progress
///
/// Save the caller's watch position. Upserts the one canonical row per
/// (movie, user); completion is the explicit flag or the 90% threshold.
pub async fn save_progress(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    RequireAuth(user): RequireAuth,
    Json(input): Json<ProgressRequest>,
) -> AppResult<Json<DataResponse<ViewRecord>>> {
    if input.position_seconds < 0 {
        return Err(AppError::Core(CoreError::Validation(
            "position_seconds must not be negative".into(),
        )));
    }

    let movie = MovieRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "movie",
            id,
        }))?;

    let completed = is_completed(
        input.position_seconds,
        movie.duration_seconds,
        input.completed,
    );

    let record = ViewRepo::upsert_progress(
        &state.pool,
        id,
        user.user_id,
        input.position_seconds,
        completed,
    )
    .await?;

    Ok(Json(DataResponse { data: record }))
}

/// GET /api/v1/movies/{id}/progress
///
/// Return the caller's saved watch position for the movie, or `null` data
/// when nothing has been saved yet.
pub async fn get_progress(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    RequireAuth(user): RequireAuth,
) -> AppResult<Json<DataResponse<Option<ViewRecord>>>> {
    let record = ViewRepo::find(&state.pool, id, user.user_id).await?;
    Ok(Json(DataResponse { data: record }))
}

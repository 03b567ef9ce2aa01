//! Handlers for the caller's watchlist.

use axum::extract::State;
use axum::Json;
use reelhub_core::error::CoreError;
use reelhub_core::types::DbId;
use reelhub_db::models::watchlist::WatchlistItem;
use reelhub_db::repositories::{MovieRepo, WatchlistRepo};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAuth;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /watchlist`.
#[derive(Debug, Deserialize)]
pub struct WatchlistToggleRequest {
    pub movie_id: DbId,
}

/// Response body for `POST /watchlist`.
#[derive(Debug, Serialize)]
pub struct WatchlistToggleResponse {
    /// Whether the movie is on the caller's watchlist after this toggle.
    pub added: bool,
}

/// POST /api/v1/watchlist
///
/// Toggle a movie on the caller's watchlist. Toggling twice returns to
/// the initial state.
pub async fn toggle_watchlist(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Json(input): Json<WatchlistToggleRequest>,
) -> AppResult<Json<DataResponse<WatchlistToggleResponse>>> {
    let movie = MovieRepo::find_by_id(&state.pool, input.movie_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "movie",
            id: input.movie_id,
        }))?;

    let added = WatchlistRepo::toggle(&state.pool, user.user_id, movie.id).await?;

    Ok(Json(DataResponse {
        data: WatchlistToggleResponse { added },
    }))
}

/// GET /api/v1/watchlist
///
/// List the caller's watchlist with movie summaries, newest first.
pub async fn list_watchlist(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> AppResult<Json<DataResponse<Vec<WatchlistItem>>>> {
    let items = WatchlistRepo::list_for_user(&state.pool, user.user_id).await?;
    Ok(Json(DataResponse { data: items }))
}

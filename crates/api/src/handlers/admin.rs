//! Handlers for the `/admin` resource (user management, movie approval).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use reelhub_core::error::CoreError;
use reelhub_core::types::DbId;
use reelhub_db::models::movie::Movie;
use reelhub_db::models::user::UserResponse;
use reelhub_db::repositories::{MovieRepo, UserRepo};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `PUT /admin/movies/{id}/approval`.
#[derive(Debug, Deserialize)]
pub struct ApprovalRequest {
    pub approved: bool,
}

/// GET /api/v1/admin/users
///
/// List all users with their role names.
pub async fn list_users(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<DataResponse<Vec<UserResponse>>>> {
    let users = UserRepo::list_with_roles(&state.pool).await?;
    Ok(Json(DataResponse { data: users }))
}

/// POST /api/v1/admin/users/{id}/deactivate
///
/// Deactivate a user account. Returns 204 No Content.
pub async fn deactivate_user(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    RequireAdmin(admin): RequireAdmin,
) -> AppResult<StatusCode> {
    if id == admin.user_id {
        return Err(AppError::Core(CoreError::Validation(
            "You cannot deactivate your own account".into(),
        )));
    }

    let deactivated = UserRepo::deactivate(&state.pool, id).await?;
    if !deactivated {
        return Err(AppError::Core(CoreError::NotFound { entity: "user", id }));
    }

    tracing::info!(admin_id = admin.user_id, user_id = id, "Deactivated user");
    Ok(StatusCode::NO_CONTENT)
}

/// PUT /api/v1/admin/movies/{id}/approval
///
/// Approve or reject a movie for public listing.
pub async fn set_movie_approval(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    RequireAdmin(admin): RequireAdmin,
    Json(input): Json<ApprovalRequest>,
) -> AppResult<Json<DataResponse<Movie>>> {
    let movie = MovieRepo::set_approval(&state.pool, id, input.approved)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "movie",
            id,
        }))?;

    tracing::info!(
        admin_id = admin.user_id,
        movie_id = id,
        approved = input.approved,
        "Updated movie approval"
    );

    Ok(Json(DataResponse { data: movie }))
}

/// GET /api/v1/admin/movies/pending
///
/// List movies awaiting approval, oldest first.
pub async fn list_pending_movies(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<DataResponse<Vec<Movie>>>> {
    let movies = MovieRepo::list_pending(&state.pool).await?;
    Ok(Json(DataResponse { data: movies }))
}

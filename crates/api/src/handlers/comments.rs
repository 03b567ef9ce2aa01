//! Handlers for movie comments.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use reelhub_core::error::CoreError;
use reelhub_core::roles::ROLE_ADMIN;
use reelhub_core::types::DbId;
use reelhub_db::models::comment::{Comment, CommentBody, CommentWithAuthor};
use reelhub_db::repositories::{CommentRepo, MovieRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAuth;
use crate::query::PaginationParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// Maximum accepted comment length in characters.
const MAX_COMMENT_LENGTH: usize = 2000;

/// GET /api/v1/movies/{id}/comments
///
/// List a movie's comments with author usernames, newest first. Public.
pub async fn list_comments(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(page): Query<PaginationParams>,
) -> AppResult<Json<DataResponse<Vec<CommentWithAuthor>>>> {
    let comments =
        CommentRepo::list_for_movie(&state.pool, id, page.limit(), page.offset()).await?;
    Ok(Json(DataResponse { data: comments }))
}

/// POST /api/v1/movies/{id}/comments
///
/// Post a comment on a movie (any authenticated user).
pub async fn create_comment(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    RequireAuth(user): RequireAuth,
    Json(input): Json<CommentBody>,
) -> AppResult<(StatusCode, Json<DataResponse<Comment>>)> {
    validate_body(&input.body)?;

    let movie = MovieRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "movie",
            id,
        }))?;

    let comment =
        CommentRepo::create(&state.pool, movie.id, user.user_id, input.body.trim()).await?;

    Ok((StatusCode::CREATED, Json(DataResponse { data: comment })))
}

/// PUT /api/v1/comments/{id}
///
/// Edit a comment. Author only.
pub async fn update_comment(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    RequireAuth(user): RequireAuth,
    Json(input): Json<CommentBody>,
) -> AppResult<Json<DataResponse<Comment>>> {
    validate_body(&input.body)?;

    let comment = CommentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "comment",
            id,
        }))?;

    if comment.user_id != user.user_id {
        return Err(AppError::Core(CoreError::Forbidden(
            "Only the author can edit a comment".into(),
        )));
    }

    let updated = CommentRepo::update_body(&state.pool, id, input.body.trim())
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "comment",
            id,
        }))?;

    Ok(Json(DataResponse { data: updated }))
}

/// DELETE /api/v1/comments/{id}
///
/// Delete a comment (author or admin). Returns 204 No Content.
pub async fn delete_comment(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    RequireAuth(user): RequireAuth,
) -> AppResult<StatusCode> {
    let comment = CommentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "comment",
            id,
        }))?;

    if user.role != ROLE_ADMIN && comment.user_id != user.user_id {
        return Err(AppError::Core(CoreError::Forbidden(
            "Only the author or an admin can delete a comment".into(),
        )));
    }

    CommentRepo::delete(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Validate a comment body: 1..=MAX_COMMENT_LENGTH characters after trim.
fn validate_body(body: &str) -> Result<(), AppError> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Comment body must not be empty".into(),
        )));
    }
    if trimmed.chars().count() > MAX_COMMENT_LENGTH {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Comment body must be at most {MAX_COMMENT_LENGTH} characters"
        ))));
    }
    Ok(())
}

//! Handlers for the `/movies` resource (browsing, producer CRUD, duration sync).

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use reelhub_core::error::CoreError;
use reelhub_core::roles::ROLE_ADMIN;
use reelhub_core::types::DbId;
use reelhub_db::models::movie::{CreateMovie, Movie, UpdateMovie};
use reelhub_db::repositories::MovieRepo;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::OptionalAuthUser;
use crate::middleware::rbac::RequireProducer;
use crate::query::PaginationParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// Maximum accepted movie title length in characters.
pub const MAX_TITLE_LENGTH: usize = 200;

/// Default and maximum sizes for the featured list.
const DEFAULT_FEATURED_LIMIT: i64 = 10;
const MAX_FEATURED_LIMIT: i64 = 50;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Query parameters for `GET /movies`.
#[derive(Debug, Deserialize)]
pub struct ListMoviesParams {
    pub genre: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl ListMoviesParams {
    fn page(&self) -> PaginationParams {
        PaginationParams {
            limit: self.limit,
            offset: self.offset,
        }
    }
}

/// Query parameters for `GET /movies/featured`.
#[derive(Debug, Deserialize)]
pub struct FeaturedParams {
    pub limit: Option<i64>,
}

/// Response body for `POST /movies/{id}/sync-duration`.
#[derive(Debug, Serialize)]
pub struct DurationSyncResponse {
    pub movie_id: DbId,
    pub duration_seconds: i32,
    /// CDN processing status code at sync time.
    pub cdn_status: i32,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/movies
///
/// List approved movies, optionally filtered by genre, newest first.
pub async fn list_movies(
    State(state): State<AppState>,
    Query(params): Query<ListMoviesParams>,
) -> AppResult<Json<DataResponse<Vec<Movie>>>> {
    let page = params.page();
    let movies = MovieRepo::list_approved(
        &state.pool,
        params.genre.as_deref(),
        page.limit(),
        page.offset(),
    )
    .await?;
    Ok(Json(DataResponse { data: movies }))
}

/// GET /api/v1/movies/featured
///
/// List approved movies ranked by total view count.
pub async fn featured_movies(
    State(state): State<AppState>,
    Query(params): Query<FeaturedParams>,
) -> AppResult<Json<DataResponse<Vec<Movie>>>> {
    let limit = params
        .limit
        .unwrap_or(DEFAULT_FEATURED_LIMIT)
        .clamp(1, MAX_FEATURED_LIMIT);
    let movies = MovieRepo::list_featured(&state.pool, limit).await?;
    Ok(Json(DataResponse { data: movies }))
}

/// GET /api/v1/movies/{id}
///
/// Movie detail. Unapproved movies are only visible to their producer or
/// an admin; everyone else gets 404 so their existence is not leaked.
pub async fn get_movie(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    OptionalAuthUser(viewer): OptionalAuthUser,
) -> AppResult<Json<DataResponse<Movie>>> {
    let movie = MovieRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "movie",
            id,
        }))?;

    if !movie.is_approved {
        let can_see = viewer
            .as_ref()
            .is_some_and(|u| u.role == ROLE_ADMIN || u.user_id == movie.producer_id);
        if !can_see {
            return Err(AppError::Core(CoreError::NotFound {
                entity: "movie",
                id,
            }));
        }
    }

    Ok(Json(DataResponse { data: movie }))
}

/// POST /api/v1/movies
///
/// Create movie metadata (producer or admin). The movie starts unapproved
/// and without a linked CDN video.
pub async fn create_movie(
    State(state): State<AppState>,
    RequireProducer(user): RequireProducer,
    Json(input): Json<CreateMovie>,
) -> AppResult<(StatusCode, Json<DataResponse<Movie>>)> {
    validate_title(&input.title)?;
    if input.genre.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Genre is required".into(),
        )));
    }

    let movie = MovieRepo::create(&state.pool, user.user_id, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: movie })))
}

/// PUT /api/v1/movies/{id}
///
/// Update movie metadata (owner or admin).
pub async fn update_movie(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    RequireProducer(user): RequireProducer,
    Json(input): Json<UpdateMovie>,
) -> AppResult<Json<DataResponse<Movie>>> {
    let movie = require_owned_movie(&state, id, &user.role, user.user_id).await?;

    if let Some(ref title) = input.title {
        validate_title(title)?;
    }

    let updated = MovieRepo::update(&state.pool, movie.id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "movie",
            id,
        }))?;

    Ok(Json(DataResponse { data: updated }))
}

/// POST /api/v1/movies/{id}/sync-duration
///
/// Read the encoded length from the CDN and store it as the movie's
/// duration. 409 if the movie has no linked video yet.
pub async fn sync_duration(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    RequireProducer(user): RequireProducer,
) -> AppResult<Json<DataResponse<DurationSyncResponse>>> {
    let movie = require_owned_movie(&state, id, &user.role, user.user_id).await?;

    let video_id = movie.cdn_video_id.as_deref().ok_or_else(|| {
        AppError::Core(CoreError::Conflict(
            "Movie has no linked video to sync from".into(),
        ))
    })?;

    let cdn = state.cdn()?;
    let video = cdn.get_video(video_id).await?;

    MovieRepo::set_duration(&state.pool, movie.id, video.length).await?;

    tracing::info!(
        movie_id = movie.id,
        duration_seconds = video.length,
        cdn_status = video.status,
        "Synced movie duration from CDN"
    );

    Ok(Json(DataResponse {
        data: DurationSyncResponse {
            movie_id: movie.id,
            duration_seconds: video.length,
            cdn_status: video.status,
        },
    }))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Validate a movie title: non-empty, at most [`MAX_TITLE_LENGTH`] chars.
pub fn validate_title(title: &str) -> Result<(), AppError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Title is required".into(),
        )));
    }
    if trimmed.chars().count() > MAX_TITLE_LENGTH {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Title must be at most {MAX_TITLE_LENGTH} characters"
        ))));
    }
    Ok(())
}

/// Fetch a movie and ensure the caller may modify it (owner or admin).
pub async fn require_owned_movie(
    state: &AppState,
    id: DbId,
    role: &str,
    user_id: DbId,
) -> Result<Movie, AppError> {
    let movie = MovieRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "movie",
            id,
        }))?;

    if role != ROLE_ADMIN && movie.producer_id != user_id {
        return Err(AppError::Core(CoreError::Forbidden(
            "You do not own this movie".into(),
        )));
    }

    Ok(movie)
}

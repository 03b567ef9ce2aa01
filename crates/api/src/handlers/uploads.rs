//! Handlers for the `/uploads` resource: direct-upload credential issuance
//! and the streaming byte proxy to the video CDN.

use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use futures::TryStreamExt;
use reelhub_cdn::UploadCredential;
use reelhub_core::error::CoreError;
use reelhub_core::types::DbId;
use reelhub_db::repositories::MovieRepo;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::handlers::movies::{require_owned_movie, validate_title};
use crate::middleware::rbac::RequireProducer;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /uploads/credentials`.
#[derive(Debug, Deserialize)]
pub struct CredentialRequest {
    /// Title for the new CDN video slot.
    pub title: String,
    /// Movie to link the CDN video to. Ownership is checked before any
    /// CDN call so a rejected request never leaves an orphaned video.
    pub movie_id: Option<DbId>,
}

/// Response body for `POST /uploads/{video_id}`.
#[derive(Debug, Serialize)]
pub struct ProxyUploadResponse {
    pub video_id: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/uploads/credentials
///
/// Create a video slot on the CDN and return a scoped, time-limited
/// direct-upload credential for the browser. If `movie_id` is given the
/// slot is linked to that movie.
pub async fn issue_credentials(
    State(state): State<AppState>,
    RequireProducer(user): RequireProducer,
    Json(input): Json<CredentialRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<UploadCredential>>)> {
    validate_title(&input.title)?;

    // Ownership is verified before the CDN call; a 403/404 here must not
    // create an orphaned CDN video.
    if let Some(movie_id) = input.movie_id {
        require_owned_movie(&state, movie_id, &user.role, user.user_id).await?;
    }

    let cdn = state.cdn()?;
    let video = cdn.create_video(input.title.trim()).await?;

    if let Some(movie_id) = input.movie_id {
        MovieRepo::link_cdn_video(&state.pool, movie_id, &video.guid).await?;
    }

    let credential = cdn.direct_upload_credential(&video.guid);

    tracing::info!(
        user_id = user.user_id,
        video_id = %credential.video_id,
        movie_id = ?input.movie_id,
        "Issued upload credential"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: credential })))
}

/// POST /api/v1/uploads/{video_id}
///
/// Relay raw video bytes to the CDN as a stream. The body is never
/// buffered; it is wrapped into a `reqwest::Body` and forwarded chunk by
/// chunk.
pub async fn proxy_upload(
    State(state): State<AppState>,
    Path(video_id): Path<String>,
    RequireProducer(user): RequireProducer,
    body: Body,
) -> AppResult<Json<DataResponse<ProxyUploadResponse>>> {
    // The video id must resolve to a movie owned by the caller. Tokens
    // are not trusted to imply ownership of arbitrary CDN slots.
    let movie = MovieRepo::find_by_cdn_video_id(&state.pool, &video_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No movie references video {video_id}")))?;

    if user.role != reelhub_core::roles::ROLE_ADMIN && movie.producer_id != user.user_id {
        return Err(AppError::Core(CoreError::Forbidden(
            "You do not own the movie linked to this video".into(),
        )));
    }

    let cdn = state.cdn()?;

    let stream = body.into_data_stream().map_err(std::io::Error::other);
    cdn.upload_stream(&video_id, reqwest::Body::wrap_stream(stream))
        .await?;

    tracing::info!(
        user_id = user.user_id,
        movie_id = movie.id,
        video_id = %video_id,
        "Proxied upload to CDN"
    );

    Ok(Json(DataResponse {
        data: ProxyUploadResponse { video_id },
    }))
}

//! Route definitions for the `/movies` resource, including the per-movie
//! engagement endpoints (views, progress, like, comments).

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{comments, engagement, likes, movies};
use crate::state::AppState;

/// Routes mounted at `/movies`.
///
/// ```text
/// GET  /                      -> list approved movies
/// POST /                      -> create movie (producer/admin)
/// GET  /featured              -> most-viewed approved movies
/// GET  /{id}                  -> movie detail
/// PUT  /{id}                  -> update metadata (owner/admin)
/// POST /{id}/sync-duration    -> pull duration from CDN (owner/admin)
/// POST /{id}/views            -> count a view (auth)
/// GET  /{id}/progress         -> caller's watch progress (auth)
/// POST /{id}/progress         -> save watch progress (auth)
/// POST /{id}/like             -> like toggle (auth)
/// GET  /{id}/comments         -> list comments (public)
/// POST /{id}/comments         -> post comment (auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(movies::list_movies).post(movies::create_movie))
        .route("/featured", get(movies::featured_movies))
        .route("/{id}", get(movies::get_movie).put(movies::update_movie))
        .route("/{id}/sync-duration", post(movies::sync_duration))
        .route("/{id}/views", post(engagement::record_view))
        .route(
            "/{id}/progress",
            get(engagement::get_progress).post(engagement::save_progress),
        )
        .route("/{id}/like", post(likes::toggle_like))
        .route(
            "/{id}/comments",
            get(comments::list_comments).post(comments::create_comment),
        )
}

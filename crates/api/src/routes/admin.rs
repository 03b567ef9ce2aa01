//! Route definitions for the `/admin` resource.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::admin;
use crate::state::AppState;

/// Routes mounted at `/admin` (all admin-only via extractors).
///
/// ```text
/// GET  /users                   -> list users with roles
/// POST /users/{id}/deactivate   -> deactivate a user (204)
/// GET  /movies/pending          -> movies awaiting approval
/// PUT  /movies/{id}/approval    -> approve/reject a movie
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users", get(admin::list_users))
        .route("/users/{id}/deactivate", post(admin::deactivate_user))
        .route("/movies/pending", get(admin::list_pending_movies))
        .route("/movies/{id}/approval", put(admin::set_movie_approval))
}

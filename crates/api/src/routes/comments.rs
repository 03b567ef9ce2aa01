//! Route definitions for comments addressed by their own id.

use axum::routing::put;
use axum::Router;

use crate::handlers::comments;
use crate::state::AppState;

/// Routes mounted at `/comments`.
///
/// ```text
/// PUT    /{id}  -> edit comment (author only)
/// DELETE /{id}  -> delete comment (author or admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/{id}",
        put(comments::update_comment).delete(comments::delete_comment),
    )
}

//! Route definitions for the `/uploads` resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::uploads;
use crate::state::AppState;

/// Routes mounted at `/uploads`.
///
/// ```text
/// POST /credentials   -> direct-upload credential (producer/admin)
/// POST /{video_id}    -> streamed byte proxy to the CDN (producer/admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/credentials", post(uploads::issue_credentials))
        .route("/{video_id}", post(uploads::proxy_upload))
}

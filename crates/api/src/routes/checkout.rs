//! Route definitions for the `/checkout` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::checkout;
use crate::state::AppState;

/// Routes mounted at `/checkout`.
///
/// ```text
/// POST /sessions                 -> create a payment session (auth)
/// GET  /sessions/{session_uuid}  -> look up a session (owner/admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/sessions", post(checkout::create_session))
        .route("/sessions/{session_uuid}", get(checkout::get_session))
}

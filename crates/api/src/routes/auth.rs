//! Route definitions for the `/auth` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// Routes mounted at `/auth`.
///
/// ```text
/// POST /register  -> register
/// POST /login     -> login
/// POST /refresh   -> refresh
/// POST /logout    -> logout (requires auth)
/// GET  /callback  -> post-auth redirect
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/refresh", post(auth::refresh))
        .route("/logout", post(auth::logout))
        .route("/callback", get(auth::callback))
}

//! Route definitions for the `/watchlist` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::watchlist;
use crate::state::AppState;

/// Routes mounted at `/watchlist`.
///
/// ```text
/// GET  /  -> list the caller's watchlist
/// POST /  -> toggle a movie on the watchlist
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(watchlist::list_watchlist).post(watchlist::toggle_watchlist),
    )
}

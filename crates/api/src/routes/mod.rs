pub mod admin;
pub mod auth;
pub mod checkout;
pub mod comments;
pub mod health;
pub mod movies;
pub mod sitemap;
pub mod uploads;
pub mod watchlist;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                       register (public)
/// /auth/login                          login (public)
/// /auth/refresh                        refresh (public)
/// /auth/logout                         logout (requires auth)
/// /auth/callback                       post-auth redirect (GET)
///
/// /movies                              list (GET), create (POST, producer)
/// /movies/featured                     most-viewed approved movies (GET)
/// /movies/{id}                         detail (GET), update (PUT, owner)
/// /movies/{id}/sync-duration           pull duration from CDN (POST, owner)
/// /movies/{id}/views                   count a view (POST, auth)
/// /movies/{id}/progress                watch progress (GET, POST, auth)
/// /movies/{id}/like                    like toggle (POST, auth)
/// /movies/{id}/comments                list (GET), post (POST, auth)
///
/// /comments/{id}                       edit (PUT, author), delete (author/admin)
///
/// /uploads/credentials                 direct-upload credential (POST, producer)
/// /uploads/{video_id}                  streamed byte proxy (POST, producer)
///
/// /watchlist                           list (GET), toggle (POST, auth)
///
/// /checkout/sessions                   create payment session (POST, auth)
/// /checkout/sessions/{session_uuid}    session lookup (GET, owner/admin)
///
/// /admin/users                         list users (GET)
/// /admin/users/{id}/deactivate         deactivate (POST)
/// /admin/movies/pending                unapproved movies (GET)
/// /admin/movies/{id}/approval          approve/reject (PUT)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Authentication: register, login, refresh, logout, callback.
        .nest("/auth", auth::router())
        // Movie browsing, producer CRUD, and per-movie engagement.
        .nest("/movies", movies::router())
        // Comment edit/delete addressed by comment id.
        .nest("/comments", comments::router())
        // Upload credential issuance and the byte proxy.
        .nest("/uploads", uploads::router())
        // The caller's watchlist.
        .nest("/watchlist", watchlist::router())
        // Checkout session creation.
        .nest("/checkout", checkout::router())
        // Admin screens: users and movie approval.
        .nest("/admin", admin::router())
}

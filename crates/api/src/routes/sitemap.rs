//! Route definition for `GET /sitemap.xml` (root-level, not under `/api/v1`).

use axum::routing::get;
use axum::Router;

use crate::handlers::sitemap;
use crate::state::AppState;

/// Mount the sitemap route at the site root.
pub fn router() -> Router<AppState> {
    Router::new().route("/sitemap.xml", get(sitemap::sitemap_xml))
}

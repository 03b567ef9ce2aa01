//! Handler for `GET /sitemap.xml`.

use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use reelhub_core::sitemap::{build_sitemap, SitemapEntry};
use reelhub_db::repositories::MovieRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /sitemap.xml
///
/// XML urlset of the public base URL plus one entry per approved movie.
pub async fn sitemap_xml(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let movies = MovieRepo::list_approved_for_sitemap(&state.pool).await?;

    let entries: Vec<SitemapEntry> = movies
        .into_iter()
        .map(|(id, updated_at)| SitemapEntry {
            path: format!("/movies/{id}"),
            last_modified: Some(updated_at),
        })
        .collect();

    let xml = build_sitemap(&state.config.public_base_url, &entries);

    Ok(([(header::CONTENT_TYPE, "application/xml")], xml))
}

use std::sync::Arc;

use reelhub_cdn::VideoCdn;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: reelhub_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Video CDN client. `None` when the CDN is not configured; upload
    /// endpoints answer 503 in that case.
    pub cdn: Option<Arc<VideoCdn>>,
}

impl AppState {
    /// Borrow the CDN client, or fail with the ServiceUnavailable taxonomy
    /// error when this deployment has no CDN configured.
    pub fn cdn(&self) -> Result<&VideoCdn, reelhub_core::error::CoreError> {
        self.cdn.as_deref().ok_or_else(|| {
            reelhub_core::error::CoreError::ServiceUnavailable(
                "Video CDN is not configured".into(),
            )
        })
    }
}

//! Video CDN configuration.

/// Default lifetime of a direct-upload credential, in hours.
const DEFAULT_UPLOAD_EXPIRY_HOURS: i64 = 6;

/// Connection settings for the video CDN, loaded from the environment.
#[derive(Debug, Clone)]
pub struct CdnConfig {
    /// Base HTTPS URL of the CDN video API.
    pub base_url: String,
    /// Numeric library (collection) the videos belong to.
    pub library_id: String,
    /// API key scoped to the library. Secret; never logged.
    pub api_key: String,
    /// Lifetime of issued upload credentials in hours.
    pub upload_expiry_hours: i64,
}

impl CdnConfig {
    /// Load CDN configuration from environment variables.
    ///
    /// | Env Var                   | Required | Default                         |
    /// |---------------------------|----------|---------------------------------|
    /// | `CDN_LIBRARY_ID`          | **yes**  | --                              |
    /// | `CDN_API_KEY`             | **yes**  | --                              |
    /// | `CDN_BASE_URL`            | no       | `https://video.bunnycdn.com`    |
    /// | `CDN_UPLOAD_EXPIRY_HOURS` | no       | `6`                             |
    ///
    /// Returns `None` when the required variables are absent: the platform
    /// runs without upload support and the upload endpoints answer 503.
    pub fn from_env() -> Option<Self> {
        let library_id = std::env::var("CDN_LIBRARY_ID").ok().filter(|v| !v.is_empty())?;
        let api_key = std::env::var("CDN_API_KEY").ok().filter(|v| !v.is_empty())?;

        let base_url = std::env::var("CDN_BASE_URL")
            .unwrap_or_else(|_| "https://video.bunnycdn.com".into());

        let upload_expiry_hours: i64 = std::env::var("CDN_UPLOAD_EXPIRY_HOURS")
            .unwrap_or_else(|_| DEFAULT_UPLOAD_EXPIRY_HOURS.to_string())
            .parse()
            .expect("CDN_UPLOAD_EXPIRY_HOURS must be a valid i64");

        Some(Self {
            base_url,
            library_id,
            api_key,
            upload_expiry_hours,
        })
    }
}

//! REST API client for the video CDN.
//!
//! Wraps the CDN's video endpoints (create video, fetch status, upload
//! bytes) using [`reqwest`]. One [`VideoCdn`] instance is shared across
//! all requests; the inner `reqwest::Client` pools connections.

use serde::Deserialize;

use crate::config::CdnConfig;
use crate::signature::upload_signature;

/// HTTP client for the video CDN.
pub struct VideoCdn {
    client: reqwest::Client,
    config: CdnConfig,
}

/// Video resource as reported by the CDN.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CdnVideo {
    /// CDN-assigned video identifier (GUID).
    pub guid: String,
    pub title: Option<String>,
    /// Encoded length in seconds. Zero until transcoding has run.
    #[serde(default)]
    pub length: i32,
    /// CDN processing status code (0 queued .. 4 finished, 5 failed).
    #[serde(default)]
    pub status: i32,
}

/// A scoped, time-limited credential for direct browser-to-CDN upload.
#[derive(Debug, Clone, serde::Serialize)]
pub struct UploadCredential {
    pub video_id: String,
    pub upload_url: String,
    pub authorization_signature: String,
    /// Signature expiry, unix milliseconds.
    pub authorization_expire: i64,
    pub library_id: String,
}

/// Errors from the video CDN API layer.
#[derive(Debug, thiserror::Error)]
pub enum CdnError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The CDN returned a non-2xx status code.
    #[error("CDN API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The CDN accepted a create-video call but returned no usable id.
    #[error("CDN response contained no video identifier")]
    MissingVideoId,
}

impl VideoCdn {
    /// Create a new CDN client from configuration.
    pub fn new(config: CdnConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Library id this client is scoped to.
    pub fn library_id(&self) -> &str {
        &self.config.library_id
    }

    /// Create a new (empty) video slot titled `title`.
    ///
    /// Sends `POST /library/{libraryId}/videos`. Returns the created
    /// video; fails with [`CdnError::MissingVideoId`] if the CDN answers
    /// without a guid.
    pub async fn create_video(&self, title: &str) -> Result<CdnVideo, CdnError> {
        let response = self
            .client
            .post(format!(
                "{}/library/{}/videos",
                self.config.base_url, self.config.library_id
            ))
            .header("AccessKey", &self.config.api_key)
            .json(&serde_json::json!({ "title": title }))
            .send()
            .await?;

        let video: CdnVideo = Self::parse_response(response).await?;
        if video.guid.is_empty() {
            return Err(CdnError::MissingVideoId);
        }
        Ok(video)
    }

    /// Fetch the current status of a video (`GET /library/{id}/videos/{guid}`).
    pub async fn get_video(&self, video_id: &str) -> Result<CdnVideo, CdnError> {
        let response = self
            .client
            .get(format!(
                "{}/library/{}/videos/{}",
                self.config.base_url, self.config.library_id, video_id
            ))
            .header("AccessKey", &self.config.api_key)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Upload raw video bytes to an existing video slot as a stream.
    ///
    /// Sends `PUT /library/{id}/videos/{guid}` with the given body. The
    /// body is forwarded as-is; callers pass `reqwest::Body::wrap_stream`
    /// over the incoming request body so the payload is never buffered.
    pub async fn upload_stream(
        &self,
        video_id: &str,
        body: reqwest::Body,
    ) -> Result<(), CdnError> {
        let response = self
            .client
            .put(format!(
                "{}/library/{}/videos/{}",
                self.config.base_url, self.config.library_id, video_id
            ))
            .header("AccessKey", &self.config.api_key)
            .header("Content-Type", "application/octet-stream")
            .body(body)
            .send()
            .await?;

        Self::check_status(response).await
    }

    /// Build a direct-upload credential for an existing video id.
    ///
    /// Pure computation: the signature is derived locally from the
    /// library key, so no CDN round-trip happens here.
    pub fn direct_upload_credential(&self, video_id: &str) -> UploadCredential {
        let expire_ms = (chrono::Utc::now()
            + chrono::Duration::hours(self.config.upload_expiry_hours))
        .timestamp_millis();

        UploadCredential {
            video_id: video_id.to_string(),
            upload_url: format!("{}/tusupload", self.config.base_url),
            authorization_signature: upload_signature(
                &self.config.library_id,
                &self.config.api_key,
                expire_ms,
                video_id,
            ),
            authorization_expire: expire_ms,
            library_id: self.config.library_id.clone(),
        }
    }

    // ---- private helpers ----

    /// Ensure the response has a success status code. Returns the
    /// response unchanged on success, or a [`CdnError::Api`] containing
    /// the status and body text on failure.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, CdnError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(CdnError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Check for success and discard the body.
    async fn check_status(response: reqwest::Response) -> Result<(), CdnError> {
        Self::ensure_success(response).await?;
        Ok(())
    }

    /// Check for success and deserialize the JSON body.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, CdnError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }
}
